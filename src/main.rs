use clap::{Parser, Subcommand};
use plainpress::source::DirStore;
use plainpress::{assemble, config, generate, markup, output};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plainpress")]
#[command(about = "Static site builder for plain-text articles")]
#[command(long_about = "\
Static site builder for plain-text articles

Articles are .txt files listed, in publication order, in config.toml.
Each one becomes an HTML page; an index page lists them all.

Layout:

  site/
  ├── config.toml                       # order, paths, page text
  └── txt/
      ├── What-a-Period-Actually-Is.txt
      └── Fatigue-Around-Your-Period.txt

Article markup (one rule per line):

  **Title**                first line, ** optional
  ### Heading              heading
  Lead-in label:           heading (any line ending in ':')
  - item / • item          bullet list
  ---                      divider
  [text](url), **bold**    inline, in paragraphs only

Run 'plainpress gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml (source paths are relative to it)
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log each converted article and written page to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert all listed articles and write the site
    Build,
    /// Convert all listed articles without writing anything
    Check {
        /// Print the article records as JSON instead of the inventory
        #[arg(long)]
        json: bool,
    },
    /// Print the HTML body converted from one text file
    Convert {
        /// Path to an article text file
        file: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.config)?;
            let store = DirStore::new(site_config.source_path(&cli.config), &site_config.extension);
            let records = assemble::assemble(&site_config.order, &store);
            let report = generate::generate(&records, &site_config, &cli.output)?;
            output::print_build_output(&report);
            if !report.is_success() {
                return Err(format!("{} page(s) failed to write", report.failed.len()).into());
            }
        }
        Command::Check { json } => {
            let site_config = config::load_config(&cli.config)?;
            let store = DirStore::new(site_config.source_path(&cli.config), &site_config.extension);
            let records = assemble::assemble(&site_config.order, &store);
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                let unlisted = store.unlisted(&site_config.order);
                output::print_check_output(&site_config.order, &records, &unlisted);
            }
        }
        Command::Convert { file } => {
            let text = std::fs::read_to_string(&file)?;
            let parsed = markup::convert(&text);
            if let Some(title) = &parsed.title {
                println!("<!-- {title} -->");
            }
            print!("{}", parsed.to_html());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log level used when `RUST_LOG` is unset. `--verbose` shows per-article
/// `debug!` lines.
fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level_to_debug() {
        assert_eq!(default_level(false), "warn");
        assert_eq!(default_level(true), "debug");
    }
}
