//! HTML site generation.
//!
//! Stage 2 of the build. Takes the assembled records and writes the final
//! static pages.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): a card per article with its excerpt
//! - **Article pages** (`/articles/{slug}.html`): the converted body, reading
//!   time, disclaimer, support note, and previous/next links
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! └── articles/
//!     ├── what-a-period-actually-is.html
//!     ├── the-menstrual-cycle-explained-simply.html
//!     └── ...
//! ```
//!
//! The stylesheet, shared script, icon, and the privacy/contact pages live
//! outside the output directory. Pages reach them through relative links:
//! the index page uses `site.root`, article pages prepend one `../` per
//! `articles_dir` component.
//!
//! ## Escaping
//!
//! Templates are [maud](https://maud.lambda.xyz/), which escapes every
//! interpolated value by default. Article titles, bodies, and excerpts are the
//! exception: they are inserted with `PreEscaped` because they carry markup
//! produced by [`markup::convert`](crate::markup::convert) (links, `<strong>`)
//! or author-written entities. Sources are trusted authoring input and must be
//! cleaned before they reach the build. Attribute values (such as the meta
//! description) and configuration strings are always escaped.
//!
//! ## Failure Handling
//!
//! All pages are rendered in memory first, then written one by one. A failed
//! write is logged and recorded in the [`BuildReport`]; the remaining pages are
//! still written. Only failing to create the output directories aborts.

use crate::assemble;
use crate::config::{SiteConfig, SiteSettings};
use crate::types::{ArticleRecord, Neighbors};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Index page filename, relative to the output directory.
pub const INDEX_FILE: &str = "index.html";

const THEME_JS: &str = include_str!("../static/theme.js");

/// Final HTML for one output file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub html: String,
}

/// Outcome of writing the rendered pages.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Pages written, relative to the output directory, in write order.
    pub written: Vec<PathBuf>,
    /// Pages that failed to write, with the error message.
    pub failed: Vec<(PathBuf, String)>,
    /// Number of article pages among `written`.
    pub articles: usize,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Relative links from one page to the rest of the site.
#[derive(Debug, Clone, PartialEq)]
struct PageLinks {
    /// From the page to the site root (ends in `/` or is empty).
    root: String,
    /// From the page to the section index page.
    section_index: String,
}

impl PageLinks {
    fn for_index(site: &SiteSettings) -> Self {
        Self {
            root: site.root.clone(),
            section_index: INDEX_FILE.to_string(),
        }
    }

    fn for_article(site: &SiteSettings, depth: usize) -> Self {
        let up = "../".repeat(depth);
        Self {
            root: format!("{up}{}", site.root),
            section_index: format!("{up}{INDEX_FILE}"),
        }
    }

    fn asset(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    fn home(&self) -> String {
        self.asset("index.html")
    }
}

// ============================================================================
// Rendering and writing
// ============================================================================

/// Render every article page plus the index page, without touching disk.
///
/// Article pages come first, in record order; the index page is last.
pub fn render_pages(records: &[ArticleRecord], config: &SiteConfig) -> Vec<RenderedPage> {
    let segments = config.articles_segments();
    let articles_dir: PathBuf = segments.iter().collect();
    let article_links = PageLinks::for_article(&config.site, segments.len());
    let index_links = PageLinks::for_index(&config.site);
    let article_href_prefix: String = segments.iter().map(|s| format!("{s}/")).collect();

    let mut pages: Vec<RenderedPage> = records
        .iter()
        .enumerate()
        .map(|(i, record)| RenderedPage {
            path: articles_dir.join(record.filename()),
            html: render_article_page(
                record,
                assemble::neighbors(records, i),
                &config.site,
                &article_links,
            )
            .into_string(),
        })
        .collect();

    pages.push(RenderedPage {
        path: PathBuf::from(INDEX_FILE),
        html: render_index_page(records, &config.site, &index_links, &article_href_prefix)
            .into_string(),
    });

    pages
}

/// Render and write all pages under `output_dir`.
pub fn generate(
    records: &[ArticleRecord],
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<BuildReport, GenerateError> {
    let articles_dir = config
        .articles_segments()
        .iter()
        .fold(output_dir.to_path_buf(), |dir, s| dir.join(s));
    fs::create_dir_all(&articles_dir).map_err(|source| GenerateError::CreateDir {
        path: articles_dir.clone(),
        source,
    })?;

    let pages = render_pages(records, config);
    let mut report = BuildReport::default();

    for page in pages {
        let target = output_dir.join(&page.path);
        match fs::write(&target, &page.html) {
            Ok(()) => {
                info!(path = %page.path.display(), "generated page");
                if page.path != Path::new(INDEX_FILE) {
                    report.articles += 1;
                }
                report.written.push(page.path);
            }
            Err(e) => {
                error!(path = %target.display(), error = %e, "failed to write page");
                report.failed.push((page.path, e.to_string()));
            }
        }
    }

    Ok(report)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the shared page shell: head, header, footer, scripts.
fn base_document(
    title: &str,
    description: &str,
    site: &SiteSettings,
    links: &PageLinks,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PreEscaped(title)) " - " (site.name) " " (site.section) }
                meta name="description" content=(description);
                link rel="stylesheet" href=(links.asset(&site.stylesheet));
                link rel="icon" type="image/png" href=(links.asset(&site.icon));
            }
            body {
                (site_header(site, links))
                main {
                    (content)
                }
                (site_footer(site, links))
                script src=(links.asset(&site.script)) {}
                script { (PreEscaped(THEME_JS)) }
            }
        }
    }
}

/// Renders the header: logo, navigation, theme toggle.
fn site_header(site: &SiteSettings, links: &PageLinks) -> Markup {
    let home = links.home();
    html! {
        header #main-header {
            div.container.header-container {
                a.logo href=(home) {
                    img.logo-icon src=(links.asset(&site.icon)) alt={ (site.name) " Logo" };
                    span.logo-text { (site.name) }
                }
                nav.main-nav {
                    ul {
                        li { a.active href=(links.section_index) { (site.section) } }
                        @for item in &site.nav {
                            li { a href={ (home) "#" (item.anchor) } { (item.label) } }
                        }
                    }
                }
                button #theme-toggle aria-label="Toggle Dark Mode" {
                    (sun_icon())
                    (moon_icon())
                }
            }
        }
    }
}

fn sun_icon() -> Markup {
    const RAYS: [(&str, &str, &str, &str); 8] = [
        ("12", "1", "12", "3"),
        ("12", "21", "12", "23"),
        ("4.22", "4.22", "5.64", "5.64"),
        ("18.36", "18.36", "19.78", "19.78"),
        ("1", "12", "3", "12"),
        ("21", "12", "23", "12"),
        ("4.22", "19.78", "5.64", "18.36"),
        ("18.36", "5.64", "19.78", "4.22"),
    ];
    html! {
        svg.sun-icon xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            circle cx="12" cy="12" r="5" {}
            @for (x1, y1, x2, y2) in RAYS {
                line x1=(x1) y1=(y1) x2=(x2) y2=(y2) {}
            }
        }
    }
}

fn moon_icon() -> Markup {
    html! {
        svg.moon-icon xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" {}
        }
    }
}

/// Renders the footer: copyright, legal links, disclaimer.
fn site_footer(site: &SiteSettings, links: &PageLinks) -> Markup {
    html! {
        footer {
            div.container.footer-container {
                div.footer-left {
                    span.footer-logo { (site.name) }
                    p.copyright { (site.copyright) }
                }
                div.footer-right {
                    a href=(links.asset(&site.privacy_page)) { "Privacy Policy" }
                    a href=(links.asset(&site.contact_page)) { "Contact" }
                }
            }
            div.container.footer-disclaimer {
                p { (site.footer_disclaimer) }
            }
        }
    }
}

/// Renders the previous/next buttons, with empty spacers at the ends.
fn article_nav(neighbors: Neighbors<'_>) -> Markup {
    html! {
        div.nav-buttons {
            @if let Some(prev) = neighbors.prev {
                a.btn.btn-secondary href=(prev.filename()) { "← Previous" }
            } @else {
                span {}
            }
            @if let Some(next) = neighbors.next {
                a.btn.btn-primary href=(next.filename()) { "Next Article →" }
            } @else {
                span {}
            }
        }
    }
}

fn support_link(site: &SiteSettings, style: &str) -> Markup {
    html! {
        a href={ "mailto:" (site.support_email) } style=(style) { (site.support_email) }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders one article page.
fn render_article_page(
    record: &ArticleRecord,
    neighbors: Neighbors<'_>,
    site: &SiteSettings,
    links: &PageLinks,
) -> Markup {
    let back = format!("← Back to {}", site.section);

    let content = html! {
        div.article-container.fade-in {
            a.back-link href=(links.section_index) { (back) }

            h1.text-gradient { (PreEscaped(&record.title)) }

            div.article-meta {
                span { (site.name) " " (site.section) }
                span { "•" }
                span { (record.reading_time) " min read" }
            }

            div.edu-disclaimer-box {
                strong { "Disclaimer:" }
                " "
                (site.article_disclaimer)
            }

            div.article-content {
                (PreEscaped(&record.html))
            }

            div.edu-support-note {
                "Questions or corrections? Email "
                (support_link(site, "color:var(--primary)"))
            }

            (article_nav(neighbors))

            div style="text-align: center; margin-top: 40px;" {
                a.back-link href=(links.section_index) { "Back to " (site.section) }
            }
        }
    };

    base_document(&record.title, &record.excerpt, site, links, content)
}

/// Renders the index page listing every article.
fn render_index_page(
    records: &[ArticleRecord],
    site: &SiteSettings,
    links: &PageLinks,
    article_href_prefix: &str,
) -> Markup {
    let content = html! {
        section.edu-hero.alt-bg {
            div.container.narrow-container.fade-in {
                h1.text-gradient { (site.section) }
                p.hero-subhead { (site.tagline) }

                div.edu-disclaimer-box style="text-align: left; max-width: 700px; margin: 0 auto 20px;" {
                    p style="margin-bottom: 0.5em; color: inherit;" { (site.article_disclaimer) }
                    p style="margin-bottom: 0; font-size: 0.85rem; opacity: 0.8;" {
                        "If you believe something is incorrect or unclear, email "
                        (support_link(site, "text-decoration: underline;"))
                        " and we’ll review it."
                    }
                }
            }
        }

        section.section {
            div.container {
                div.grid.grid-3 {
                    @for (i, record) in records.iter().enumerate() {
                        div class={ "card article-card fade-in delay-" (i % 3) } {
                            div {
                                h3 style="margin-bottom: 12px;" { (PreEscaped(&record.title)) }
                                p.article-excerpt { (PreEscaped(&record.excerpt)) }
                            }
                            a.read-link href={ (article_href_prefix) (record.filename()) } {
                                "Read Article →"
                            }
                        }
                    }
                }
            }
        }
    };

    base_document(&site.section, &site.tagline, site, links, content)
}

// ============================================================================
// Tests
// ============================================================================
