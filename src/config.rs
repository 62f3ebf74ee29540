//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. A user config file
//! is sparse: it is merged key-by-key on top of the stock defaults, so it only
//! needs the values it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source_dir = "txt"          # Article sources, relative to the config file
//! extension = "txt"           # Source file extension
//! articles_dir = "articles"   # Article pages, relative to the output directory
//! order = ["What-a-Period-Actually-Is", ...]   # Publication order
//!
//! [site]
//! name = "The CycleVault"
//! section = "Education"
//! tagline = "Plain-English menstrual health education."
//! support_email = "support@thecyclevault.com"
//! root = "../"                # From the index page to the site root
//! stylesheet = "styles.css"   # Relative to the site root
//! script = "main.js"
//! icon = "images/cyclevault-icon-light.png"
//!
//! [[site.nav]]
//! label = "Why?"
//! anchor = "problem"          # Links to <root>index.html#problem
//! ```
//!
//! ## Order
//!
//! `order` drives both which articles are built and the previous/next links
//! between them. It is plain data handed to the assembler; nothing else reads
//! it. Identifiers must slugify to distinct, non-empty slugs.
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the article sources, relative to the config directory.
    pub source_dir: String,
    /// Source file extension, without the dot.
    pub extension: String,
    /// Directory for article pages, relative to the output directory.
    pub articles_dir: String,
    /// Article identifiers in publication order.
    pub order: Vec<String>,
    /// Page template settings.
    pub site: SiteSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source_dir: "txt".to_string(),
            extension: "txt".to_string(),
            articles_dir: "articles".to_string(),
            order: DEFAULT_ORDER.iter().map(|s| s.to_string()).collect(),
            site: SiteSettings::default(),
        }
    }
}

const DEFAULT_ORDER: [&str; 15] = [
    "What-a-Period-Actually-Is",
    "The-Menstrual-Cycle-Explained-Simply",
    "What-Hormones-Are-Doing-During-Your-Cycle",
    "Why-Cycle-Length-Can-Change-From-Month-to-Month",
    "What-Normal-Periods-Really-Look-Like",
    "Why-Period-Symptoms-Can-Feel-Different-Every-Month",
    "Cramps-Why-They-Happen-and-Why-They-Vary",
    "Fatigue-Around-Your-Period",
    "Mood-Changes-Across-the-Cycle",
    "Spotting-vs-a-Period",
    "How-Stress-Shows-Up-in-Your-Cycle",
    "What-Tracking-Your-Cycle-Can-Help-You-Notice",
    "What-Tracking-Can\u{2019}t-Predict",
    "How-Periods-Can-Change-Across-Life-Stages",
    "When-It-Makes-Sense-to-Talk-to-a-Doctor",
];

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.trim().is_empty() {
            return Err(ConfigError::Validation(
                "extension must not be empty".into(),
            ));
        }
        if self.articles_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "articles_dir must not be empty".into(),
            ));
        }
        if self.articles_dir.split('/').any(|part| part == "..") {
            return Err(ConfigError::Validation(
                "articles_dir must stay inside the output directory".into(),
            ));
        }

        let mut seen: HashMap<String, &str> = HashMap::new();
        for id in &self.order {
            let slug = naming::slugify(id);
            if slug.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "order entry '{id}' has an empty slug"
                )));
            }
            if let Some(previous) = seen.insert(slug.clone(), id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "order entries '{previous}' and '{id}' share the slug '{slug}'"
                )));
            }
        }
        Ok(())
    }

    /// Absolute source directory for a config rooted at `root`.
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    /// Path segments of `articles_dir`, ignoring empty and `.` parts.
    pub fn articles_segments(&self) -> Vec<&str> {
        self.articles_dir
            .split('/')
            .filter(|part| !part.is_empty() && *part != ".")
            .collect()
    }
}

/// Page template settings shared by the article and index pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Site name, shown in the header, footer, and page titles.
    pub name: String,
    /// Section name for this collection of articles (e.g. "Education").
    pub section: String,
    /// Index page subheading, also its meta description.
    pub tagline: String,
    /// Contact address for corrections.
    pub support_email: String,
    /// Footer copyright line.
    pub copyright: String,
    /// Disclaimer printed in every page footer.
    pub footer_disclaimer: String,
    /// Disclaimer box shown at the top of each article and on the index.
    pub article_disclaimer: String,
    /// Relative path from the index page to the site root.
    pub root: String,
    /// Stylesheet path, relative to the site root.
    pub stylesheet: String,
    /// Shared script path, relative to the site root.
    pub script: String,
    /// Logo/favicon path, relative to the site root.
    pub icon: String,
    /// Privacy policy page, relative to the site root.
    pub privacy_page: String,
    /// Contact page, relative to the site root.
    pub contact_page: String,
    /// Header links to sections of the home page.
    pub nav: Vec<NavLink>,
}

/// A header link to an anchor on the site's home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub anchor: String,
}

impl NavLink {
    fn new(label: &str, anchor: &str) -> Self {
        Self {
            label: label.to_string(),
            anchor: anchor.to_string(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "The CycleVault".to_string(),
            section: "Education".to_string(),
            tagline: "Plain-English menstrual health education.".to_string(),
            support_email: "support@thecyclevault.com".to_string(),
            copyright: "\u{a9} 2025 The CycleVault. All rights reserved.".to_string(),
            footer_disclaimer: "The CycleVault is not a medical device and does not provide \
                medical advice. Consult a doctor for health concerns."
                .to_string(),
            article_disclaimer: "This content is for informational purposes only and does not \
                replace medical advice. If you have concerns about your health, consider \
                speaking with a qualified healthcare professional."
                .to_string(),
            root: "../".to_string(),
            stylesheet: "styles.css".to_string(),
            script: "main.js".to_string(),
            icon: "images/cyclevault-icon-light.png".to_string(),
            privacy_page: "privacy.html".to_string(),
            contact_page: "contact.html".to_string(),
            nav: vec![
                NavLink::new("Why?", "problem"),
                NavLink::new("Features", "features"),
                NavLink::new("Privacy", "privacy"),
                NavLink::new("Pricing", "pricing"),
                NavLink::new("FAQ", "faq"),
            ],
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Built-in settings as a TOML table, the layer `config.toml` is laid over.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("SiteConfig::default serializes to TOML")
}

/// Lay `overrides` over `defaults`.
///
/// Tables combine key by key, so `[site]` may set only `support_email` and
/// keep every other stock page string. Any other value, including the
/// `order` array and the `nav` list, replaces the default outright.
pub fn merge_toml(defaults: toml::Value, overrides: toml::Value) -> toml::Value {
    match (defaults, overrides) {
        (toml::Value::Table(mut table), toml::Value::Table(overrides)) => {
            for (key, value) in overrides {
                let value = match table.remove(&key) {
                    Some(default) => merge_toml(default, value),
                    None => value,
                };
                table.insert(key, value);
            }
            toml::Value::Table(table)
        }
        (_, value) => value,
    }
}

/// Parse `{site_dir}/config.toml`, or `Ok(None)` when the site has none.
pub fn load_raw_config(site_dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let path = site_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path)?;
    Ok(Some(toml::from_str(&text)?))
}

/// Build a checked [`SiteConfig`] from the stock table and the site's
/// overrides, if any.
pub fn resolve_config(
    defaults: toml::Value,
    overrides: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overrides {
        Some(overrides) => merge_toml(defaults, overrides),
        None => defaults,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// The configuration a build in `site_dir` runs with.
///
/// A site without `config.toml` builds the stock article order. Unknown keys
/// and orders whose identifiers collide on a slug are errors.
pub fn load_config(site_dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(site_dir)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# plainpress Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory holding the article sources, relative to this file.
source_dir = "txt"

# Source file extension (without the dot). Article "X" is read from X.txt.
extension = "txt"

# Where article pages go, relative to the output directory.
# The index page is always written to <output>/index.html.
articles_dir = "articles"

# Publication order. Drives which articles are built and the
# previous/next links between them. Missing sources are skipped
# with a warning. Identifiers must produce distinct slugs.
order = [
    "What-a-Period-Actually-Is",
    "The-Menstrual-Cycle-Explained-Simply",
    "What-Hormones-Are-Doing-During-Your-Cycle",
    "Why-Cycle-Length-Can-Change-From-Month-to-Month",
    "What-Normal-Periods-Really-Look-Like",
    "Why-Period-Symptoms-Can-Feel-Different-Every-Month",
    "Cramps-Why-They-Happen-and-Why-They-Vary",
    "Fatigue-Around-Your-Period",
    "Mood-Changes-Across-the-Cycle",
    "Spotting-vs-a-Period",
    "How-Stress-Shows-Up-in-Your-Cycle",
    "What-Tracking-Your-Cycle-Can-Help-You-Notice",
    "What-Tracking-Can’t-Predict",
    "How-Periods-Can-Change-Across-Life-Stages",
    "When-It-Makes-Sense-to-Talk-to-a-Doctor",
]

# ---------------------------------------------------------------------------
# Page templates
# ---------------------------------------------------------------------------
[site]
name = "The CycleVault"
section = "Education"
tagline = "Plain-English menstrual health education."
support_email = "support@thecyclevault.com"
copyright = "© 2025 The CycleVault. All rights reserved."
footer_disclaimer = "The CycleVault is not a medical device and does not provide medical advice. Consult a doctor for health concerns."
article_disclaimer = "This content is for informational purposes only and does not replace medical advice. If you have concerns about your health, consider speaking with a qualified healthcare professional."

# Relative path from the index page to the site root. Article pages
# add one "../" per articles_dir component.
root = "../"

# Shared assets and pages, relative to the site root.
stylesheet = "styles.css"
script = "main.js"
icon = "images/cyclevault-icon-light.png"
privacy_page = "privacy.html"
contact_page = "contact.html"

# Header links to anchors on the home page (<root>index.html#anchor).
[[site.nav]]
label = "Why?"
anchor = "problem"

[[site.nav]]
label = "Features"
anchor = "features"

[[site.nav]]
label = "Privacy"
anchor = "privacy"

[[site.nav]]
label = "Pricing"
anchor = "pricing"

[[site.nav]]
label = "FAQ"
anchor = "faq"
"##
}
