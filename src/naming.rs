//! Identifier conventions shared by every stage.
//!
//! An article is named by its identifier: the source file stem, such as
//! `What-a-Period-Actually-Is` for `txt/What-a-Period-Actually-Is.txt`. Two
//! things are derived from it:
//!
//! - **Slug**: the URL-safe output name (`what-a-period-actually-is`), used for
//!   the page filename and for previous/next links.
//! - **Fallback title**: dashes turned into spaces, used when the article has
//!   no title line of its own.
//!
//! ```text
//! What-Tracking-Can’t-Predict   → what-tracking-cant-predict
//! Spotting_vs a   Period        → spotting-vs-a-period
//! ```

/// Apostrophes dropped from slugs, straight and typographic.
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Derive the URL-safe slug for an article identifier.
///
/// Lower-cases, turns underscores and whitespace runs into single dashes,
/// drops apostrophes, then drops anything outside `[a-z0-9-]`.
pub fn slugify(identifier: &str) -> String {
    let lowered = identifier.to_lowercase().replace('_', "-");

    let mut dashed = String::with_capacity(lowered.len());
    let mut in_space = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_space {
                dashed.push('-');
            }
            in_space = true;
        } else {
            dashed.push(c);
            in_space = false;
        }
    }

    dashed
        .chars()
        .filter(|c| !APOSTROPHES.contains(c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Output filename for a slug.
pub fn page_filename(slug: &str) -> String {
    format!("{slug}.html")
}

/// Display title used when an article has no title line.
pub fn fallback_title(identifier: &str) -> String {
    identifier.replace('-', " ")
}
