//! Presentation metadata derived from an article.
//!
//! Two values are computed per article, both deterministic:
//!
//! - **Reading time**: words in the raw text at 200 words per minute, rounded
//!   to the nearest minute, never less than [`MIN_READING_MINUTES`].
//! - **Excerpt**: a plain-text preview of the converted body, used for the
//!   index cards and the page `<meta name="description">`.
//!
//! The excerpt is computed from the *converted* HTML rather than the raw text
//! so list markers, heading hashes and `**` never leak into previews.

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

pub const WORDS_PER_MINUTE: usize = 200;
pub const MIN_READING_MINUTES: u32 = 3;
pub const EXCERPT_CHARS: usize = 160;
pub const ELLIPSIS: &str = "...";

/// Estimated reading time in whole minutes.
pub fn reading_time(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    let minutes = (words as f64 / WORDS_PER_MINUTE as f64).round() as u32;
    minutes.max(MIN_READING_MINUTES)
}

/// Replace each HTML tag with a single space.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, " ").into_owned()
}

/// Plain-text preview of a converted body.
///
/// Takes the first [`EXCERPT_CHARS`] characters of the tag-stripped text,
/// trims them, and appends [`ELLIPSIS`] when the text was longer.
pub fn excerpt(html: &str) -> String {
    let plain = strip_tags(html);
    let mut excerpt: String = plain.chars().take(EXCERPT_CHARS).collect();
    excerpt = excerpt.trim().to_string();
    if plain.chars().count() > EXCERPT_CHARS {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn reading_time_floor_applies() {
        assert_eq!(reading_time(&words(400)), 3);
        assert_eq!(reading_time(""), 3);
    }

    #[test]
    fn reading_time_rounds_to_nearest() {
        assert_eq!(reading_time(&words(1000)), 5);
        assert_eq!(reading_time(&words(1099)), 5);
        assert_eq!(reading_time(&words(1100)), 6);
    }

    #[test]
    fn reading_time_ignores_whitespace_runs() {
        let text = format!("  {}  \n\n", words(1000).replace(' ', " \n\t "));
        assert_eq!(reading_time(&text), 5);
    }

    #[test]
    fn strip_tags_replaces_tags_with_spaces() {
        assert_eq!(
            strip_tags("<p>One <strong>two</strong></p>"),
            " One  two  "
        );
    }

    #[test]
    fn strip_tags_keeps_stray_brackets() {
        assert_eq!(strip_tags("a > b"), "a > b");
        assert_eq!(strip_tags("x <"), "x <");
    }

    #[test]
    fn excerpt_exactly_limit_has_no_ellipsis() {
        let text = "a".repeat(EXCERPT_CHARS);
        assert_eq!(excerpt(&text), text);
    }

    #[test]
    fn excerpt_over_limit_is_truncated_with_ellipsis() {
        let text = "a".repeat(EXCERPT_CHARS + 1);
        let e = excerpt(&text);
        assert_eq!(e, format!("{}{}", "a".repeat(EXCERPT_CHARS), ELLIPSIS));
        assert_eq!(e.chars().count(), EXCERPT_CHARS + ELLIPSIS.len());
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(EXCERPT_CHARS);
        assert_eq!(excerpt(&text), text);
    }

    #[test]
    fn excerpt_strips_markup_and_trims() {
        let html = "<h3>Overview:</h3>\n<p>Cycles vary.</p>\n";
        assert_eq!(excerpt(html), "Overview: \n Cycles vary.");
    }

    #[test]
    fn excerpt_trims_trailing_whitespace_before_ellipsis() {
        let html = format!("{} tail", "b".repeat(EXCERPT_CHARS - 1));
        assert_eq!(excerpt(&html), format!("{}...", "b".repeat(EXCERPT_CHARS - 1)));
    }
}
