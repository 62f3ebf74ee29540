//! Article assembly.
//!
//! Stage 1 of the build. Walks the configured order, loads each source from a
//! [`SourceStore`], converts it, and derives its metadata:
//!
//! ```text
//! order ──► store.load(id) ──► markup::convert ──► ArticleRecord
//!                 │
//!                 └─ missing / unreadable → warn, skip
//! ```
//!
//! ## Skipped entries and navigation
//!
//! A skipped entry never becomes a record, and previous/next links are
//! computed over the assembled records, not over the configured order. With
//! `order = [a, b, c]` and `b` missing, `a` links forward to `c` and `c` back
//! to `a`. The index page lists only `a` and `c`.

use crate::markup;
use crate::metadata;
use crate::naming;
use crate::source::SourceStore;
use crate::types::{ArticleRecord, Neighbors};
use tracing::{debug, error, warn};

/// Convert one article's raw text into a record.
pub fn build_record(identifier: &str, position: usize, text: &str) -> ArticleRecord {
    let parsed = markup::convert(text);
    let html = parsed.to_html();
    let title = parsed
        .title
        .unwrap_or_else(|| naming::fallback_title(identifier));

    ArticleRecord {
        identifier: identifier.to_string(),
        title,
        slug: naming::slugify(identifier),
        reading_time: metadata::reading_time(text),
        excerpt: metadata::excerpt(&html),
        html,
        position,
    }
}

/// Load and convert every article in `order`, skipping sources that are
/// missing or unreadable.
pub fn assemble<S: SourceStore + ?Sized>(order: &[String], store: &S) -> Vec<ArticleRecord> {
    let mut records = Vec::with_capacity(order.len());

    for (position, identifier) in order.iter().enumerate() {
        let text = match store.load(identifier) {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!(
                    identifier = %identifier,
                    source = %store.describe(identifier),
                    "source not found, skipping article"
                );
                continue;
            }
            Err(e) => {
                error!(
                    identifier = %identifier,
                    source = %store.describe(identifier),
                    error = %e,
                    "failed to read source, skipping article"
                );
                continue;
            }
        };

        let record = build_record(identifier, position, &text);
        debug!(
            identifier = %identifier,
            slug = %record.slug,
            minutes = record.reading_time,
            "converted article"
        );
        records.push(record);
    }

    records
}

/// Previous/next records around `index`, by adjacency in `records`.
pub fn neighbors(records: &[ArticleRecord], index: usize) -> Neighbors<'_> {
    Neighbors {
        prev: index.checked_sub(1).and_then(|i| records.get(i)),
        next: records.get(index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DirStore;
    use crate::test_helpers::*;

    #[test]
    fn build_record_uses_title_line() {
        let record = build_record("Fatigue-Around-Your-Period", 4, SAMPLE_ARTICLE);
        assert_eq!(record.title, "Fatigue Around Your Period");
        assert_eq!(record.slug, "fatigue-around-your-period");
        assert_eq!(record.position, 4);
        assert_eq!(record.reading_time, 3);
        assert!(record.html.contains("<h3>Why it happens:</h3>"));
        assert!(record.excerpt.starts_with("Feeling tired"));
    }

    #[test]
    fn build_record_falls_back_to_identifier_title() {
        let record = build_record("Spotting-vs-a-Period", 0, "\nSome text.");
        assert_eq!(record.title, "Spotting vs a Period");
        assert_eq!(record.html, "<p>Some text.</p>\n");
    }

    #[test]
    fn build_record_falls_back_when_title_is_only_emphasis() {
        for text in ["**\nBody.", "** **\nBody."] {
            let record = build_record("Spotting-vs-a-Period", 0, text);
            assert_eq!(record.title, "Spotting vs a Period");
        }
    }

    #[test]
    fn build_record_reading_time_counts_raw_text() {
        let text = format!("Title\n{}", vec!["word"; 999].join(" "));
        let record = build_record("Long", 0, &text);
        assert_eq!(record.reading_time, 5);
    }

    #[test]
    fn assemble_follows_configured_order() {
        let store = MemoryStore::new(&[("B", "Bee\nb"), ("A", "Ay\na"), ("C", "See\nc")]);
        let records = assemble(&ids(&["C", "A", "B"]), &store);
        assert_eq!(titles(&records), vec!["See", "Ay", "Bee"]);
        assert_eq!(
            records.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn assemble_skips_missing_sources() {
        let store = MemoryStore::new(&[("First", "One\nx"), ("Third", "Three\nz")]);
        let records = assemble(&ids(&["First", "Second", "Third"]), &store);
        assert_eq!(titles(&records), vec!["One", "Three"]);
        assert_eq!(records[1].position, 2);
    }

    #[test]
    fn assemble_skips_unreadable_sources() {
        let store = MemoryStore::new(&[("Good", "Good\nx")]).failing("Bad");
        let records = assemble(&ids(&["Bad", "Good"]), &store);
        assert_eq!(titles(&records), vec!["Good"]);
    }

    #[test]
    fn assemble_empty_order() {
        let store = MemoryStore::new(&[("A", "A")]);
        assert!(assemble(&[], &store).is_empty());
    }

    #[test]
    fn neighbors_at_ends() {
        let store = MemoryStore::new(&[("A", "A"), ("B", "B"), ("C", "C")]);
        let records = assemble(&ids(&["A", "B", "C"]), &store);

        let first = neighbors(&records, 0);
        assert!(first.prev.is_none());
        assert_eq!(first.next.map(|r| r.slug.as_str()), Some("b"));

        let middle = neighbors(&records, 1);
        assert_eq!(middle.prev.map(|r| r.slug.as_str()), Some("a"));
        assert_eq!(middle.next.map(|r| r.slug.as_str()), Some("c"));

        let last = neighbors(&records, 2);
        assert_eq!(last.prev.map(|r| r.slug.as_str()), Some("b"));
        assert!(last.next.is_none());
    }

    #[test]
    fn neighbors_skip_missing_entries() {
        let store = MemoryStore::new(&[("A", "A"), ("C", "C")]);
        let records = assemble(&ids(&["A", "B", "C"]), &store);
        assert_eq!(
            neighbors(&records, 0).next.map(|r| r.slug.as_str()),
            Some("c")
        );
        assert_eq!(
            neighbors(&records, 1).prev.map(|r| r.slug.as_str()),
            Some("a")
        );
    }

    #[test]
    fn assemble_fixture_site() {
        let tmp = setup_fixtures();
        let config = crate::config::load_config(tmp.path()).unwrap();
        let store = DirStore::new(config.source_path(tmp.path()), &config.extension);
        let records = assemble(&config.order, &store);

        assert_eq!(
            titles(&records),
            vec!["What a Period Actually Is", "What Tracking Can\u{2019}t Predict"]
        );
        let last = find_record(&records, "what-tracking-cant-predict");
        assert_eq!(last.position, 2);
        assert!(last.html.starts_with("<p>Tracking shows patterns"));
    }

    #[test]
    fn neighbors_of_single_record() {
        let store = MemoryStore::new(&[("Only", "Only")]);
        let records = assemble(&ids(&["Only"]), &store);
        let n = neighbors(&records, 0);
        assert!(n.prev.is_none() && n.next.is_none());
    }
}
