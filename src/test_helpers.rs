//! Shared test utilities for the plainpress test suite.
//!
//! Provides an in-memory [`SourceStore`], a fixture copier, and small
//! extractors over assembled records.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let store = MemoryStore::new(&[("A", "Title\nBody")]);
//! let records = assemble(&ids(&["A", "Missing"]), &store);
//! assert_eq!(titles(&records), vec!["Title"]);
//! ```

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;
use tempfile::TempDir;

use crate::source::SourceStore;
use crate::types::ArticleRecord;

/// A realistic article exercising every markup rule.
pub const SAMPLE_ARTICLE: &str = "\
**Fatigue Around Your Period**

Feeling tired before or during a period is common. It can range from mild to **hard to ignore**.

Why it happens:
- hormone levels shift
- sleep can be disrupted
• blood loss adds up

### What can help
Rest, hydration, and regular meals. See [our tracking guide](https://example.com/tracking).
---
If fatigue is severe, talk to a doctor.
";

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// In-memory store
// =========================================================================

/// A [`SourceStore`] backed by a map. Identifiers marked with
/// [`failing`](MemoryStore::failing) return an I/O error.
#[derive(Default)]
pub struct MemoryStore {
    sources: HashMap<String, String>,
    failing: HashSet<String>,
}

impl MemoryStore {
    pub fn new(sources: &[(&str, &str)]) -> Self {
        Self {
            sources: sources
                .iter()
                .map(|(id, text)| (id.to_string(), text.to_string()))
                .collect(),
            failing: HashSet::new(),
        }
    }

    pub fn failing(mut self, identifier: &str) -> Self {
        self.failing.insert(identifier.to_string());
        self
    }
}

impl SourceStore for MemoryStore {
    fn load(&self, identifier: &str) -> io::Result<Option<String>> {
        if self.failing.contains(identifier) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        Ok(self.sources.get(identifier).cloned())
    }
}

// =========================================================================
// Extractors
// =========================================================================

/// Owned identifier list from string literals.
pub fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// All record titles in order.
pub fn titles(records: &[ArticleRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

/// Find a record by slug. Panics if not found.
pub fn find_record<'a>(records: &'a [ArticleRecord], slug: &str) -> &'a ArticleRecord {
    records.iter().find(|r| r.slug == slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = records.iter().map(|r| r.slug.as_str()).collect();
        panic!("record '{slug}' not found. Available: {slugs:?}")
    })
}
