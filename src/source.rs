//! Article source storage.
//!
//! The assembler never touches the filesystem directly: it asks a
//! [`SourceStore`] for the raw text of each identifier. [`DirStore`] is the
//! production store, reading `{dir}/{identifier}.{extension}`.
//!
//! A store distinguishes "not there" (`Ok(None)`) from "there but unreadable"
//! (`Err`), so the assembler can log the two differently.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Source of raw article text, keyed by identifier.
pub trait SourceStore {
    /// Load the raw text for `identifier`. `Ok(None)` if no such source exists.
    fn load(&self, identifier: &str) -> io::Result<Option<String>>;

    /// Human-readable location of a source, for log messages.
    fn describe(&self, identifier: &str) -> String {
        identifier.to_string()
    }
}

/// Reads article sources from a flat directory of text files.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
    extension: String,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Path of the source file for `identifier`.
    pub fn path_for(&self, identifier: &str) -> PathBuf {
        self.dir.join(format!("{identifier}.{}", self.extension))
    }

    /// Source files in the directory that no identifier in `order` names.
    ///
    /// Only the top level is inspected. Returned as identifiers, sorted. A
    /// missing directory yields an empty list.
    pub fn unlisted(&self, order: &[String]) -> Vec<String> {
        let listed: HashSet<&str> = order.iter().map(String::as_str).collect();
        let mut found: Vec<String> = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == self.extension.as_str())
            })
            .filter_map(|entry| {
                entry
                    .path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(String::from)
            })
            .filter(|stem| !listed.contains(stem.as_str()))
            .collect();
        found.sort();
        found
    }
}

impl SourceStore for DirStore {
    fn load(&self, identifier: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(identifier)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn describe(&self, identifier: &str) -> String {
        self.path_for(identifier).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, DirStore) {
        let tmp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(tmp.path().join(name), content).unwrap();
        }
        let store = DirStore::new(tmp.path(), "txt");
        (tmp, store)
    }

    #[test]
    fn load_reads_existing_source() {
        let (_tmp, store) = store_with(&[("Fatigue.txt", "Fatigue\n\nBody")]);
        assert_eq!(
            store.load("Fatigue").unwrap().as_deref(),
            Some("Fatigue\n\nBody")
        );
    }

    #[test]
    fn load_missing_source_is_none() {
        let (_tmp, store) = store_with(&[]);
        assert!(store.load("Nope").unwrap().is_none());
    }

    #[test]
    fn load_non_utf8_source_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
        let store = DirStore::new(tmp.path(), "txt");
        assert!(store.load("Bad").is_err());
    }

    #[test]
    fn extension_leading_dot_is_ignored() {
        let store = DirStore::new("/src", ".txt");
        assert_eq!(store.path_for("A"), PathBuf::from("/src/A.txt"));
    }

    #[test]
    fn identifier_with_typographic_apostrophe() {
        let (_tmp, store) = store_with(&[("Can\u{2019}t-Predict.txt", "T")]);
        assert!(store.load("Can\u{2019}t-Predict").unwrap().is_some());
    }

    #[test]
    fn unlisted_reports_extra_sources_only() {
        let (tmp, store) = store_with(&[
            ("Listed.txt", "a"),
            ("Draft.txt", "b"),
            ("Another.txt", "c"),
            ("notes.md", "ignored"),
        ]);
        fs::create_dir(tmp.path().join("Nested.txt")).unwrap();
        let unlisted = store.unlisted(&["Listed".to_string()]);
        assert_eq!(unlisted, vec!["Another", "Draft"]);
    }

    #[test]
    fn unlisted_on_missing_dir_is_empty() {
        let store = DirStore::new("/definitely/not/here", "txt");
        assert!(store.unlisted(&[]).is_empty());
    }
}
