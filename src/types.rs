//! Shared types passed from the assembler to the renderer and CLI output.

use crate::naming;
use serde::Serialize;

/// One converted article with its derived metadata.
///
/// Built once per run by [`assemble`](crate::assemble::assemble) and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleRecord {
    /// Identifier from the configured order (the source file stem).
    pub identifier: String,
    /// Title line, or the identifier with dashes turned into spaces.
    pub title: String,
    /// URL-safe output name.
    pub slug: String,
    /// Converted body HTML.
    pub html: String,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    /// Plain-text preview of the body.
    pub excerpt: String,
    /// Zero-based index in the configured order. Skipped entries still
    /// occupy their position, so positions can have gaps.
    pub position: usize,
}

impl ArticleRecord {
    /// Output filename, e.g. `fatigue-around-your-period.html`.
    pub fn filename(&self) -> String {
        naming::page_filename(&self.slug)
    }
}

/// Previous and next articles around one page.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neighbors<'a> {
    pub prev: Option<&'a ArticleRecord>,
    pub next: Option<&'a ArticleRecord>,
}
