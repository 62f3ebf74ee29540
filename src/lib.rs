//! # plainpress
//!
//! A minimal static site builder for plain-text articles. Each article is a
//! `.txt` file with a handful of line conventions (headings, bullets, bold,
//! links, dividers); the build turns a configured, ordered list of them into
//! one HTML page per article plus an index page.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Assemble  order + txt/  →  Vec<ArticleRecord>   (convert + metadata)
//! 2. Generate  records       →  dist/                (article pages + index)
//! ```
//!
//! Assembly is pure apart from reading sources through a
//! [`SourceStore`](source::SourceStore), so the conversion and navigation
//! logic is tested without touching the filesystem. Generation renders every
//! page in memory before writing any of them.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`markup`] | Line-oriented text → title + HTML fragments |
//! | [`naming`] | Identifier conventions: slugs, fallback titles, filenames |
//! | [`metadata`] | Reading time and excerpt derivation |
//! | [`source`] | Source store trait and the directory-backed store |
//! | [`assemble`] | Stage 1: ordered loading, conversion, previous/next adjacency |
//! | [`generate`] | Stage 2: page templates (Maud) and writing |
//! | [`config`] | `config.toml` loading, merging with stock defaults, validation |
//! | [`types`] | Records shared between stages |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Order Is Configuration
//!
//! The publication order is a list in `config.toml`, passed to
//! [`assemble::assemble`] as plain data. It decides which articles are built
//! and how previous/next links chain. Files in the source directory that the
//! order does not name are reported by `plainpress check` but never built.
//!
//! ## Missing Sources Are Skipped, Not Fatal
//!
//! A listed article whose source is missing is logged and left out. Links are
//! computed over the articles that were actually built, so navigation skips
//! over the gap rather than pointing at a page that does not exist.
//!
//! ## The Colon Rule
//!
//! Any body line ending in `:` becomes a heading, the same as a `###` line.
//! Authors use it for lead-in labels ("Common causes:"). A prose sentence
//! that happens to end in a colon is promoted too; the rule is kept literal
//! so existing articles render unchanged.
//!
//! ## No Escaping for Article Content
//!
//! Converted bodies, titles, and excerpts go into the templates unescaped so
//! the markup the converter produces survives. Sources are trusted input; see
//! [`generate`] for exactly what is and is not escaped.

pub mod assemble;
pub mod config;
pub mod generate;
pub mod markup;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod source;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
