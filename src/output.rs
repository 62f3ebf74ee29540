//! CLI output formatting.
//!
//! Output is information-first: each article leads with its positional index
//! and title, with the slug, source identifier, and reading time as indented
//! context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Articles
//! 001 What a Period Actually Is
//!     Source: What-a-Period-Actually-Is
//!     Slug: what-a-period-actually-is (4 min)
//! 003 Fatigue Around Your Period
//!     Source: Fatigue-Around-Your-Period
//!     Slug: fatigue-around-your-period (3 min)
//!
//! Skipped
//!     The-Menstrual-Cycle-Explained-Simply
//!
//! Unlisted sources
//!     Draft-Notes
//! ```
//!
//! Positions are 1-based positions in the configured order, so a skipped
//! entry shows up as a gap.
//!
//! ## Build
//!
//! ```text
//! articles/what-a-period-actually-is.html
//! articles/fatigue-around-your-period.html
//! index.html
//!
//! Generated 2 articles and the index
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout.

use crate::generate::BuildReport;
use crate::types::ArticleRecord;
use std::collections::HashSet;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Identifiers from `order` that did not produce a record.
pub fn skipped<'a>(order: &'a [String], records: &[ArticleRecord]) -> Vec<&'a str> {
    let built: HashSet<&str> = records.iter().map(|r| r.identifier.as_str()).collect();
    order
        .iter()
        .map(String::as_str)
        .filter(|id| !built.contains(id))
        .collect()
}

// ============================================================================
// Check
// ============================================================================

/// Format the article inventory produced by assembly.
pub fn format_check_output(
    order: &[String],
    records: &[ArticleRecord],
    unlisted: &[String],
) -> Vec<String> {
    let mut lines = vec!["Articles".to_string()];

    for record in records {
        lines.push(format!(
            "{} {}",
            format_index(record.position + 1),
            record.title
        ));
        lines.push(format!("{}Source: {}", indent(1), record.identifier));
        lines.push(format!(
            "{}Slug: {} ({} min)",
            indent(1),
            record.slug,
            record.reading_time
        ));
    }

    let skipped = skipped(order, records);
    if !skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for id in skipped {
            lines.push(format!("{}{}", indent(1), id));
        }
    }

    if !unlisted.is_empty() {
        lines.push(String::new());
        lines.push("Unlisted sources".to_string());
        for id in unlisted {
            lines.push(format!("{}{}", indent(1), id));
        }
    }

    lines
}

pub fn print_check_output(order: &[String], records: &[ArticleRecord], unlisted: &[String]) {
    for line in format_check_output(order, records, unlisted) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the pages written by a build, then any failures and a summary.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .written
        .iter()
        .map(|path| path.display().to_string())
        .collect();

    if !report.failed.is_empty() {
        lines.push(String::new());
        lines.push("Failed".to_string());
        for (path, err) in &report.failed {
            lines.push(format!("{}{}: {}", indent(1), path.display(), err));
        }
    }

    lines.push(String::new());
    let index_written = report.written.len() > report.articles;
    let summary = if index_written {
        format!("Generated {} and the index", plural(report.articles, "article"))
    } else {
        format!("Generated {}", plural(report.articles, "article"))
    };
    lines.push(summary);
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
