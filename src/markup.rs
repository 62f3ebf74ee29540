//! Plain-text article markup.
//!
//! Articles are plain text with a handful of line-level conventions. Each line
//! is trimmed and classified on its own; there is no nesting and no grammar
//! beyond "does this line start (or end) with a known marker".
//!
//! ```text
//! **Why Cycle Length Changes**       ← title (first line, ** stripped)
//!
//! A cycle is counted from day one.   ← paragraph
//! ### What shifts it                 ← heading
//! Common factors:                    ← heading (any line ending in ':')
//! - stress                           ← list item
//! • travel                           ← list item
//! ---                                ← divider
//! See [the guide](https://x.y) and **this**.   ← paragraph with link + bold
//! ```
//!
//! Classification precedence per line: blank, `###` heading, trailing-colon
//! heading, bullet, then everything else (paragraph or divider). A blank line
//! closes an open list; so does any non-bullet line.
//!
//! Inline markup only applies to paragraphs: `[text](url)` becomes a link that
//! opens in a new tab, then `**text**` becomes `<strong>`. Unmatched markers
//! are left as they are. Conversion never fails.

use regex::Regex;
use std::sync::LazyLock;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"));

const HEADING_MARKER: &str = "###";
const BULLET_MARKERS: [&str; 2] = ["- ", "• "];
const DIVIDER: &str = "---";

/// One HTML block of an article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Paragraph text, inline markup already substituted.
    Paragraph(String),
    /// Level-3 heading.
    Heading(String),
    /// Consecutive bullet lines. Items are kept verbatim.
    List(Vec<String>),
    Divider,
}

impl Fragment {
    fn push_html(&self, out: &mut String) {
        match self {
            Fragment::Paragraph(text) => {
                out.push_str("<p>");
                out.push_str(text);
                out.push_str("</p>\n");
            }
            Fragment::Heading(text) => {
                out.push_str("<h3>");
                out.push_str(text);
                out.push_str("</h3>\n");
            }
            Fragment::List(items) => {
                out.push_str("<ul class=\"article-list\">\n");
                for item in items {
                    out.push_str("  <li>");
                    out.push_str(item);
                    out.push_str("</li>\n");
                }
                out.push_str("</ul>\n");
            }
            Fragment::Divider => out.push_str("<hr class=\"article-divider\">\n"),
        }
    }
}

/// A converted article: optional title plus body fragments in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArticle {
    /// Title from the first line; `None` when that line is blank.
    pub title: Option<String>,
    pub body: Vec<Fragment>,
}

impl ParsedArticle {
    /// Serialize the body as HTML, one block per line.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for fragment in &self.body {
            fragment.push_html(&mut html);
        }
        html
    }
}

/// Convert article text into a title and body fragments.
///
/// The first line is always consumed as the title line, even when blank.
pub fn convert(text: &str) -> ParsedArticle {
    let mut lines = text.lines();
    let title = lines.next().and_then(parse_title);

    let mut body = Vec::new();
    let mut open_list: Option<Vec<String>> = None;

    for raw in lines {
        let line = raw.trim();

        if line.is_empty() {
            close_list(&mut open_list, &mut body);
            continue;
        }

        if let Some(rest) = line.strip_prefix(HEADING_MARKER) {
            close_list(&mut open_list, &mut body);
            body.push(Fragment::Heading(rest.trim_start().to_string()));
        } else if line.ends_with(':') {
            close_list(&mut open_list, &mut body);
            body.push(Fragment::Heading(line.to_string()));
        } else if let Some(item) = strip_bullet(line) {
            open_list.get_or_insert_with(Vec::new).push(item.to_string());
        } else {
            close_list(&mut open_list, &mut body);
            let inline = render_inline(line);
            if inline == DIVIDER {
                body.push(Fragment::Divider);
            } else {
                body.push(Fragment::Paragraph(inline));
            }
        }
    }
    close_list(&mut open_list, &mut body);

    ParsedArticle { title, body }
}

/// Title from the first line: trimmed, one leading and one trailing `**` removed.
/// `None` when nothing is left.
fn parse_title(line: &str) -> Option<String> {
    let line = line.trim();
    let line = line.strip_prefix("**").unwrap_or(line);
    let line = line.strip_suffix("**").unwrap_or(line);
    Some(line.trim().to_string()).filter(|title| !title.is_empty())
}

fn strip_bullet(line: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(*marker))
}

fn close_list(open: &mut Option<Vec<String>>, body: &mut Vec<Fragment>) {
    if let Some(items) = open.take() {
        body.push(Fragment::List(items));
    }
}

/// Apply link, then bold substitution.
fn render_inline(line: &str) -> String {
    let linked = LINK.replace_all(line, r#"<a href="$2" target="_blank">$1</a>"#);
    BOLD.replace_all(&linked, "<strong>$1</strong>").into_owned()
}
