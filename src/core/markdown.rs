//! Conversion of the small Markdown subset used by articles.
//!
//! Supported: `##`/`###` headings, `**bold**`, `*italic*` and blank-line
//! paragraphs. Anything else passes through as text. Content is not
//! HTML-escaped, so raw HTML in an article reaches WordPress unchanged.

use regex::Regex;
use std::sync::LazyLock;

static TITLE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+").unwrap());
static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^###\s+(.+)$").unwrap());
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^##\s+(.+)$").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(.+)$").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    pub title: String,
    pub html: String,
}

/// Splits off the first line as the title and renders the rest as HTML.
pub fn convert(markdown: &str) -> MarkdownDocument {
    let normalized = markdown.replace("\r\n", "\n");
    let (first_line, rest) = normalized.split_once('\n').unwrap_or((normalized.as_str(), ""));

    let title = TITLE_PREFIX.replace(first_line, "").trim().to_string();
    let html = render_body(rest.trim());

    MarkdownDocument { title, html }
}

/// Each step runs on the previous step's output, so order matters.
pub fn render_body(body: &str) -> String {
    let html = H3.replace_all(body, "<h3>${1}</h3>");
    let html = H2.replace_all(&html, "<h2>${1}</h2>");
    let html = BOLD.replace_all(&html, "<strong>${1}</strong>");
    let html = ITALIC.replace_all(&html, "<em>${1}</em>");
    let html = html.replace("\n\n", "</p><p>");
    LINE.replace_all(&html, "<p>${1}</p>").into_owned()
}

/// Slug for an article: file stem, lowercased, whitespace runs collapsed to `-`.
pub fn slug_from_stem(stem: &str) -> String {
    WHITESPACE.replace_all(&stem.to_lowercase(), "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_heading_line() {
        let doc = convert("# Hello\n\nWorld");
        assert_eq!(doc.title, "Hello");
        assert_eq!(doc.html, "<p>World</p>");
    }

    #[test]
    fn test_title_without_hash_uses_raw_line() {
        let doc = convert("  Plain title  \nBody");
        assert_eq!(doc.title, "Plain title");
        assert_eq!(doc.html, "<p>Body</p>");
    }

    #[test]
    fn test_only_single_hash_prefix_is_stripped() {
        assert_eq!(convert("## Not a title").title, "## Not a title");
        assert_eq!(convert("#NoSpace").title, "#NoSpace");
    }

    #[test]
    fn test_empty_input() {
        let doc = convert("");
        assert_eq!(doc.title, "");
        assert_eq!(doc.html, "");
    }

    #[test]
    fn test_crlf_input() {
        let doc = convert("# Hello\r\n\r\nWorld\r\n");
        assert_eq!(doc.title, "Hello");
        assert_eq!(doc.html, "<p>World</p>");
    }

    #[test]
    fn test_headings() {
        assert_eq!(render_body("## Section"), "<p><h2>Section</h2></p>");
        assert_eq!(render_body("### Details"), "<p><h3>Details</h3></p>");
    }

    #[test]
    fn test_bold_then_italic() {
        assert_eq!(
            render_body("a **bold** and *soft* word"),
            "<p>a <strong>bold</strong> and <em>soft</em> word</p>"
        );
    }

    #[test]
    fn test_bold_is_not_reparsed_as_italic() {
        assert_eq!(render_body("**x**"), "<p><strong>x</strong></p>");
    }

    #[test]
    fn test_paragraph_breaks() {
        assert_eq!(
            render_body("## Intro\n\nFirst line\nsecond line"),
            "<p><h2>Intro</h2></p><p>First line</p>\n<p>second line</p>"
        );
    }

    #[test]
    fn test_html_is_not_escaped() {
        assert_eq!(render_body("<b>raw</b> & co"), "<p><b>raw</b> & co</p>");
    }

    #[test]
    fn test_slug_from_stem() {
        assert_eq!(slug_from_stem("post1"), "post1");
        assert_eq!(slug_from_stem("My First  Post"), "my-first-post");
    }
}
