use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static TITLE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<title>(.*?)</title>").unwrap());
static H1_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<h1[^>]*>(.*?)</h1>").unwrap());
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    pub title: String,
    pub slug: String,
    pub content: String,
}

pub fn extract(html: &str, file_path: &str) -> HtmlPage {
    let slug = page_slug(file_path);
    let title = extract_title(html).unwrap_or_else(|| slug.clone());

    HtmlPage {
        title,
        slug,
        content: html.to_string(),
    }
}

/// `pages/about/index.html` -> `about`, `pages/contact.html` -> `contact`.
pub fn page_slug(file_path: &str) -> String {
    let path = Path::new(file_path);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name
        .strip_suffix(".html")
        .filter(|stem| !stem.is_empty())
        .unwrap_or(file_name.as_str())
        .to_string();

    if stem != "index" {
        return stem;
    }

    path.parent()
        .and_then(Path::file_name)
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or(stem)
}

/// First `<title>`, else first `<h1>`, with inner tags removed.
/// Tag stripping is textual, so malformed markup can leak through.
pub fn extract_title(html: &str) -> Option<String> {
    let inner = TITLE_TAG
        .captures(html)
        .or_else(|| H1_TAG.captures(html))
        .and_then(|caps| caps.get(1))?;
    Some(ANY_TAG.replace_all(inner.as_str(), "").into_owned())
}
