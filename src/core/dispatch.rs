/// Which handler a changed path goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRoute {
    MarkdownPost,
    HtmlPage,
    Image,
    Skip,
}

pub fn route_for(path: &str) -> FileRoute {
    if path.starts_with("articles/") && path.ends_with(".md") {
        FileRoute::MarkdownPost
    } else if path.starts_with("pages/") && path.ends_with(".html") {
        FileRoute::HtmlPage
    } else if path.starts_with("images/") {
        FileRoute::Image
    } else {
        FileRoute::Skip
    }
}

/// Splits the CI-provided list; blank entries are dropped.
pub fn split_changed_files(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
