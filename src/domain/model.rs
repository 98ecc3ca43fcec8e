use serde::{Deserialize, Serialize};
use std::fmt;

/// WordPress status every deployed item is written with.
pub const DRAFT_STATUS: &str = "draft";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Page,
}

impl ContentKind {
    /// REST collection under `/wp-json/wp/v2/`.
    pub fn collection(&self) -> &'static str {
        match self {
            ContentKind::Post => "posts",
            ContentKind::Page => "pages",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Post => write!(f, "post"),
            ContentKind::Page => write!(f, "page"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployableItem {
    pub kind: ContentKind,
    pub slug: String,
    pub title: String,
    pub content: String,
}

/// Body of a create call.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePayload<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub slug: &'a str,
    pub status: &'a str,
}

/// Body of an update call. The slug is never rewritten.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePayload<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub status: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEntity {
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub id: u64,
    pub was_created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Created { kind: ContentKind, id: u64 },
    Updated { kind: ContentKind, id: u64 },
    ImageNotUploaded,
    Skipped,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    pub files: Vec<FileReport>,
}

impl DeployReport {
    pub fn record(&mut self, path: &str, outcome: FileOutcome) {
        self.files.push(FileReport {
            path: path.to_string(),
            outcome,
        });
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Created { .. }))
    }

    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Updated { .. }))
    }

    pub fn images(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::ImageNotUploaded))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }
}
