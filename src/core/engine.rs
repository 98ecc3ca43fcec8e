use crate::core::dispatch::{route_for, FileRoute};
use crate::core::{html_page, markdown, upsert};
use crate::domain::model::{
    ContentKind, DeployReport, DeployableItem, FileOutcome, UpsertOutcome,
};
use crate::domain::ports::{Storage, WordPressApi};
use crate::utils::error::Result;
use std::path::Path;

pub struct DeployEngine<A: WordPressApi, S: Storage> {
    api: A,
    storage: S,
}

impl<A: WordPressApi, S: Storage> DeployEngine<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        Self { api, storage }
    }

    /// Handles each path in order. A failing file is logged and recorded,
    /// never propagated, so the rest of the batch still runs.
    pub async fn dispatch(&self, changed_paths: &[String]) -> DeployReport {
        let mut report = DeployReport::default();

        for path in changed_paths.iter().map(|p| p.trim()) {
            if path.is_empty() {
                continue;
            }

            let outcome = match self.handle(path).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(
                        "❌ Error processing {}: {} (Category: {:?}, Severity: {:?})",
                        path,
                        e,
                        e.category(),
                        e.severity()
                    );
                    tracing::debug!("💡 {}", e.recovery_suggestion());
                    FileOutcome::Failed {
                        message: e.to_string(),
                    }
                }
            };
            report.record(path, outcome);
        }

        report
    }

    async fn handle(&self, path: &str) -> Result<FileOutcome> {
        match route_for(path) {
            FileRoute::MarkdownPost => self.deploy_markdown_post(path).await,
            FileRoute::HtmlPage => self.deploy_html_page(path).await,
            FileRoute::Image => Ok(self.deploy_image(path)),
            FileRoute::Skip => {
                tracing::info!("⏭️  Skipping: {}", path);
                Ok(FileOutcome::Skipped)
            }
        }
    }

    async fn deploy_markdown_post(&self, path: &str) -> Result<FileOutcome> {
        tracing::info!("📝 Processing Markdown: {}", path);

        let text = self.storage.read_file(path).await?;
        let doc = markdown::convert(&text);
        let stem = file_stem(path, ".md");

        let item = DeployableItem {
            kind: ContentKind::Post,
            slug: markdown::slug_from_stem(&stem),
            title: doc.title,
            content: doc.html,
        };
        let outcome = upsert::upsert(&self.api, &item).await?;
        Ok(to_file_outcome(item.kind, outcome))
    }

    async fn deploy_html_page(&self, path: &str) -> Result<FileOutcome> {
        tracing::info!("📄 Processing HTML: {}", path);

        let text = self.storage.read_file(path).await?;
        let page = html_page::extract(&text, path);

        let item = DeployableItem {
            kind: ContentKind::Page,
            slug: page.slug,
            title: page.title,
            content: page.content,
        };
        let outcome = upsert::upsert(&self.api, &item).await?;
        Ok(to_file_outcome(item.kind, outcome))
    }

    // Media upload is not supported; images are acknowledged and left alone.
    fn deploy_image(&self, path: &str) -> FileOutcome {
        tracing::info!("🖼️  Processing Image: {}", path);
        tracing::warn!("⚠️  Image upload not implemented yet: {}", path);
        FileOutcome::ImageNotUploaded
    }
}

fn to_file_outcome(kind: ContentKind, outcome: UpsertOutcome) -> FileOutcome {
    if outcome.was_created {
        FileOutcome::Created {
            kind,
            id: outcome.id,
        }
    } else {
        FileOutcome::Updated {
            kind,
            id: outcome.id,
        }
    }
}

fn file_stem(path: &str, extension: &str) -> String {
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    file_name
        .strip_suffix(extension)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(file_name.as_str())
        .to_string()
}
