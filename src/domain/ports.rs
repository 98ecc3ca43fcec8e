use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Authenticated access to the WordPress REST API.
///
/// `endpoint` is the path below the site root, e.g. `/wp-json/wp/v2/posts?slug=hello`.
#[async_trait]
pub trait WordPressApi: Send + Sync {
    async fn request(&self, endpoint: &str, method: Method, body: Option<&Value>) -> Result<Value>;
}
