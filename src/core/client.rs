use crate::config::env::WpConfig;
use crate::domain::ports::WordPressApi;
use crate::utils::error::{DeployError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// WordPress REST client authenticating with HTTP Basic (application passwords).
pub struct WpClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl WpClient {
    pub fn new(config: &WpConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, endpoint);
        Url::parse(&raw).map_err(|e| DeployError::InvalidConfigValueError {
            field: "endpoint".to_string(),
            value: raw,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl WordPressApi for WpClient {
    async fn request(&self, endpoint: &str, method: Method, body: Option<&Value>) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("Response status: {} ({} bytes)", status, text.len());

        if !status.is_success() {
            return Err(DeployError::HttpStatusError {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
