use crate::domain::ports::{Storage, WordPressApi};
use crate::utils::error::{DeployError, Result};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
}

/// Answers requests from a queue and records every call it sees.
#[derive(Clone)]
pub struct RecordingApi {
    responses: Arc<Mutex<VecDeque<Result<Value>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingApi {
    pub fn new(responses: Vec<Value>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self::with_results(vec![Err(DeployError::HttpStatusError {
            status,
            body: body.to_string(),
        })])
    }

    pub fn with_results(results: Vec<Result<Value>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(results.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl WordPressApi for RecordingApi {
    async fn request(&self, endpoint: &str, method: Method, body: Option<&Value>) -> Result<Value> {
        self.calls.lock().await.push(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            body: body.cloned(),
        });
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Err(DeployError::UnexpectedResponseError {
                    message: format!("no response queued for {}", endpoint),
                })
            })
    }
}

#[derive(Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let files = files
            .iter()
            .map(|(path, content)| (path.to_string(), content.to_string()))
            .collect();
        Self {
            files: Arc::new(Mutex::new(files)),
        }
    }
}

impl Storage for MemoryStorage {
    async fn read_file(&self, path: &str) -> Result<String> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| {
            DeployError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }
}
