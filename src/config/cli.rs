use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Reads changed files from the checked-out repository.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read_to_string(full_path).await?;
        Ok(data)
    }
}
