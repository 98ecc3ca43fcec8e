#[cfg(feature = "cli")]
pub mod cli;
pub mod env;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "wp-deploy")]
#[command(about = "Deploy changed articles and pages to WordPress as drafts")]
pub struct CliConfig {
    /// Space-separated list of changed files, as computed by the CI diff
    pub changed_files: Option<String>,

    #[arg(long, default_value = ".", help = "Directory the changed paths are relative to")]
    pub root: String,

    #[arg(long, default_value = "30", help = "Per-request timeout in seconds")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Paths from the changed-files argument, blank entries dropped.
    pub fn changed_paths(&self) -> Vec<String> {
        crate::core::dispatch::split_changed_files(self.changed_files.as_deref().unwrap_or(""))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("root", &self.root)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
