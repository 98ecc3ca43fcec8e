pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::env::WpConfig;
pub use self::core::{client::WpClient, engine::DeployEngine};
pub use utils::error::{DeployError, Result};
