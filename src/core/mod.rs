pub mod client;
pub mod dispatch;
pub mod engine;
pub mod html_page;
pub mod markdown;
pub mod upsert;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{DeployReport, DeployableItem, FileOutcome, UpsertOutcome};
pub use crate::domain::ports::{Storage, WordPressApi};
pub use crate::utils::error::Result;
