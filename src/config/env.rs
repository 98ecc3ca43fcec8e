use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::env;
use std::fmt;

pub const WP_URL: &str = "WP_URL";
pub const WP_USERNAME: &str = "WP_USERNAME";
pub const WP_PASSWORD: &str = "WP_PASSWORD";

/// Connection settings for the target WordPress site, read once per run.
#[derive(Clone)]
pub struct WpConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl WpConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; missing or blank values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| DeployError::MissingConfigError {
                    field: key.to_string(),
                })
        };

        let config = Self {
            base_url: required(WP_URL)?,
            username: required(WP_USERNAME)?,
            password: required(WP_PASSWORD)?,
        };
        config.validate()?;
        Ok(config)
    }
}

impl fmt::Debug for WpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WpConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Validate for WpConfig {
    fn validate(&self) -> Result<()> {
        validate_url(WP_URL, &self.base_url)?;
        validate_non_empty_string(WP_USERNAME, &self.username)?;
        validate_non_empty_string(WP_PASSWORD, &self.password)?;
        Ok(())
    }
}
