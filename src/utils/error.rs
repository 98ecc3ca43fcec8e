use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("Unexpected response: {message}")]
    UnexpectedResponseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid content: {message}")]
    InvalidItemError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Content,
    FileSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DeployError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeployError::ApiError(_)
            | DeployError::HttpStatusError { .. }
            | DeployError::UnexpectedResponseError { .. } => ErrorCategory::Network,
            DeployError::SerializationError(_) | DeployError::InvalidItemError { .. } => {
                ErrorCategory::Content
            }
            DeployError::IoError(_) => ErrorCategory::FileSystem,
            DeployError::MissingConfigError { .. }
            | DeployError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Content | ErrorCategory::FileSystem => ErrorSeverity::High,
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DeployError::MissingConfigError { field } => {
                format!("WordPress credentials not set: {} is missing", field)
            }
            DeployError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            DeployError::InvalidItemError { message } => format!("Cannot deploy file: {}", message),
            DeployError::HttpStatusError { status, .. } => {
                format!("WordPress responded with HTTP {}", status)
            }
            DeployError::ApiError(e) if e.is_timeout() => {
                "Request to WordPress timed out".to_string()
            }
            DeployError::ApiError(_) => "Could not reach the WordPress site".to_string(),
            DeployError::UnexpectedResponseError { message } => {
                format!("WordPress returned an unexpected response: {}", message)
            }
            DeployError::SerializationError(_) => {
                "WordPress returned a body that is not valid JSON".to_string()
            }
            DeployError::IoError(e) => format!("Could not read file: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DeployError::MissingConfigError { .. } => {
                "Set WP_URL, WP_USERNAME and WP_PASSWORD in the CI secrets"
            }
            DeployError::InvalidConfigValueError { .. } => "Check the deployment configuration values",
            DeployError::HttpStatusError { status: 401, .. }
            | DeployError::HttpStatusError { status: 403, .. } => {
                "Check the username and application password"
            }
            DeployError::HttpStatusError { status: 404, .. } => {
                "Check WP_URL and that the REST API is enabled"
            }
            DeployError::HttpStatusError { .. } => "Inspect the WordPress error body above",
            DeployError::ApiError(_) => "Check network access to WP_URL or raise --timeout-secs",
            DeployError::UnexpectedResponseError { .. } | DeployError::SerializationError(_) => {
                "Check that WP_URL points at a WordPress REST API"
            }
            DeployError::IoError(_) => "Check that the file exists relative to --root",
            DeployError::InvalidItemError { .. } => {
                "Rename the file so it has a name before the extension"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_fatal() {
        let err = DeployError::MissingConfigError {
            field: "WP_URL".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("WP_URL"));
    }

    #[test]
    fn test_http_status_error_keeps_status_and_body() {
        let err = DeployError::HttpStatusError {
            status: 401,
            body: r#"{"code":"rest_not_logged_in"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"HTTP 401: {"code":"rest_not_logged_in"}"#
        );
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(
            err.recovery_suggestion(),
            "Check the username and application password"
        );
    }

    #[test]
    fn test_io_error_is_recoverable() {
        let err = DeployError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.category(), ErrorCategory::FileSystem);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_invalid_item_is_a_content_error() {
        let err = DeployError::InvalidItemError {
            message: "empty slug for pages/.html".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Content);
        assert_eq!(err.to_string(), "Invalid content: empty slug for pages/.html");
    }
}
