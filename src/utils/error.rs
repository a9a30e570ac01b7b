use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Relay request failed: {0}")]
    RelayError(#[from] reqwest::Error),

    #[error("Relay rejected submission with status {status}")]
    RelayRejected { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::RelayError(_) | SiteError::RelayRejected { .. } => ErrorSeverity::Medium,
            SiteError::ValidationError { .. } => ErrorSeverity::Low,
            SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::TomlError(_) => ErrorSeverity::High,
            SiteError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::RelayError(_) | SiteError::RelayRejected { .. } => {
                "Message could not be delivered".to_string()
            }
            SiteError::IoError(e) => format!("File system error: {}", e),
            SiteError::TomlError(_) => "Configuration file is not valid TOML".to_string(),
            SiteError::ConfigError { message } => format!("Configuration problem: {}", message),
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            SiteError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::RelayError(_) => "Check the network connection and try again",
            SiteError::RelayRejected { .. } => "Verify the relay endpoint in [relay].endpoint",
            SiteError::IoError(_) => "Check that the output directory is writable",
            SiteError::TomlError(_) | SiteError::ConfigError { .. } => {
                "Fix the configuration file and run again"
            }
            SiteError::InvalidConfigValueError { .. } => "Correct the highlighted value",
            SiteError::ValidationError { .. } => "Fill in every field with a valid value",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_failures_share_severity() {
        let rejected = SiteError::RelayRejected { status: 500 };
        assert_eq!(rejected.severity(), ErrorSeverity::Medium);
        assert_eq!(
            rejected.user_friendly_message(),
            "Message could not be delivered"
        );
    }

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = SiteError::InvalidConfigValueError {
            field: "relay.endpoint".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert!(err.to_string().contains("relay.endpoint"));
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: SiteError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "dist").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(
            err.recovery_suggestion(),
            "Check that the output directory is writable"
        );
    }

    #[test]
    fn test_relay_failure_suggests_network_not_fields() {
        let err = SiteError::RelayRejected { status: 503 };
        assert_ne!(err.severity(), ErrorSeverity::Low);
        assert_ne!(
            err.recovery_suggestion(),
            SiteError::ValidationError { message: String::new() }.recovery_suggestion()
        );
    }
}
