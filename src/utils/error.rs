use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlagKitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid country code: '{value}'")]
    InvalidCountryCode { value: String },

    #[error("Flag asset not found: {name}")]
    AssetNotFound { name: String },

    #[error("Unknown {kind} code: '{code}'")]
    NotFound { kind: String, code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Lookup miss; the input was well-formed but unknown.
    Low,
    /// Bad input or configuration the user can fix.
    High,
    /// Environment failure (filesystem, serialization).
    Critical,
}

impl FlagKitError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FlagKitError::NotFound { .. } | FlagKitError::AssetNotFound { .. } => {
                ErrorSeverity::Low
            }
            FlagKitError::ConfigValidationError { .. }
            | FlagKitError::InvalidConfigValueError { .. }
            | FlagKitError::InvalidCountryCode { .. } => ErrorSeverity::High,
            FlagKitError::IoError(_)
            | FlagKitError::SerializationError(_)
            | FlagKitError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FlagKitError::IoError(_) => {
                "Check that the asset directory exists and is readable".to_string()
            }
            FlagKitError::SerializationError(_) | FlagKitError::CsvError(_) => {
                "Check that the output destination accepts writes and retry".to_string()
            }
            FlagKitError::ConfigValidationError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            FlagKitError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or on the command line", field)
            }
            FlagKitError::InvalidCountryCode { .. } => {
                "Use a two-letter ISO 3166-1 alpha-2 code such as US or CZ".to_string()
            }
            FlagKitError::AssetNotFound { .. } => {
                "Check that [assets].path points at the flag image directory".to_string()
            }
            FlagKitError::NotFound { kind, .. } => {
                format!("Run `flagkit list {}` to see the known codes", kind)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FlagKitError::IoError(e) => format!("Could not read file: {}", e),
            FlagKitError::NotFound { kind, code } => {
                format!("No country is known for {} code '{}'", kind, code)
            }
            FlagKitError::AssetNotFound { name } => {
                format!("No flag image named '{}' in the asset directory", name)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlagKitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_maps_to_exit_code() {
        let miss = FlagKitError::NotFound {
            kind: "phone".to_string(),
            code: "999".to_string(),
        };
        assert_eq!(miss.severity(), ErrorSeverity::Low);
        assert_eq!(miss.exit_code(), 2);

        let bad = FlagKitError::InvalidCountryCode {
            value: "U1".to_string(),
        };
        assert_eq!(bad.exit_code(), 1);

        let io = FlagKitError::from(std::io::Error::other("disk"));
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message_for_miss() {
        let miss = FlagKitError::NotFound {
            kind: "currency".to_string(),
            code: "XYZ".to_string(),
        };
        assert_eq!(
            miss.user_friendly_message(),
            "No country is known for currency code 'XYZ'"
        );
        assert!(miss.recovery_suggestion().contains("flagkit list currency"));
    }

    #[test]
    fn test_output_error_suggestion_names_no_flag() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FlagKitError::from(json_err);
        assert_eq!(err.exit_code(), 3);
        assert!(!err.recovery_suggestion().contains("--"));
    }
}
