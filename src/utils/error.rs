use crate::domain::model::CANONICAL_STYLES;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Unknown module split style: '{0}'")]
    UnknownSplitStyle(String),

    #[error("Split style '{style}' does not take package names, but some were supplied")]
    UnexpectedPackages { style: String },

    #[error("Split style '{style}' requires at least one package name")]
    MissingPackages { style: String },

    #[error("Malformed package name: '{0}'")]
    MalformedPackageName(String),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration value: {field}")]
    MissingConfigValue { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    System,
}

impl SplitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SplitError::UnknownSplitStyle(_)
            | SplitError::UnexpectedPackages { .. }
            | SplitError::MissingPackages { .. }
            | SplitError::InvalidConfigValue { .. }
            | SplitError::MissingConfigValue { .. } => ErrorCategory::Configuration,
            SplitError::MalformedPackageName(_) => ErrorCategory::Validation,
            SplitError::IoError(_) | SplitError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Configuration errors are deterministic, retrying cannot succeed
            SplitError::UnknownSplitStyle(_)
            | SplitError::UnexpectedPackages { .. }
            | SplitError::MissingPackages { .. }
            | SplitError::MalformedPackageName(_)
            | SplitError::InvalidConfigValue { .. }
            | SplitError::MissingConfigValue { .. } => ErrorSeverity::High,
            SplitError::IoError(_) | SplitError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SplitError::UnknownSplitStyle(name) => {
                format!("'{}' is not a known module split style", name)
            }
            SplitError::UnexpectedPackages { style } => {
                format!("The '{}' split style does not accept package names", style)
            }
            SplitError::MissingPackages { style } => {
                format!("The '{}' split style needs at least one package name", style)
            }
            SplitError::MalformedPackageName(value) => {
                format!("'{}' is not a valid package name", value)
            }
            SplitError::InvalidConfigValue { field, value, .. } => {
                format!(
                    "Configuration field '{}' has an invalid value: '{}'",
                    field, value
                )
            }
            SplitError::MissingConfigValue { field } => {
                format!("Configuration field '{}' is required but missing", field)
            }
            SplitError::IoError(e) => format!("File operation failed: {}", e),
            SplitError::SerializationError(e) => format!("Output serialization failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SplitError::UnknownSplitStyle(_) => {
                format!("Use one of: {}", CANONICAL_STYLES.join(", "))
            }
            SplitError::UnexpectedPackages { .. } => {
                "Remove the package names, or switch to the SmallModulesFor style".to_string()
            }
            SplitError::MissingPackages { .. } => {
                "Supply at least one package name, e.g. --split-package com.example.app"
                    .to_string()
            }
            SplitError::MalformedPackageName(_) => {
                "Package names are dot-separated identifiers, e.g. com.example.app".to_string()
            }
            SplitError::InvalidConfigValue { .. } | SplitError::MissingConfigValue { .. } => {
                "Check the configuration file against the documented schema".to_string()
            }
            SplitError::IoError(_) => "Make sure the file exists and is readable".to_string(),
            SplitError::SerializationError(_) => {
                "Re-run with --verbose and report the output".to_string()
            }
        }
    }
}
