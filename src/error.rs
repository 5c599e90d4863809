//! Error types for passbook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for passbook
#[derive(Debug, Error)]
pub enum PassbookError {
    #[error("No entry found for '{0}'")]
    NotFound(String),

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Import failed: {reason}")]
    Import {
        reason: String,
        #[source]
        source: Option<Box<PassbookError>>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PassbookError {
    /// Import failure with no underlying error
    pub fn import(reason: impl Into<String>) -> Self {
        PassbookError::Import {
            reason: reason.into(),
            source: None,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PassbookError::Config(_) | PassbookError::InvalidInput(_) => 2,
            PassbookError::Import { .. } => 3,
            PassbookError::NotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PassbookError::NotFound(name) => {
                format!(
                    "No entry found for '{}'\n\n\
                    Suggestions:\n\
                    • Names are case-insensitive, check the spelling\n\
                    • Use 'passbook names' to see stored services\n\
                    • Use 'passbook search <term>' to match part of a name or username",
                    name
                )
            }
            PassbookError::Import { reason, .. } => {
                format!(
                    "Import failed: {}\n\n\
                    Suggestions:\n\
                    • Check that the file exists and is readable\n\
                    • The file must be a JSON export of passbook data, not a text export\n\
                    • Nothing was changed in the current store",
                    reason
                )
            }
            PassbookError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: data_file, export_file\n\
                        Example: passbook config data_file ~/vault.json",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PassbookError
pub type Result<T> = std::result::Result<T, PassbookError>;
