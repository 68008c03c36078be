//! CLI error types.

use std::path::PathBuf;

use bigcal_core::calendar::{StoreError, ValidationErrors};
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid dataset: {0}")]
    Dataset(#[source] StoreError),

    #[error("Event rejected: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigcal_core::calendar::FormField;

    #[test]
    fn test_cli_error_display() {
        let error = CliError::NotFound {
            resource: "event 9".to_string(),
        };
        assert_eq!(error.to_string(), "Resource not found: event 9");

        let error = CliError::Dataset(StoreError::InvalidDateRange { id: 4 });
        assert_eq!(error.to_string(), "Invalid dataset: Event 4 ends before it starts");

        let error = CliError::from(StoreError::IdsExhausted { last: 9 });
        assert_eq!(error.to_string(), "Event rejected: No event IDs left after 9");

        let error = CliError::from(ValidationErrors::single(FormField::Title, "Title is required"));
        assert_eq!(
            error.to_string(),
            "Invalid event form: title: Title is required"
        );
    }
}
