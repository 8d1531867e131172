use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a search.
///
/// Problems while walking the directory tree are not represented here: an
/// unreadable path is skipped and the walk carries on.
#[derive(Debug, Error)]
pub enum FindError {
    #[error("Invalid name pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid size '{value}': expected a non-negative integer with optional K/M/G suffix")]
    InvalidSize { value: String },

    #[error("Failed to open archive {}", path.display())]
    ArchiveOpen {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write match: {0}")]
    Output(#[from] std::io::Error),
}

impl FindError {
    /// True for errors raised while validating filters, before any scanning.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            FindError::InvalidPattern { .. } | FindError::InvalidSize { .. }
        )
    }
}

pub type FindResult<T> = Result<T, FindError>;
