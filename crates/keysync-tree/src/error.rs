//! Error types for keysync-tree

use crate::Kind;

/// Result type for keysync-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning text into a synchronizable document.
///
/// The synchronizer itself never fails; these only cover the document
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {name}: {message}")]
    Parse { name: String, message: String },

    #[error("{name} is a JSON type that cannot be synced: {kind}. Only Objects are supported")]
    UnsyncableRoot { name: String, kind: Kind },

    #[error("Invalid mode: {mode} (expected write or report)")]
    InvalidMode { mode: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            name: name.into(),
            message: message.into(),
        }
    }
}
