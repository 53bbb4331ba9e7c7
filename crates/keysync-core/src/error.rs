//! Error types for keysync-core

/// Result type for keysync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in keysync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A sync problem that write mode treats as fatal
    #[error("{message}")]
    Sync { message: String },

    /// Report mode found problems
    #[error("Report failed with {count} items")]
    ReportFailed { count: usize },

    /// No primary file name was configured
    #[error("Primary file is required")]
    MissingPrimary,

    /// Error from keysync-tree
    #[error(transparent)]
    Tree(#[from] keysync_tree::Error),

    /// Error from keysync-fs
    #[error(transparent)]
    Fs(#[from] keysync_fs::Error),
}
