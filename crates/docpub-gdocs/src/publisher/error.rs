//! Error types for publish operations.

use crate::error::GoogleDocsError;

/// Error during a publish operation.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Invalid publisher configuration.
    #[error("{0}")]
    Config(String),

    /// Google Docs API error.
    #[error("Google Docs API error: {0}")]
    GoogleDocs(#[from] GoogleDocsError),
}
