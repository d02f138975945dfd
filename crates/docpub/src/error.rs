//! CLI error types.

use docpub_config::ConfigError;
use docpub_gdocs::GoogleDocsError;
use docpub_gdocs::publisher::PublishError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    GoogleDocs(#[from] GoogleDocsError),

    #[error("{0}")]
    Publish(#[from] PublishError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
