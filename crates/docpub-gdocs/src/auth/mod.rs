//! Google API credentials.
//!
//! Requests carry an OAuth 2.0 bearer token, taken either as-is from
//! configuration or obtained from a service account key through the
//! JWT bearer grant.

mod jwt;
pub(crate) mod key;
#[cfg(test)]
pub(crate) mod test_keys;
mod token;

use std::fmt;
use std::path::Path;

use ureq::Agent;

pub use key::ServiceAccountKey;

use crate::error::GoogleDocsError;

/// OAuth scope granting read/write access to documents.
pub const DOCUMENTS_SCOPE: &str = "https://www.googleapis.com/auth/documents";

/// How the client authenticates.
#[derive(Clone)]
pub enum Credentials {
    /// Pre-issued OAuth access token.
    AccessToken(String),
    /// Service account key, exchanged for a token when the client is built.
    ServiceAccount(ServiceAccountKey),
}

impl Credentials {
    /// Use a pre-issued access token.
    #[must_use]
    pub fn access_token(token: impl Into<String>) -> Self {
        Self::AccessToken(token.into())
    }

    /// Load a service account JSON key file.
    pub fn service_account_file(path: &Path) -> Result<Self, GoogleDocsError> {
        Ok(Self::ServiceAccount(ServiceAccountKey::from_file(path)?))
    }

    /// Resolve to a bearer token, exchanging the service account key if needed.
    pub(crate) fn bearer_token(&self, agent: &Agent) -> Result<String, GoogleDocsError> {
        match self {
            Self::AccessToken(token) if token.is_empty() => {
                Err(GoogleDocsError::Auth("access token is empty".to_owned()))
            }
            Self::AccessToken(token) => Ok(token.clone()),
            Self::ServiceAccount(key) => token::fetch_access_token(agent, key, DOCUMENTS_SCOPE),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Self::ServiceAccount(key) => f
                .debug_tuple("ServiceAccount")
                .field(&key.client_email)
                .finish(),
        }
    }
}
