//! Google Docs REST API client.
//!
//! Provides the [`DocumentClient`] seam the publisher works against and a
//! sync HTTP implementation, [`GoogleDocsClient`], authenticated with an
//! OAuth 2.0 bearer token.

mod documents;

use std::time::Duration;

use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::auth::Credentials;
use crate::error::GoogleDocsError;
use crate::request::Request;
use crate::types::{BatchUpdateResponse, Document};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Default Google Docs API root.
pub const DEFAULT_API_URL: &str = "https://docs.googleapis.com";

/// Operations the publisher needs from a document service.
///
/// Failures are returned verbatim; implementations do not retry.
pub trait DocumentClient {
    /// Create an empty document.
    fn create_document(&self, title: &str) -> Result<Document, GoogleDocsError>;

    /// Apply `requests` to a document as a single batch.
    fn batch_update(
        &self,
        document_id: &str,
        requests: &[Request],
    ) -> Result<BatchUpdateResponse, GoogleDocsError>;

    /// Insert `text` at `index` as a batch of one.
    fn insert_text(
        &self,
        document_id: &str,
        index: usize,
        text: &str,
    ) -> Result<BatchUpdateResponse, GoogleDocsError> {
        self.batch_update(document_id, &[Request::insert_text(index, text)])
    }
}

/// Google Docs REST API client.
pub struct GoogleDocsClient {
    agent: Agent,
    api_url: String,
    bearer_token: String,
}

impl GoogleDocsClient {
    /// Create a client, resolving `credentials` to a bearer token.
    ///
    /// # Arguments
    /// * `api_url` - API root, normally [`DEFAULT_API_URL`]
    /// * `credentials` - access token or service account key
    ///
    /// # Errors
    ///
    /// Returns [`GoogleDocsError::Auth`] if the service account token
    /// exchange fails or the access token is empty.
    pub fn new(api_url: &str, credentials: &Credentials) -> Result<Self, GoogleDocsError> {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        let bearer_token = credentials.bearer_token(&agent)?;

        Ok(Self {
            agent,
            api_url: api_url.trim_end_matches('/').to_owned(),
            bearer_token,
        })
    }

    /// Documents collection URL.
    fn documents_url(&self) -> String {
        format!("{}/v1/documents", self.api_url)
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}

/// Read a JSON body, turning error statuses into [`GoogleDocsError::HttpResponse`].
fn read_response<T: DeserializeOwned>(
    response: ureq::http::Response<ureq::Body>,
) -> Result<T, GoogleDocsError> {
    let status = response.status().as_u16();
    let mut body_reader = response.into_body();

    if status >= 400 {
        let error_body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(GoogleDocsError::HttpResponse {
            status,
            body: error_body,
        });
    }

    Ok(body_reader.read_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let client = GoogleDocsClient::new(
            "https://docs.example.com/",
            &Credentials::access_token("t"),
        )
        .unwrap();
        assert_eq!(client.documents_url(), "https://docs.example.com/v1/documents");
        assert_eq!(client.authorization(), "Bearer t");
    }

    #[test]
    fn test_new_rejects_empty_token() {
        let result = GoogleDocsClient::new(DEFAULT_API_URL, &Credentials::access_token(""));
        assert!(matches!(result, Err(GoogleDocsError::Auth(_))));
    }
}
