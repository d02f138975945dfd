//! Document operations for the Google Docs API.

use serde_json::json;
use tracing::{debug, info};

use super::{DocumentClient, GoogleDocsClient, read_response};
use crate::error::GoogleDocsError;
use crate::request::{BatchUpdateBody, Request};
use crate::types::{BatchUpdateResponse, Document};

impl GoogleDocsClient {
    /// Get a document by ID.
    pub fn get_document(&self, document_id: &str) -> Result<Document, GoogleDocsError> {
        let url = format!("{}/{}", self.documents_url(), document_id);

        info!("Getting document {}", document_id);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.authorization())
            .header("Accept", "application/json")
            .call()?;

        read_response(response)
    }
}

impl DocumentClient for GoogleDocsClient {
    fn create_document(&self, title: &str) -> Result<Document, GoogleDocsError> {
        let url = self.documents_url();
        let payload = serde_json::to_vec(&json!({ "title": title }))?;

        info!("Creating document \"{}\"", title);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.authorization())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload[..])?;

        let document: Document = read_response(response)?;
        info!("Created document {}", document.document_id);
        Ok(document)
    }

    fn batch_update(
        &self,
        document_id: &str,
        requests: &[Request],
    ) -> Result<BatchUpdateResponse, GoogleDocsError> {
        let url = format!("{}/{}:batchUpdate", self.documents_url(), document_id);
        let payload = serde_json::to_vec(&BatchUpdateBody { requests })?;

        info!(
            "Applying {} request(s) to document {}",
            requests.len(),
            document_id
        );
        debug!("batchUpdate payload: {} bytes", payload.len());

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.authorization())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload[..])?;

        read_response(response)
    }
}
