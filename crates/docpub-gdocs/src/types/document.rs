//! Document resource types.

use serde::Deserialize;

/// Google Docs document.
///
/// Only the identifying fields are kept; serde ignores the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document ID.
    pub document_id: String,
    /// Document title.
    #[serde(default)]
    pub title: String,
    /// Revision the response reflects.
    #[serde(default)]
    pub revision_id: Option<String>,
}

impl Document {
    /// Browser URL for editing the document.
    #[must_use]
    pub fn edit_url(&self) -> String {
        edit_url(&self.document_id)
    }
}

/// Browser URL for editing the document with `document_id`.
#[must_use]
pub fn edit_url(document_id: &str) -> String {
    format!("https://docs.google.com/document/d/{document_id}/edit")
}

/// `documents.batchUpdate` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    /// Document the batch was applied to.
    pub document_id: String,
    /// One reply per request (empty objects for most request kinds).
    #[serde(default)]
    pub replies: Vec<serde_json::Value>,
    /// Revision after the update.
    #[serde(default)]
    pub write_control: Option<WriteControl>,
}

/// Revision control information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteControl {
    #[serde(default)]
    pub required_revision_id: Option<String>,
}
