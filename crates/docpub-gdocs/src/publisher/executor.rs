//! Publisher implementation.

use docpub_markup::{Parsed, parse, text_len};
use tracing::{debug, info};

use crate::client::DocumentClient;
use crate::compile::Compiler;
use crate::request::Request;
use crate::types::edit_url;

use super::PublishConfig;
use super::error::PublishError;
use super::result::{DryRunResult, PublishResult};

/// Publishes markdown articles into Google Docs documents.
pub struct Publisher<'a, C: DocumentClient> {
    client: &'a C,
    config: PublishConfig,
}

impl<'a, C: DocumentClient> Publisher<'a, C> {
    /// Create a new publisher.
    #[must_use]
    pub fn new(client: &'a C, config: PublishConfig) -> Self {
        Self { client, config }
    }

    /// Create a document titled `title` and publish `markdown` into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured insert index is invalid or any
    /// API call fails. A failure after creation leaves the document in place.
    pub fn publish(&self, title: &str, markdown: &str) -> Result<PublishResult, PublishError> {
        self.validate()?;
        let document = self.client.create_document(title)?;
        self.publish_to(&document.document_id, markdown)
    }

    /// Publish `markdown` into an existing document.
    ///
    /// This method:
    /// 1. Parses the markdown
    /// 2. Inserts the plain text at the insert index
    /// 3. Applies the compiled formatting requests
    ///
    /// Nothing is sent when the markdown has no text, and the formatting
    /// batch is skipped when there is nothing to format.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured insert index is invalid or any
    /// API call fails. Formatting is not attempted after a failed insert.
    pub fn publish_to(
        &self,
        document_id: &str,
        markdown: &str,
    ) -> Result<PublishResult, PublishError> {
        self.validate()?;

        let parsed = parse(markdown);
        let characters = parsed.text_len();
        let mut operations = 0;

        if characters == 0 {
            info!("Nothing to publish into document {}", document_id);
        } else {
            let index = self.config.insert_index;
            info!(
                "Inserting {} characters into document {} at index {}",
                characters, document_id, index
            );
            self.client.insert_text(document_id, index, &parsed.text)?;

            let requests = self.format_requests(&parsed);
            operations = requests.len();
            if requests.is_empty() {
                debug!("No formatting to apply");
            } else {
                self.client.batch_update(document_id, &requests)?;
                info!("Applied {} formatting request(s)", operations);
            }
        }

        Ok(PublishResult {
            document_id: document_id.to_owned(),
            url: edit_url(document_id),
            characters_inserted: characters,
            operations_applied: operations,
        })
    }

    /// Build the requests a publish would send, without sending them.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured insert index is invalid.
    pub fn dry_run(&self, markdown: &str) -> Result<DryRunResult, PublishError> {
        dry_run(&self.config, markdown)
    }

    fn validate(&self) -> Result<(), PublishError> {
        self.config.validate()
    }

    fn format_requests(&self, parsed: &Parsed) -> Vec<Request> {
        format_requests(&self.config, parsed)
    }
}

/// Build the requests publishing `markdown` would send. No client needed.
///
/// # Errors
///
/// Returns an error if the configured insert index is invalid.
pub fn dry_run(config: &PublishConfig, markdown: &str) -> Result<DryRunResult, PublishError> {
    config.validate()?;

    let parsed = parse(markdown);
    let (insert, requests) = if parsed.text.is_empty() {
        (None, Vec::new())
    } else {
        (
            Some(Request::insert_text(config.insert_index, parsed.text.as_str())),
            format_requests(config, &parsed),
        )
    };

    Ok(DryRunResult {
        text: parsed.text,
        directives: parsed.directives,
        insert,
        requests,
    })
}

fn format_requests(config: &PublishConfig, parsed: &Parsed) -> Vec<Request> {
    Compiler::new(config.theme).compile(
        &parsed.directives,
        config.insert_index,
        Some(text_len(&parsed.text)),
    )
}
