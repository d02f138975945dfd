//! Result types for publish operations.

use docpub_markup::Directive;

use crate::request::Request;

/// Result of a successful publish.
#[derive(Debug, Clone)]
pub struct PublishResult {
    /// Target document ID.
    pub document_id: String,
    /// Browser URL of the document.
    pub url: String,
    /// Plain text length inserted, in UTF-16 code units.
    pub characters_inserted: usize,
    /// Number of formatting requests applied.
    pub operations_applied: usize,
}

/// Result of a dry run: what would be sent, nothing sent.
#[derive(Debug, Clone)]
pub struct DryRunResult {
    /// Plain text that would be inserted.
    pub text: String,
    /// Directives found in the markdown.
    pub directives: Vec<Directive>,
    /// Insert request, absent when the text is empty.
    pub insert: Option<Request>,
    /// Formatting requests, in application order.
    pub requests: Vec<Request>,
}
