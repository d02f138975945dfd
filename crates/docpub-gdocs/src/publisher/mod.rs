//! Markdown publishing to Google Docs.
//!
//! [`Publisher`] runs the whole flow for one article:
//!
//! 1. Parse the markdown into plain text and directives
//! 2. Insert the plain text at the configured index (first batch)
//! 3. Compile the directives against that same index
//! 4. Apply the formatting requests (second batch)
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docpub_gdocs::{Credentials, DEFAULT_API_URL, GoogleDocsClient, PublishConfig, Publisher};
//!
//! let client = GoogleDocsClient::new(DEFAULT_API_URL, &Credentials::access_token("ya29..."))?;
//! let publisher = Publisher::new(&client, PublishConfig::default());
//!
//! let result = publisher.publish("Weekly notes", "## Summary\n\n- **Done**")?;
//! println!("{}", result.url);
//!
//! // Or preview the requests; no API calls are made
//! let dry_run = publisher.dry_run("## Summary")?;
//! # Ok(())
//! # }
//! ```

mod error;
mod executor;
mod result;

pub use error::PublishError;
pub use executor::{Publisher, dry_run};
pub use result::{DryRunResult, PublishResult};

use crate::style::Theme;

/// First body index of a freshly created document.
pub const DEFAULT_INSERT_INDEX: usize = 1;

/// Configuration for publishing markdown into a document.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Document index the plain text is inserted at.
    pub insert_index: usize,
    /// Styling applied by the compiler.
    pub theme: Theme,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            insert_index: DEFAULT_INSERT_INDEX,
            theme: Theme::default(),
        }
    }
}

impl PublishConfig {
    /// Check the configuration before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Config`] if `insert_index` is 0, which
    /// precedes the document body.
    pub fn validate(&self) -> Result<(), PublishError> {
        if self.insert_index == 0 {
            return Err(PublishError::Config(
                "insert_index must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
