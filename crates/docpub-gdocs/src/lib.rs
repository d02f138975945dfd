//! Google Docs publishing for docpub.
//!
//! This crate turns parsed markdown into Google Docs edits:
//! - [`compile`]: directives to ordered `batchUpdate` requests
//! - [`GoogleDocsClient`]: REST API client behind the [`DocumentClient`] trait
//! - [`Publisher`](publisher::Publisher): insert-then-format publish workflow
//!
//! # Compiling directives
//!
//! ```
//! use docpub_gdocs::compile;
//! use docpub_markup::parse;
//!
//! let parsed = parse("### Agenda\n- **Intro**");
//! let requests = compile(&parsed.directives, 1, Some(parsed.text_len()));
//! assert_eq!(requests[0].name(), "updateTextStyle");
//! ```

// Credentials and service account token exchange
pub mod auth;
pub use auth::Credentials;

// API client
mod client;
pub use client::{DEFAULT_API_URL, DocumentClient, GoogleDocsClient};

// Directive compilation
mod compile;
pub use compile::{Compiler, compile};

pub mod request;
pub use request::Request;

mod style;
pub use style::Theme;

// Types (exposed via client results)
pub mod types;

// Publisher
pub mod publisher;
pub use publisher::{PublishConfig, Publisher};

// Errors
pub mod error;
pub use error::GoogleDocsError;
