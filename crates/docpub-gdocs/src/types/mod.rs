//! Google Docs API response types.

mod document;

pub use document::{BatchUpdateResponse, Document, WriteControl, edit_url};
