//! Markdown to plain text plus positional formatting directives.
//!
//! This crate handles the narrow Markdown dialect used for published
//! articles: `##`/`###` headings, `-` bullets, `---` rules, hidden
//! `<!-- SECTION: -->` markers, `**bold**` and `[label](url)` links.
//!
//! [`parse`] strips the markup and returns the plain text together with a
//! list of [`Directive`]s whose offsets point into that plain text.
//!
//! # Offsets
//!
//! Offsets are counted in UTF-16 code units, the unit rich-text document
//! APIs index by. Use [`text_len`] to measure strings in the same unit.
//!
//! # Example
//!
//! ```
//! use docpub_markup::{DirectiveKind, parse};
//!
//! let parsed = parse("## Title\n\nSome **bold** text");
//! assert_eq!(parsed.text, "Title\n\nSome bold text");
//! assert_eq!(parsed.directives[0].kind, DirectiveKind::Heading2);
//! assert_eq!(parsed.directive_text(&parsed.directives[1]), "bold");
//! ```

mod directive;
mod inline;
mod line;
mod parser;
mod text;

pub use directive::{Directive, DirectiveKind};
pub use parser::{Parsed, parse};
pub use text::{RULE_PLACEHOLDER, text_len};
