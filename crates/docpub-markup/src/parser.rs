//! Line-oriented parse pass.

use crate::directive::{Directive, DirectiveKind};
use crate::inline::strip_inline;
use crate::line::{LineKind, classify};
use crate::text::{RULE_PLACEHOLDER, slice_units, text_len};

/// Result of parsing markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parsed {
    /// Markup-free text, lines joined by `\n`.
    pub text: String,
    /// Directives in the order their markup was encountered.
    pub directives: Vec<Directive>,
}

impl Parsed {
    /// Length of the plain text in UTF-16 code units.
    #[must_use]
    pub fn text_len(&self) -> usize {
        text_len(&self.text)
    }

    /// The slice of plain text a directive covers.
    #[must_use]
    pub fn directive_text(&self, directive: &Directive) -> &str {
        slice_units(&self.text, directive.start, directive.end)
    }

    /// Directives of one kind, by name (e.g. `"bold"`).
    pub fn directives_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Directive> {
        self.directives.iter().filter(move |d| d.kind.name() == name)
    }
}

/// Parse markup into plain text and formatting directives.
///
/// Never fails: markup that does not match a known construct is kept as
/// literal text.
#[must_use]
pub fn parse(markup: &str) -> Parsed {
    let mut lines = Vec::new();
    let mut directives = Vec::new();
    // Offset of the current line's first code unit in the joined output.
    let mut offset = 0;

    for raw in markup.split('\n') {
        let line = raw.trim_end();

        let clean = match classify(line) {
            LineKind::Rule => {
                let clean = RULE_PLACEHOLDER.to_owned();
                push_line_directive(&mut directives, offset, &clean, DirectiveKind::HorizontalRule);
                clean
            }
            LineKind::HiddenMarker(marker) => {
                let clean = marker.to_owned();
                push_line_directive(&mut directives, offset, &clean, DirectiveKind::HiddenMarker);
                clean
            }
            LineKind::Heading2(content) => {
                let clean = content.to_owned();
                push_line_directive(&mut directives, offset, &clean, DirectiveKind::Heading2);
                clean
            }
            LineKind::Heading3(content) => {
                let clean = content.to_owned();
                push_line_directive(&mut directives, offset, &clean, DirectiveKind::Heading3);
                clean
            }
            LineKind::Bullet(content) => {
                let clean = strip_inline(content, offset, &mut directives);
                push_line_directive(&mut directives, offset, &clean, DirectiveKind::BulletItem);
                clean
            }
            LineKind::Text(content) => strip_inline(content, offset, &mut directives),
        };

        // +1 for the newline joining this line to the next
        offset += text_len(&clean) + 1;
        lines.push(clean);
    }

    let parsed = Parsed {
        text: lines.join("\n"),
        directives,
    };
    debug_assert_offsets(&parsed);
    parsed
}

fn push_line_directive(
    directives: &mut Vec<Directive>,
    offset: usize,
    clean: &str,
    kind: DirectiveKind,
) {
    directives.push(Directive::new(offset, offset + text_len(clean), kind));
}

fn debug_assert_offsets(parsed: &Parsed) {
    if cfg!(debug_assertions) {
        let len = parsed.text_len();
        for directive in &parsed.directives {
            assert!(
                directive.start <= directive.end && directive.end <= len,
                "directive {directive} out of bounds for text of length {len}"
            );
        }
    }
}
