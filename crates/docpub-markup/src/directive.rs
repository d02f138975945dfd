//! Formatting directive types.

use std::fmt;
use std::ops::Range;

/// Formatting intent attached to a directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "kebab-case")
)]
pub enum DirectiveKind {
    /// `## Heading`
    #[cfg_attr(feature = "serde", serde(rename = "heading-level-2"))]
    Heading2,
    /// `### Heading`
    #[cfg_attr(feature = "serde", serde(rename = "heading-level-3"))]
    Heading3,
    /// `**bold**`
    Bold,
    /// `- item`
    BulletItem,
    /// `---`
    HorizontalRule,
    /// `<!-- SECTION:... -->`, kept in the text but rendered invisible.
    HiddenMarker,
    /// `[label](url)`
    Hyperlink {
        /// Link destination.
        target_url: String,
    },
}

impl DirectiveKind {
    /// Stable kebab-case name of the kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heading2 => "heading-level-2",
            Self::Heading3 => "heading-level-3",
            Self::Bold => "bold",
            Self::BulletItem => "bullet-item",
            Self::HorizontalRule => "horizontal-rule",
            Self::HiddenMarker => "hidden-marker",
            Self::Hyperlink { .. } => "hyperlink",
        }
    }

    /// Whether the directive describes a whole line.
    ///
    /// Paragraph and list properties of line-scoped directives apply to a
    /// range that also covers the line terminator one past `end`.
    #[must_use]
    pub fn is_line_scoped(&self) -> bool {
        matches!(
            self,
            Self::Heading2 | Self::Heading3 | Self::BulletItem | Self::HorizontalRule
        )
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A formatting annotation over a half-open range of the plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directive {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
    /// What the range means.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: DirectiveKind,
}

impl Directive {
    /// Create a directive over `start..end`.
    #[must_use]
    pub fn new(start: usize, end: usize, kind: DirectiveKind) -> Self {
        debug_assert!(start <= end, "directive start {start} > end {end}");
        Self { start, end, kind }
    }

    /// Offset range covered by the directive.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length in UTF-16 code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the directive covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Link target, for hyperlink directives.
    #[must_use]
    pub fn target_url(&self) -> Option<&str> {
        match &self.kind {
            DirectiveKind::Hyperlink { target_url } => Some(target_url),
            _ => None,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {})", self.kind, self.start, self.end)?;
        if let Some(url) = self.target_url() {
            write!(f, " -> {url}")?;
        }
        Ok(())
    }
}
