//! Google Docs `batchUpdate` request model.
//!
//! Each [`Request`] serializes to exactly one JSON object of the
//! `requests` array, e.g. `{"updateTextStyle": {...}}`.

use serde::Serialize;

/// One edit operation of a `batchUpdate` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    /// Insert text at an index.
    InsertText(InsertTextRequest),
    /// Change character formatting over a range.
    UpdateTextStyle(UpdateTextStyleRequest),
    /// Change paragraph formatting over a range.
    UpdateParagraphStyle(UpdateParagraphStyleRequest),
    /// Turn the paragraphs in a range into list items.
    CreateParagraphBullets(CreateParagraphBulletsRequest),
}

impl Request {
    /// Insert `text` at `index`.
    #[must_use]
    pub fn insert_text(index: usize, text: impl Into<String>) -> Self {
        Self::InsertText(InsertTextRequest {
            location: Location { index },
            text: text.into(),
        })
    }

    /// Apply `style` to `range`; the field mask covers exactly the set properties.
    #[must_use]
    pub fn text_style(range: Range, style: TextStyle) -> Self {
        let fields = style.fields();
        Self::UpdateTextStyle(UpdateTextStyleRequest {
            range,
            text_style: style,
            fields,
        })
    }

    /// Apply `style` to the paragraphs in `range`.
    #[must_use]
    pub fn paragraph_style(range: Range, style: ParagraphStyle) -> Self {
        let fields = style.fields();
        Self::UpdateParagraphStyle(UpdateParagraphStyleRequest {
            range,
            paragraph_style: style,
            fields,
        })
    }

    /// Convert the paragraphs in `range` to a bulleted list.
    #[must_use]
    pub fn bullets(range: Range, preset: BulletPreset) -> Self {
        Self::CreateParagraphBullets(CreateParagraphBulletsRequest {
            range,
            bullet_preset: preset,
        })
    }

    /// API name of the request, as it appears in JSON.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertText(_) => "insertText",
            Self::UpdateTextStyle(_) => "updateTextStyle",
            Self::UpdateParagraphStyle(_) => "updateParagraphStyle",
            Self::CreateParagraphBullets(_) => "createParagraphBullets",
        }
    }

    /// Range the request applies to. `None` for insertions.
    #[must_use]
    pub fn range(&self) -> Option<Range> {
        match self {
            Self::InsertText(_) => None,
            Self::UpdateTextStyle(r) => Some(r.range),
            Self::UpdateParagraphStyle(r) => Some(r.range),
            Self::CreateParagraphBullets(r) => Some(r.range),
        }
    }
}

/// Half-open document index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// First index (inclusive).
    pub start_index: usize,
    /// Last index (exclusive).
    pub end_index: usize,
}

impl Range {
    #[must_use]
    pub fn new(start_index: usize, end_index: usize) -> Self {
        debug_assert!(
            start_index <= end_index,
            "range start {start_index} > end {end_index}"
        );
        Self {
            start_index,
            end_index,
        }
    }
}

/// Document position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertTextRequest {
    pub location: Location,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyleRequest {
    pub range: Range,
    pub text_style: TextStyle,
    /// Comma-separated field mask.
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphStyleRequest {
    pub range: Range,
    pub paragraph_style: ParagraphStyle,
    /// Comma-separated field mask.
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraphBulletsRequest {
    pub range: Range,
    pub bullet_preset: BulletPreset,
}

/// Character formatting. Unset properties are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<OptionalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl TextStyle {
    /// Field mask naming every set property.
    #[must_use]
    pub fn fields(&self) -> String {
        let mut fields = Vec::new();
        if self.bold.is_some() {
            fields.push("bold");
        }
        if self.font_size.is_some() {
            fields.push("fontSize");
        }
        if self.foreground_color.is_some() {
            fields.push("foregroundColor");
        }
        if self.link.is_some() {
            fields.push("link");
        }
        fields.join(",")
    }
}

/// Paragraph formatting. Unset properties are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<NamedStyleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<ParagraphBorder>,
}

impl ParagraphStyle {
    /// Field mask naming every set property.
    #[must_use]
    pub fn fields(&self) -> String {
        let mut fields = Vec::new();
        if self.named_style_type.is_some() {
            fields.push("namedStyleType");
        }
        if self.border_bottom.is_some() {
            fields.push("borderBottom");
        }
        fields.join(",")
    }
}

/// Built-in paragraph style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NamedStyleType {
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphBorder {
    pub color: OptionalColor,
    pub width: Dimension,
    pub padding: Dimension,
    pub dash_style: DashStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashStyle {
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulletPreset {
    BulletDiscCircleSquare,
}

/// A magnitude in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    pub magnitude: f32,
    pub unit: Unit,
}

impl Dimension {
    #[must_use]
    pub fn pt(magnitude: f32) -> Self {
        Self {
            magnitude,
            unit: Unit::Pt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unit {
    Pt,
}

/// Colour wrapper as the API nests it: `{"color": {"rgbColor": {...}}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionalColor {
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub rgb_color: RgbColor,
}

/// RGB colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RgbColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl RgbColor {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Build from 8-bit channels.
    #[must_use]
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }
}

impl From<RgbColor> for OptionalColor {
    fn from(rgb_color: RgbColor) -> Self {
        Self {
            color: Color { rgb_color },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
}

/// Body of a `documents.batchUpdate` call.
#[derive(Debug, Serialize)]
pub(crate) struct BatchUpdateBody<'a> {
    pub(crate) requests: &'a [Request],
}
