//! Visual constants applied by the compiler.

use crate::request::RgbColor;

/// Colours and sizes used when compiling directives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Font size (pt) every inserted character is reset to.
    pub base_font_size: f32,
    /// Foreground colour of level-2 headings.
    pub accent_color: RgbColor,
    /// Font size (pt) of hidden markers and rule placeholders.
    pub hidden_font_size: f32,
    /// Bottom border colour of horizontal rules.
    pub rule_color: RgbColor,
    /// Bottom border width (pt) of horizontal rules.
    pub rule_width: f32,
    /// Space (pt) between a rule's placeholder and its border.
    pub rule_padding: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base_font_size: 11.0,
            // #1a73e8
            accent_color: RgbColor::new(0.102, 0.451, 0.910),
            hidden_font_size: 1.0,
            rule_color: RgbColor::new(0.8, 0.8, 0.8),
            rule_width: 1.0,
            rule_padding: 6.0,
        }
    }
}

impl Theme {
    /// Override the base font size.
    #[must_use]
    pub fn base_font_size(mut self, size: f32) -> Self {
        self.base_font_size = size;
        self
    }

    /// Override the heading accent colour.
    #[must_use]
    pub fn accent_color(mut self, color: RgbColor) -> Self {
        self.accent_color = color;
        self
    }
}
