//! Directive to `batchUpdate` request compilation.
//!
//! Requests are collected into three buckets and emitted as
//! `[reset] ++ paragraph ++ text ++ bullets`, each bucket in directive order.
//! Paragraph styles go first and bullet conversion last: converting a
//! paragraph to a list item before restyling it can drop the paragraph style.

use docpub_markup::{Directive, DirectiveKind};

use crate::request::{
    BulletPreset, DashStyle, Dimension, Link, NamedStyleType, ParagraphBorder, ParagraphStyle,
    Range, Request, RgbColor, TextStyle,
};
use crate::style::Theme;

/// Compile directives with the default [`Theme`].
///
/// `insertion_offset` is the document index where the plain text was
/// inserted. When `text_len` is given, the first request resets the whole
/// inserted span to the base font size, black, non-bold.
#[must_use]
pub fn compile(directives: &[Directive], insertion_offset: usize, text_len: Option<usize>) -> Vec<Request> {
    Compiler::new(Theme::default()).compile(directives, insertion_offset, text_len)
}

/// Turns parser directives into ordered document edit requests.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    theme: Theme,
}

#[derive(Default)]
struct Buckets {
    paragraph: Vec<Request>,
    text: Vec<Request>,
    bullets: Vec<Request>,
}

impl Compiler {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Theme used for styling.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Compile directives into requests. See [`compile`].
    #[must_use]
    pub fn compile(
        &self,
        directives: &[Directive],
        insertion_offset: usize,
        text_len: Option<usize>,
    ) -> Vec<Request> {
        let mut buckets = Buckets::default();

        for directive in directives {
            if let Some(len) = text_len {
                debug_assert!(
                    directive.end <= len,
                    "directive {directive} exceeds text length {len}"
                );
            }
            self.push_directive(&mut buckets, directive, insertion_offset);
        }

        let reset = text_len.map(|len| self.reset(insertion_offset, len));
        reset
            .into_iter()
            .chain(buckets.paragraph)
            .chain(buckets.text)
            .chain(buckets.bullets)
            .collect()
    }

    fn reset(&self, insertion_offset: usize, text_len: usize) -> Request {
        Request::text_style(
            Range::new(insertion_offset, insertion_offset + text_len),
            TextStyle {
                bold: Some(false),
                font_size: Some(Dimension::pt(self.theme.base_font_size)),
                foreground_color: Some(RgbColor::BLACK.into()),
                ..TextStyle::default()
            },
        )
    }

    fn push_directive(&self, buckets: &mut Buckets, directive: &Directive, insertion_offset: usize) {
        let start = directive.start + insertion_offset;
        let end = directive.end + insertion_offset;
        let span = Range::new(start, end);
        // Paragraph and list properties need the paragraph terminator in range.
        let line = Range::new(start, end + 1);

        match &directive.kind {
            DirectiveKind::Heading2 => {
                buckets
                    .paragraph
                    .push(named_style(line, NamedStyleType::Heading2));
                buckets.text.push(Request::text_style(
                    span,
                    TextStyle {
                        bold: Some(true),
                        foreground_color: Some(self.theme.accent_color.into()),
                        ..TextStyle::default()
                    },
                ));
            }
            DirectiveKind::Heading3 => {
                buckets
                    .paragraph
                    .push(named_style(line, NamedStyleType::Heading3));
                buckets.text.push(bold(span));
            }
            DirectiveKind::Bold => buckets.text.push(bold(span)),
            DirectiveKind::Hyperlink { target_url } => {
                buckets.text.push(Request::text_style(
                    span,
                    TextStyle {
                        link: Some(Link {
                            url: target_url.clone(),
                        }),
                        ..TextStyle::default()
                    },
                ));
            }
            DirectiveKind::BulletItem => {
                buckets
                    .bullets
                    .push(Request::bullets(line, BulletPreset::BulletDiscCircleSquare));
            }
            DirectiveKind::HorizontalRule => {
                buckets.paragraph.push(Request::paragraph_style(
                    line,
                    ParagraphStyle {
                        border_bottom: Some(ParagraphBorder {
                            color: self.theme.rule_color.into(),
                            width: Dimension::pt(self.theme.rule_width),
                            padding: Dimension::pt(self.theme.rule_padding),
                            dash_style: DashStyle::Solid,
                        }),
                        ..ParagraphStyle::default()
                    },
                ));
                buckets.text.push(self.invisible(span));
            }
            DirectiveKind::HiddenMarker => buckets.text.push(self.invisible(span)),
        }
    }

    /// Tiny white text: present and searchable, but not visible.
    fn invisible(&self, range: Range) -> Request {
        Request::text_style(
            range,
            TextStyle {
                font_size: Some(Dimension::pt(self.theme.hidden_font_size)),
                foreground_color: Some(RgbColor::WHITE.into()),
                ..TextStyle::default()
            },
        )
    }
}

fn named_style(range: Range, style: NamedStyleType) -> Request {
    Request::paragraph_style(
        range,
        ParagraphStyle {
            named_style_type: Some(style),
            ..ParagraphStyle::default()
        },
    )
}

fn bold(range: Range) -> Request {
    Request::text_style(
        range,
        TextStyle {
            bold: Some(true),
            ..TextStyle::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use docpub_markup::parse;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn names(requests: &[Request]) -> Vec<&'static str> {
        requests.iter().map(Request::name).collect()
    }

    fn ranges(requests: &[Request]) -> Vec<(usize, usize)> {
        requests
            .iter()
            .filter_map(Request::range)
            .map(|r| (r.start_index, r.end_index))
            .collect()
    }

    #[test]
    fn test_empty_directives_without_length() {
        assert!(compile(&[], 1, None).is_empty());
    }

    #[test]
    fn test_reset_comes_first() {
        let requests = compile(&[Directive::new(0, 3, DirectiveKind::Bold)], 1, Some(10));
        assert_eq!(ranges(&requests), vec![(1, 11), (1, 4)]);
        assert_eq!(
            serde_json::to_value(&requests[0]).unwrap(),
            json!({
                "updateTextStyle": {
                    "range": {"startIndex": 1, "endIndex": 11},
                    "textStyle": {
                        "bold": false,
                        "fontSize": {"magnitude": 11.0, "unit": "PT"},
                        "foregroundColor": {"color": {"rgbColor": {"red": 0.0, "green": 0.0, "blue": 0.0}}}
                    },
                    "fields": "bold,fontSize,foregroundColor"
                }
            })
        );
    }

    #[test]
    fn test_no_reset_without_length() {
        let requests = compile(&[Directive::new(0, 3, DirectiveKind::Bold)], 5, None);
        assert_eq!(ranges(&requests), vec![(5, 8)]);
    }

    #[test]
    fn test_bucket_order_ignores_directive_order() {
        let directives = vec![
            Directive::new(0, 4, DirectiveKind::BulletItem),
            Directive::new(5, 10, DirectiveKind::Heading2),
        ];
        let requests = compile(&directives, 1, Some(10));
        assert_eq!(
            names(&requests),
            vec![
                "updateTextStyle",
                "updateParagraphStyle",
                "updateTextStyle",
                "createParagraphBullets",
            ]
        );
        assert_eq!(ranges(&requests), vec![(1, 11), (6, 12), (6, 11), (1, 6)]);
    }

    #[test]
    fn test_heading2_mapping() {
        let requests = compile(&[Directive::new(0, 5, DirectiveKind::Heading2)], 1, None);
        let values: Vec<_> = requests
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect();
        assert_eq!(
            values[0],
            json!({
                "updateParagraphStyle": {
                    "range": {"startIndex": 1, "endIndex": 7},
                    "paragraphStyle": {"namedStyleType": "HEADING_2"},
                    "fields": "namedStyleType"
                }
            })
        );
        let text = &values[1]["updateTextStyle"];
        assert_eq!(text["range"], json!({"startIndex": 1, "endIndex": 6}));
        assert_eq!(text["textStyle"]["bold"], json!(true));
        assert_eq!(text["fields"], json!("bold,foregroundColor"));
    }

    #[test]
    fn test_heading3_mapping() {
        let requests = compile(&[Directive::new(2, 4, DirectiveKind::Heading3)], 0, None);
        assert_eq!(
            serde_json::to_value(&requests).unwrap(),
            json!([
                {
                    "updateParagraphStyle": {
                        "range": {"startIndex": 2, "endIndex": 5},
                        "paragraphStyle": {"namedStyleType": "HEADING_3"},
                        "fields": "namedStyleType"
                    }
                },
                {
                    "updateTextStyle": {
                        "range": {"startIndex": 2, "endIndex": 4},
                        "textStyle": {"bold": true},
                        "fields": "bold"
                    }
                }
            ])
        );
    }

    #[test]
    fn test_hyperlink_mapping() {
        let directive = Directive::new(
            3,
            7,
            DirectiveKind::Hyperlink {
                target_url: "https://example.com".to_owned(),
            },
        );
        let requests = compile(&[directive], 1, None);
        assert_eq!(
            serde_json::to_value(&requests[0]).unwrap(),
            json!({
                "updateTextStyle": {
                    "range": {"startIndex": 4, "endIndex": 8},
                    "textStyle": {"link": {"url": "https://example.com"}},
                    "fields": "link"
                }
            })
        );
    }

    #[test]
    fn test_bullet_mapping() {
        let requests = compile(&[Directive::new(0, 4, DirectiveKind::BulletItem)], 1, None);
        assert_eq!(
            serde_json::to_value(&requests).unwrap(),
            json!([{
                "createParagraphBullets": {
                    "range": {"startIndex": 1, "endIndex": 6},
                    "bulletPreset": "BULLET_DISC_CIRCLE_SQUARE"
                }
            }])
        );
    }

    #[test]
    fn test_horizontal_rule_pairs_border_with_invisible_text() {
        let requests = compile(
            &[Directive::new(6, 7, DirectiveKind::HorizontalRule)],
            1,
            None,
        );
        assert_eq!(
            names(&requests),
            vec!["updateParagraphStyle", "updateTextStyle"]
        );
        assert_eq!(ranges(&requests), vec![(7, 9), (7, 8)]);

        let values = serde_json::to_value(&requests).unwrap();
        let para = &values[0]["updateParagraphStyle"];
        assert_eq!(para["fields"], json!("borderBottom"));
        assert_eq!(
            para["paragraphStyle"]["borderBottom"]["width"],
            json!({"magnitude": 1.0, "unit": "PT"})
        );
        let text = &values[1]["updateTextStyle"];
        assert_eq!(text["fields"], json!("fontSize,foregroundColor"));
        assert_eq!(
            text["textStyle"]["foregroundColor"],
            json!({"color": {"rgbColor": {"red": 1.0, "green": 1.0, "blue": 1.0}}})
        );
        assert_eq!(
            text["textStyle"]["fontSize"],
            json!({"magnitude": 1.0, "unit": "PT"})
        );
    }

    #[test]
    fn test_hidden_marker_is_invisible_text_only() {
        let requests = compile(&[Directive::new(0, 24, DirectiveKind::HiddenMarker)], 1, None);
        assert_eq!(names(&requests), vec!["updateTextStyle"]);
        assert_eq!(ranges(&requests), vec![(1, 25)]);
        let value = serde_json::to_value(&requests[0]).unwrap();
        assert_eq!(
            value["updateTextStyle"]["fields"],
            json!("fontSize,foregroundColor")
        );
    }

    #[test]
    fn test_buckets_keep_directive_order() {
        let parsed = parse("**a** **b**\n## H\n- x\n- y\n### I");
        let requests = compile(&parsed.directives, 1, Some(parsed.text_len()));
        assert_eq!(
            names(&requests),
            vec![
                "updateTextStyle",
                "updateParagraphStyle",
                "updateParagraphStyle",
                "updateTextStyle",
                "updateTextStyle",
                "updateTextStyle",
                "updateTextStyle",
                "createParagraphBullets",
                "createParagraphBullets",
            ]
        );
        // text: "a b\nH\nx\ny\nI"
        assert_eq!(
            ranges(&requests),
            vec![
                (1, 12),
                (5, 7),
                (11, 13),
                (1, 2),
                (3, 4),
                (5, 6),
                (11, 12),
                (7, 9),
                (9, 11),
            ]
        );
    }

    #[test]
    fn test_custom_theme() {
        let theme = Theme::default()
            .base_font_size(12.0)
            .accent_color(RgbColor::new(1.0, 0.0, 0.0));
        let compiler = Compiler::new(theme);
        let requests = compiler.compile(&[Directive::new(0, 1, DirectiveKind::Heading2)], 1, Some(1));
        let values = serde_json::to_value(&requests).unwrap();
        assert_eq!(
            values[0]["updateTextStyle"]["textStyle"]["fontSize"],
            json!({"magnitude": 12.0, "unit": "PT"})
        );
        assert_eq!(
            values[2]["updateTextStyle"]["textStyle"]["foregroundColor"],
            json!({"color": {"rgbColor": {"red": 1.0, "green": 0.0, "blue": 0.0}}})
        );
    }
}
