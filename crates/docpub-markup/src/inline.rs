//! Inline markup scrubbing: `**bold**` and `[label](url)`.
//!
//! The scanner walks a single line left to right with one cursor. Every
//! directive it records is positioned in the final plain-text coordinate
//! space by adding the caller's base offset.

use crate::directive::{Directive, DirectiveKind};
use crate::text::text_len;

const BOLD_DELIMITER: &str = "**";

/// Strip bold and link markup from `text`, recording directives.
///
/// `base` is the offset at which the returned text will start in the
/// final plain text.
pub(crate) fn strip_inline(text: &str, base: usize, directives: &mut Vec<Directive>) -> String {
    scan(text, base, directives, true)
}

/// Strip bold markup only. Used for link labels.
fn strip_bold(text: &str, base: usize, directives: &mut Vec<Directive>) -> String {
    scan(text, base, directives, false)
}

fn scan(text: &str, base: usize, directives: &mut Vec<Directive>, links: bool) -> String {
    let mut out = String::with_capacity(text.len());
    // Code units written to `out` so far.
    let mut written = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if links && let Some(link) = match_link(rest) {
            let start = base + written;
            let label = strip_bold(link.label, start, directives);
            let label_len = text_len(&label);
            directives.push(Directive::new(
                start,
                start + label_len,
                DirectiveKind::Hyperlink {
                    target_url: link.url.to_owned(),
                },
            ));
            out.push_str(&label);
            written += label_len;
            pos += link.consumed;
            continue;
        }

        if let Some(inner) = match_bold(rest) {
            let start = base + written;
            let inner_len = text_len(inner);
            directives.push(Directive::new(start, start + inner_len, DirectiveKind::Bold));
            out.push_str(inner);
            written += inner_len;
            pos += inner.len() + 2 * BOLD_DELIMITER.len();
            continue;
        }

        // Unmatched markup falls through here and is copied literally.
        let Some(ch) = rest.chars().next() else {
            break;
        };
        out.push(ch);
        written += ch.len_utf16();
        pos += ch.len_utf8();
    }

    out
}

/// A `[label](url)` match at the start of a string.
struct LinkMatch<'a> {
    label: &'a str,
    url: &'a str,
    /// Bytes spanned by the whole match.
    consumed: usize,
}

/// Match `[label](url)` at the start of `s`.
///
/// The label is one or more characters other than `]`; the URL is one or
/// more characters other than `)`.
fn match_link(s: &str) -> Option<LinkMatch<'_>> {
    let after_open = s.strip_prefix('[')?;
    let label_end = after_open.find(']')?;
    if label_end == 0 {
        return None;
    }
    let label = &after_open[..label_end];

    let after_label = after_open[label_end + 1..].strip_prefix('(')?;
    let url_end = after_label.find(')')?;
    if url_end == 0 {
        return None;
    }
    let url = &after_label[..url_end];

    // '[' + label + "](" + url + ')'
    let consumed = 1 + label.len() + 2 + url.len() + 1;
    Some(LinkMatch {
        label,
        url,
        consumed,
    })
}

/// Match `**inner**` at the start of `s`, returning `inner`.
///
/// The closing delimiter is the first `**` after the opening one, so the
/// inner content may be empty.
fn match_bold(s: &str) -> Option<&str> {
    let after_open = s.strip_prefix(BOLD_DELIMITER)?;
    let close = after_open.find(BOLD_DELIMITER)?;
    Some(&after_open[..close])
}
