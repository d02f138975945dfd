//! Offset arithmetic in UTF-16 code units.

/// Zero-width space standing in for a horizontal rule line.
///
/// The rule needs a non-empty paragraph to carry its border.
pub const RULE_PLACEHOLDER: &str = "\u{200B}";

/// Length of `s` in UTF-16 code units.
#[must_use]
pub fn text_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Slice `s` by a UTF-16 code unit range.
///
/// Positions that fall inside a surrogate pair are widened to the whole
/// character.
pub(crate) fn slice_units(s: &str, start: usize, end: usize) -> &str {
    let mut units = 0;
    let mut from = s.len();
    let mut to = s.len();
    for (idx, ch) in s.char_indices() {
        if units >= end {
            to = idx;
            break;
        }
        if from == s.len() && units + ch.len_utf16() > start {
            from = idx;
        }
        units += ch.len_utf16();
    }
    &s[from.min(to)..to]
}
