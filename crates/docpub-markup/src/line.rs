//! Line classification.

/// Structural role of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// `---` (three or more hyphens).
    Rule,
    /// `<!-- SECTION:... -->` or `<!-- /SECTION:... -->`, kept verbatim.
    HiddenMarker(&'a str),
    /// `## content`
    Heading2(&'a str),
    /// `### content`
    Heading3(&'a str),
    /// `- content` (content still carries inline markup).
    Bullet(&'a str),
    /// Anything else (still carries inline markup).
    Text(&'a str),
}

/// Classify a line with trailing whitespace already removed.
///
/// Checks run in priority order: rule, hidden marker, level-2 heading,
/// level-3 heading, bullet, plain text.
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    if is_rule(line) {
        return LineKind::Rule;
    }
    if is_section_marker(line) {
        return LineKind::HiddenMarker(line);
    }
    if !line.starts_with("###")
        && let Some(content) = marker_content(line, "##")
    {
        return LineKind::Heading2(content);
    }
    if let Some(content) = marker_content(line, "###") {
        return LineKind::Heading3(content);
    }
    if let Some(content) = marker_content(line, "-") {
        return LineKind::Bullet(content);
    }
    LineKind::Text(line)
}

fn is_rule(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

fn is_section_marker(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("<!--") else {
        return false;
    };
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    rest.strip_prefix("SECTION:")
        .and_then(|body| body.strip_suffix("-->"))
        .is_some_and(|inner| !inner.is_empty())
}

/// Content after `marker` and at least one whitespace character.
///
/// Returns `None` when the marker is missing, is not followed by
/// whitespace, or nothing follows the whitespace.
fn marker_content<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let content = rest.trim_start();
    (!content.is_empty()).then_some(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule() {
        assert_eq!(classify("---"), LineKind::Rule);
        assert_eq!(classify("----------"), LineKind::Rule);
        assert_eq!(classify("--"), LineKind::Text("--"));
        assert_eq!(classify("--- x"), LineKind::Text("--- x"));
    }

    #[test]
    fn test_section_markers() {
        assert_eq!(
            classify("<!-- SECTION:intro -->"),
            LineKind::HiddenMarker("<!-- SECTION:intro -->")
        );
        assert_eq!(
            classify("<!-- /SECTION:intro -->"),
            LineKind::HiddenMarker("<!-- /SECTION:intro -->")
        );
        assert_eq!(
            classify("<!--SECTION:x-->"),
            LineKind::HiddenMarker("<!--SECTION:x-->")
        );
    }

    #[test]
    fn test_section_marker_requires_body() {
        assert_eq!(
            classify("<!-- SECTION:-->"),
            LineKind::Text("<!-- SECTION:-->")
        );
        assert_eq!(
            classify("<!-- comment -->"),
            LineKind::Text("<!-- comment -->")
        );
        assert_eq!(
            classify("<!-- SECTION:a --> trailing"),
            LineKind::Text("<!-- SECTION:a --> trailing")
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(classify("## Title"), LineKind::Heading2("Title"));
        assert_eq!(classify("##   Spaced"), LineKind::Heading2("Spaced"));
        assert_eq!(classify("### Sub"), LineKind::Heading3("Sub"));
        assert_eq!(
            classify("### not ## this"),
            LineKind::Heading3("not ## this")
        );
    }

    #[test]
    fn test_heading_needs_whitespace_and_content() {
        assert_eq!(classify("##Title"), LineKind::Text("##Title"));
        assert_eq!(classify("##"), LineKind::Text("##"));
        assert_eq!(classify("#### Deep"), LineKind::Text("#### Deep"));
        assert_eq!(classify("# Top"), LineKind::Text("# Top"));
    }

    #[test]
    fn test_bullets() {
        assert_eq!(classify("- item"), LineKind::Bullet("item"));
        assert_eq!(classify("-\titem"), LineKind::Bullet("item"));
        assert_eq!(classify("-item"), LineKind::Text("-item"));
        assert_eq!(classify("-"), LineKind::Text("-"));
    }
}
