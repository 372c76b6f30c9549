//! Tag-line cleanup and wrapped-record repair.
//!
//! A record line has the shape `TAG: value`, where the tag is uppercase
//! ASCII letters, digits, and `-` followed by a colon (`START-OF-LOG:`,
//! `QSO:`, `CALLSIGN:`, ...). People hand-edit these files, so two defects
//! are common enough to repair here:
//!
//! - indentation in front of a tag, which hides the record from tag-keyed
//!   consumers ([`remove_space_before_tags`])
//! - a record wrapped across two or more lines by a mail client or a
//!   narrow editor ([`fix_wrapped_lines`])
//!
//! `X-QSO:` records are operator-withdrawn contacts; [`remove_xqso_lines`]
//! drops them so they never reach tabulation.
//!
//! All functions expect `\n`-separated text (run
//! [`translate_eol`](crate::translate_eol) first) and preserve the
//! presence or absence of the final `\n`.

/// Byte length of the `TAG:` prefix at the start of `line`, colon
/// included, or `None` when the line does not begin with a tag.
fn tag_end(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len()
        && (bytes[i].is_ascii_uppercase() || bytes[i].is_ascii_digit() || bytes[i] == b'-')
    {
        i += 1;
    }
    if i > 0 && i < bytes.len() && bytes[i] == b':' {
        Some(i + 1)
    } else {
        None
    }
}

fn starts_with_tag(line: &str) -> bool {
    tag_end(line).is_some()
}

/// Delete spaces and tabs in front of a record tag so the tag starts its
/// line. Lines that do not begin with a tag after the blanks are left
/// untouched.
pub fn remove_space_before_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };
        let stripped = body.trim_start_matches([' ', '\t']);
        if stripped.len() < body.len() && starts_with_tag(stripped) {
            out.push_str(stripped);
        } else {
            out.push_str(body);
        }
        out.push_str(newline);
    }
    out
}

/// Rejoin records that were wrapped across lines.
///
/// A non-empty line that does not begin with a tag is treated as the
/// continuation of the record on the previous line and is appended to it
/// with a single space, its own leading blanks dropped. A continuation
/// with nothing to attach to (first line, or following a non-record line)
/// stays where it is.
pub fn fix_wrapped_lines(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let had_final_newline = text.ends_with('\n');
    let body = if had_final_newline {
        &text[..text.len() - 1]
    } else {
        text
    };

    let mut merged: Vec<String> = Vec::new();
    for line in body.split('\n') {
        let content = line.trim_start_matches([' ', '\t']);
        if !content.is_empty() && !starts_with_tag(content) {
            if let Some(prev) = merged.last_mut() {
                if starts_with_tag(prev) {
                    tracing::debug!(fragment = content, "rejoining wrapped record line");
                    prev.push(' ');
                    prev.push_str(content);
                    continue;
                }
            }
        }
        merged.push(line.to_string());
    }

    let mut out = merged.join("\n");
    if had_final_newline {
        out.push('\n');
    }
    out
}

/// Drop every `X-QSO:` record line.
pub fn remove_xqso_lines(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|line| !line.trim_start_matches([' ', '\t']).starts_with("X-QSO:"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tag_recognition() {
        assert!(starts_with_tag("QSO: 14000 CW"));
        assert!(starts_with_tag("START-OF-LOG: 3.0"));
        assert!(starts_with_tag("X-QSO: withdrawn"));
        assert!(!starts_with_tag("  QSO: indented"));
        assert!(!starts_with_tag("lowercase: nope"));
        assert!(!starts_with_tag(": no tag"));
        assert!(!starts_with_tag("PLAIN TEXT"));
        assert!(!starts_with_tag(""));
    }

    #[test]
    fn test_remove_space_before_tags() {
        let text = "  QSO: 14000 CW\n\tCALLSIGN: W1AW\nplain text stays  indented\n";
        assert_eq!(
            remove_space_before_tags(text),
            "QSO: 14000 CW\nCALLSIGN: W1AW\nplain text stays  indented\n"
        );
    }

    #[test]
    fn test_remove_space_before_tags_no_final_newline() {
        assert_eq!(remove_space_before_tags("  QSO: x"), "QSO: x");
        assert_eq!(remove_space_before_tags(""), "");
    }

    #[test]
    fn test_fix_wrapped_lines_joins_continuation() {
        let text = "QSO: 14000 CW 2024-01-01\n  0001 W1AW 599 CT\nQSO: 7000 PH\n";
        assert_eq!(
            fix_wrapped_lines(text),
            "QSO: 14000 CW 2024-01-01 0001 W1AW 599 CT\nQSO: 7000 PH\n"
        );
    }

    #[test]
    fn test_fix_wrapped_lines_multiple_fragments() {
        let text = "QSO: 14000\nCW\n599\n";
        assert_eq!(fix_wrapped_lines(text), "QSO: 14000 CW 599\n");
    }

    #[test]
    fn test_fix_wrapped_lines_orphan_continuation_kept() {
        // Nothing to attach to: first line and lines after blanks stay put.
        let text = "orphan fragment\n\nanother orphan\nQSO: ok\n";
        assert_eq!(fix_wrapped_lines(text), text);
    }

    #[test]
    fn test_fix_wrapped_lines_preserves_blank_lines() {
        let text = "QSO: a\n\nQSO: b";
        assert_eq!(fix_wrapped_lines(text), text);
    }

    #[test]
    fn test_remove_xqso_lines() {
        let text = "QSO: keep\nX-QSO: drop\n  X-QSO: drop too\nEND-OF-LOG:\n";
        assert_eq!(remove_xqso_lines(text), "QSO: keep\nEND-OF-LOG:\n");
    }

    #[test]
    fn test_remove_xqso_lines_no_final_newline() {
        assert_eq!(remove_xqso_lines("X-QSO: drop"), "");
        assert_eq!(remove_xqso_lines("QSO: keep"), "QSO: keep");
    }
}
