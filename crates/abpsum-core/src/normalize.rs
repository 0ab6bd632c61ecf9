//! Canonical form of a subscription, used only as checksum input.

use crate::patterns::CHECKSUM_LINE;
use std::borrow::Cow;

/// Removes every checksum line (with its newline) from `text`.
pub fn strip_checksum_lines(text: &str) -> Cow<'_, str> {
    CHECKSUM_LINE.replace_all(text, "")
}

/// Produces the canonical form of `text`.
///
/// - Drops every `\r`
/// - Collapses runs of `\n` into one (blank lines disappear)
/// - Strips checksum lines
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_newline = false;

    for c in text.chars() {
        match c {
            '\r' => {}
            '\n' => {
                if !prev_newline {
                    out.push('\n');
                }
                prev_newline = true;
            }
            _ => {
                out.push(c);
                prev_newline = false;
            }
        }
    }

    if CHECKSUM_LINE.is_match(&out) {
        strip_checksum_lines(&out).into_owned()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_carriage_returns() {
        assert_eq!(normalize("a\r\nb\r\n"), "a\nb\n");
        assert_eq!(normalize("a\rb"), "ab");
    }

    #[test]
    fn collapses_blank_lines() {
        assert_eq!(normalize("a\n\n\nb\n\n"), "a\nb\n");
        assert_eq!(normalize("a\r\n\r\n\r\nb"), "a\nb");
    }

    #[test]
    fn strips_every_checksum_variant() {
        let input = "[x]\n  ! CHECKSUM- aaaa\n!checksum :bbbb= trailing\n||a^\n";
        assert_eq!(normalize(input), "[x]\n||a^\n");
    }

    #[test]
    fn keeps_unterminated_checksum_line() {
        assert_eq!(normalize("[x]\n! Checksum: abc"), "[x]\n! Checksum: abc");
    }

    #[test]
    fn leaves_non_ascii_text_intact() {
        assert_eq!(normalize("[x]\r\n! Titel: Überwachung\r\n"), "[x]\n! Titel: Überwachung\n");
    }

    #[test]
    fn raw_strip_consumes_blank_lines_above() {
        assert_eq!(strip_checksum_lines("[x]\n\n! Checksum: a\n||a^\n"), "[x]\n||a^\n");
    }
}
