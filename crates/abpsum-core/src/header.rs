//! Places the checksum line directly under the first line of the document.

use crate::error::TransformError;
use crate::normalize::strip_checksum_lines;
use crate::patterns::{CHECKSUM_LINE, LINE_TERMINATOR};

/// Removes any existing checksum lines from `text` and inserts
/// `! Checksum: <token>` as the second line, terminated the same way as the
/// first line (`\n` or `\r\n`).
///
/// Fails with [`TransformError::MissingLineTerminator`] when `text` (after
/// stripping) has no line terminator, including when it is empty.
pub fn inject_checksum(text: &str, token: &str) -> Result<String, TransformError> {
    let existing = CHECKSUM_LINE.find_iter(text).count();
    if existing > 1 {
        tracing::warn!(count = existing, "removing duplicate checksum lines");
    }

    let stripped = strip_checksum_lines(text);
    let terminator = LINE_TERMINATOR
        .find(&stripped)
        .ok_or(TransformError::MissingLineTerminator)?;

    let (head, tail) = stripped.split_at(terminator.end());
    let eol = terminator.as_str();

    let mut out = String::with_capacity(stripped.len() + token.len() + 16);
    out.push_str(head);
    out.push_str("! Checksum: ");
    out.push_str(token);
    out.push_str(eol);
    out.push_str(tail);
    Ok(out)
}
