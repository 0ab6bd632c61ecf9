//! Refreshes the `! Version:` and `! Last modified:` header comments.

use crate::clock::Timestamps;
use crate::patterns::{LAST_MODIFIED_LINE, VERSION_LINE};
use regex::Captures;

/// Rewrites the first version line and the first last-modified line in place.
///
/// Each matched line is replaced by its canonical form (trailing text after
/// the value is dropped) and keeps its own `\n` or `\r\n` terminator.
/// Missing lines are not added.
pub fn update_dates(text: &str, ts: &Timestamps) -> String {
    let has_version = VERSION_LINE.is_match(text);
    let text = VERSION_LINE.replacen(text, 1, |caps: &Captures| {
        format!("! Version: {}{}", ts.version, &caps[2])
    });

    let has_modified = LAST_MODIFIED_LINE.is_match(&text);
    let text = LAST_MODIFIED_LINE.replacen(&text, 1, |caps: &Captures| {
        format!("! Last modified: {}{}", ts.last_modified, &caps[2])
    });

    tracing::debug!(
        version = has_version,
        last_modified = has_modified,
        "dates updated"
    );
    text.into_owned()
}
