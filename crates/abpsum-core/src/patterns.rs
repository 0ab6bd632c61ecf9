//! Line patterns for the metadata comments of a subscription header.
//!
//! All patterns are case-insensitive and anchored at line starts. A match must
//! end in `\n`; leading `\s*` may also swallow blank lines above the comment.
//! The date patterns capture the line terminator (`\n` or `\r\n`) as group 2.

use regex::Regex;
use std::sync::LazyLock;

/// `! Checksum: <token>` with any `-`, `:` or whitespace separator.
pub static CHECKSUM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*!\s*checksum[\s\-:]+([\w+/=]+).*\n").expect("checksum pattern")
});

/// `! Version: <digits>`.
pub static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*!\s*version[\s\-:]+(\d+).*?(\r?\n)").expect("version pattern")
});

/// `! Last modified: <text>`.
pub static LAST_MODIFIED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*!\s*last\smodified[\s\-:]+([\w: ]+).*?(\r?\n)")
        .expect("last modified pattern")
});

/// First line terminator, either `\n` or `\r\n`.
pub static LINE_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("line terminator pattern"));
