//! Error type shared by every stage of the subscription transform.

use std::io;
use std::string::FromUtf8Error;

/// Failure while reading, transforming or writing a subscription document.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The input stream could not be read.
    #[error("failed reading input")]
    Read(#[source] io::Error),

    /// Input bytes are not valid UTF-8. Subscriptions must be saved in UTF-8.
    #[error(
        "failed reading data, input is most likely not encoded as UTF-8 \
         (invalid byte sequence at offset {})",
        .0.utf8_error().valid_up_to()
    )]
    Decode(#[source] FromUtf8Error),

    /// Document has no line terminator, so there is no first line to anchor
    /// the checksum line under.
    #[error("document has no line terminator; expected a header line followed by a newline")]
    MissingLineTerminator,

    /// The output stream could not be written.
    #[error("failed writing output")]
    Write(#[source] io::Error),
}
