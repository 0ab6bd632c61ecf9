//! Byte-level stream boundary: explicit UTF-8 decode on read, raw bytes on write.

use crate::error::TransformError;
use std::io::{Read, Write};

/// Reads the whole of `reader` and decodes it as UTF-8.
pub fn read_document<R: Read>(mut reader: R) -> Result<String, TransformError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(TransformError::Read)?;
    tracing::debug!(bytes = bytes.len(), "input read");
    String::from_utf8(bytes).map_err(TransformError::Decode)
}

/// Writes `text` byte-for-byte and flushes.
pub fn write_document<W: Write>(mut writer: W, text: &str) -> Result<(), TransformError> {
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(TransformError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_utf8() {
        let text = read_document("[x]\r\n! Titel: Überwachung\n".as_bytes()).unwrap();
        assert_eq!(text, "[x]\r\n! Titel: Überwachung\n");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = read_document(&b"[x]\n\xff\xfe\n"[..]).unwrap_err();
        assert!(matches!(err, TransformError::Decode(_)));
    }

    #[test]
    fn rejects_latin1() {
        // "Ü" in ISO-8859-1
        let err = read_document(&b"! Title: \xdcberwachung\n"[..]).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn writes_bytes_unchanged() {
        let mut out = Vec::new();
        write_document(&mut out, "a\r\nb\n").unwrap();
        assert_eq!(out, b"a\r\nb\n");
    }
}
