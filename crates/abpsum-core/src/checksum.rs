//! Checksum token for a subscription: MD5 over the canonical text,
//! base64-encoded without padding.
//!
//! This guards against truncated or corrupted downloads; it is not a
//! security boundary.

use crate::normalize::normalize;
use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};

/// Digest `canonical` as UTF-8 and return the unpadded base64 token.
pub fn digest_token(canonical: &str) -> String {
    let digest = md5::compute(canonical.as_bytes());
    STANDARD_NO_PAD.encode(digest.0)
}

/// Normalize `text` and return its checksum token.
pub fn calculate_checksum(text: &str) -> String {
    let canonical = normalize(text);
    let token = digest_token(&canonical);
    tracing::debug!(canonical_bytes = canonical.len(), %token, "checksum calculated");
    token
}
