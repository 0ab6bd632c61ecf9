//! The full transform: dates, checksum, header.

use crate::checksum::calculate_checksum;
use crate::clock::{Clock, Timestamps};
use crate::dates::update_dates;
use crate::error::TransformError;
use crate::header::inject_checksum;

/// Result of signing one subscription document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signed {
    /// Document to emit.
    pub text: String,
    /// Checksum token written into the header.
    pub checksum: String,
    /// Clock reading used for both date fields.
    pub timestamps: Timestamps,
}

/// Refreshes the date fields and injects a checksum computed over the
/// date-updated document.
///
/// The clock is read exactly once.
pub fn add_checksum(text: &str, clock: &dyn Clock) -> Result<Signed, TransformError> {
    let timestamps = Timestamps::from_clock(clock);
    let updated = update_dates(text, &timestamps);
    let checksum = calculate_checksum(&updated);
    let text = inject_checksum(&updated, &checksum)?;

    tracing::debug!(
        input_bytes = updated.len(),
        output_bytes = text.len(),
        %checksum,
        "document signed"
    );

    Ok(Signed {
        text,
        checksum,
        timestamps,
    })
}
