//! Refresh the metadata header of a filter-list subscription and sign it with
//! a content checksum.
//!
//! The transform runs in four steps over an in-memory document:
//! [`update_dates`], [`normalize`], [`calculate_checksum`] and
//! [`inject_checksum`]. [`add_checksum`] runs all of them.

pub mod checksum;
pub mod clock;
pub mod dates;
pub mod error;
pub mod header;
pub mod logging;
pub mod normalize;
pub mod patterns;
pub mod pipeline;
pub mod stream;

pub use checksum::{calculate_checksum, digest_token};
pub use clock::{Clock, FixedClock, SystemClock, Timestamps};
pub use dates::update_dates;
pub use error::TransformError;
pub use header::inject_checksum;
pub use normalize::{normalize, strip_checksum_lines};
pub use pipeline::{add_checksum, Signed};
pub use stream::{read_document, write_document};
