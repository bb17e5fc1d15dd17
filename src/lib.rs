//! # exif-value
//!
//! Locates and decodes the values of TIFF-style directory entries, as used by
//! EXIF metadata.
//!
//! A directory entry declares a type, a unit count and a 4-byte value slot.
//! Small values live in the slot itself; larger ones live in a shared data
//! region and the slot holds their offset. This crate decides which case
//! applies, slices out exactly the right bytes, and decodes them in the
//! block's byte order.
//!
//! ## Architecture
//!
//! - [`tiff::ValueContext`] - resolves, extracts and decodes one tag value
//! - [`tiff::decoder`] - stateless byte-to-value conversion
//! - [`tiff::formatter`] - human-readable rendering
//! - [`error`] - error types
//!
//! Walking directories, naming tags and file I/O are left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use exif_value::{ByteOrder, TagType, TagValue, ValueContext};
//!
//! // Two LONGs don't fit in the slot, so the slot holds offset 4.
//! let data = [0, 0, 0, 0, 0, 0, 1, 44, 0, 1, 0, 0];
//! let slot = [0, 0, 0, 4];
//!
//! let ctx = ValueContext::builder(TagType::Long, 2, &slot, &data, ByteOrder::BigEndian)
//!     .tag("IFD0", 0x0111)
//!     .build();
//!
//! assert!(!ctx.is_embedded().unwrap());
//! assert_eq!(ctx.values().unwrap(), TagValue::Longs(vec![300, 65536]));
//! assert_eq!(ctx.format_first().unwrap(), "300...");
//! ```

pub mod error;
pub mod tiff;

// Re-export commonly used types
pub use error::{DecodeError, Result, ValueError};
pub use tiff::{
    ByteOrder, IfdTagEntry, Rational, SignedRational, TagType, TagValue, ValueContext,
    ValueContextBuilder, IFD_ENTRY_SIZE, INLINE_SLOT_SIZE,
};
