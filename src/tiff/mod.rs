//! TIFF/EXIF tag value extraction.
//!
//! # Key Concepts
//!
//! - **Byte order**: the block declares its endianness once (II = little-endian,
//!   MM = big-endian). All multi-byte values, offsets included, follow it.
//!
//! - **Inline vs offset values**: every directory entry has a 4-byte value
//!   slot. Values of at most 4 bytes are stored in the slot itself; larger
//!   values are stored in the data region and the slot holds their offset.
//!
//! - **UNDEFINED values**: their size and layout depend on the tag, so the
//!   caller supplies the effective type and count before reading them.

mod byte_order;
mod context;
pub mod decoder;
mod entry;
pub mod formatter;
mod tags;
mod values;

pub use byte_order::{ByteOrder, ParseByteOrderError, MARKER_BIG_ENDIAN, MARKER_LITTLE_ENDIAN};
pub use context::{ValueContext, ValueContextBuilder};
pub use entry::{IfdTagEntry, IFD_ENTRY_SIZE};
pub use tags::{TagType, INLINE_SLOT_SIZE};
pub use values::{Rational, SignedRational, TagValue};
