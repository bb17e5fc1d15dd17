//! Classic TIFF directory entries.
//!
//! # Entry Layout (12 bytes)
//! ```text
//! Bytes 0-1:  Tag ID
//! Bytes 2-3:  Type ID
//! Bytes 4-7:  Unit count
//! Bytes 8-11: Value (if it fits) or offset into the data region
//! ```
//!
//! All multi-byte fields use the byte order of the enclosing block. The
//! 4-byte slot is kept verbatim; whether it holds the value or an offset is
//! decided later, by the value context.

use crate::error::ValueError;

use super::byte_order::ByteOrder;
use super::tags::{TagType, INLINE_SLOT_SIZE};

/// Size of a classic TIFF directory entry in bytes.
pub const IFD_ENTRY_SIZE: usize = 12;

/// One decoded directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfdTagEntry {
    /// Path of the directory holding this entry (e.g. `IFD0/Exif`)
    pub ifd_path: String,

    /// Tag ID
    pub tag_id: u16,

    /// Declared value type
    pub tag_type: TagType,

    /// Number of units of `tag_type`
    pub unit_count: u32,

    /// The value slot read as an offset
    pub value_offset: u32,

    /// The value slot exactly as stored
    pub raw_value_offset: [u8; INLINE_SLOT_SIZE],
}

impl IfdTagEntry {
    /// Decode an entry from the first 12 bytes of `bytes`.
    ///
    /// # Errors
    /// - `OutOfBounds` if fewer than 12 bytes are supplied
    /// - `UnsupportedType` if the type ID is not a known [`TagType`]
    pub fn parse(
        bytes: &[u8],
        byte_order: ByteOrder,
        ifd_path: impl Into<String>,
    ) -> Result<Self, ValueError> {
        let ifd_path = ifd_path.into();

        if bytes.len() < IFD_ENTRY_SIZE {
            let tag_id = if bytes.len() >= 2 {
                byte_order.read_u16(bytes)
            } else {
                0
            };
            return Err(ValueError::OutOfBounds {
                ifd_path,
                tag_id,
                offset: 0,
                length: IFD_ENTRY_SIZE as u64,
                available: bytes.len() as u64,
            });
        }

        let tag_id = byte_order.read_u16(&bytes[0..2]);
        let type_id = byte_order.read_u16(&bytes[2..4]);
        let Some(tag_type) = TagType::from_u16(type_id) else {
            return Err(ValueError::UnsupportedType {
                ifd_path,
                tag_id,
                type_id,
            });
        };

        let unit_count = byte_order.read_u32(&bytes[4..8]);
        let raw_value_offset = [bytes[8], bytes[9], bytes[10], bytes[11]];
        let value_offset = byte_order.read_u32(&raw_value_offset);

        Ok(IfdTagEntry {
            ifd_path,
            tag_id,
            tag_type,
            unit_count,
            value_offset,
            raw_value_offset,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
