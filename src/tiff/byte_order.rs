//! Byte order selection for multi-byte values.
//!
//! A TIFF/EXIF block declares its endianness once, in the first two bytes of
//! its header ("II" or "MM"). Every multi-byte number inside the block,
//! directory entries and referenced values alike, is read in that order.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// =============================================================================
// Constants
// =============================================================================

/// Header marker for little-endian data ("II" for Intel)
pub const MARKER_LITTLE_ENDIAN: [u8; 2] = *b"II";

/// Header marker for big-endian data ("MM" for Motorola)
pub const MARKER_BIG_ENDIAN: [u8; 2] = *b"MM";

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) used to decode numeric fields.
///
/// The read helpers expect the caller to have checked the slice length; the
/// decoder does this once per sequence before reading any unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Select the byte order from a TIFF header marker.
    ///
    /// Returns `None` for anything other than `II` or `MM`.
    pub fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match marker {
            MARKER_LITTLE_ENDIAN => Some(ByteOrder::LittleEndian),
            MARKER_BIG_ENDIAN => Some(ByteOrder::BigEndian),
            _ => None,
        }
    }

    /// The header marker for this byte order.
    #[inline]
    pub const fn marker(self) -> [u8; 2] {
        match self {
            ByteOrder::LittleEndian => MARKER_LITTLE_ENDIAN,
            ByteOrder::BigEndian => MARKER_BIG_ENDIAN,
        }
    }

    /// Read a u16 from the first 2 bytes of `bytes`.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than 2 bytes.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        let raw = [bytes[0], bytes[1]];
        match self {
            ByteOrder::LittleEndian => u16::from_le_bytes(raw),
            ByteOrder::BigEndian => u16::from_be_bytes(raw),
        }
    }

    /// Read a u32 from the first 4 bytes of `bytes`.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than 4 bytes.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        let raw = [bytes[0], bytes[1], bytes[2], bytes[3]];
        match self {
            ByteOrder::LittleEndian => u32::from_le_bytes(raw),
            ByteOrder::BigEndian => u32::from_be_bytes(raw),
        }
    }

    /// Read an i32 from the first 4 bytes of `bytes`.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than 4 bytes.
    #[inline]
    pub fn read_i32(self, bytes: &[u8]) -> i32 {
        self.read_u32(bytes) as i32
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::LittleEndian => f.write_str("little-endian"),
            ByteOrder::BigEndian => f.write_str("big-endian"),
        }
    }
}

/// Error returned when a byte order name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown byte order: {0} (expected little, big, II or MM)")]
pub struct ParseByteOrderError(String);

impl FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "little-endian" | "le" | "ii" => Ok(ByteOrder::LittleEndian),
            "big" | "big-endian" | "be" | "mm" => Ok(ByteOrder::BigEndian),
            _ => Err(ParseByteOrderError(s.to_string())),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
