//! Tag value type definitions.
//!
//! The declared type of a directory entry fixes how many bytes one unit
//! occupies, which in turn decides whether the value fits in the entry's
//! 4-byte value slot or lives elsewhere in the data region.

use std::fmt;

use serde::Serialize;

// =============================================================================
// Constants
// =============================================================================

/// Size of the value/offset slot in a classic TIFF directory entry.
///
/// Values whose total size is at most this many bytes are stored inline;
/// anything larger is referenced by offset. Fixed by the wire layout.
pub const INLINE_SLOT_SIZE: usize = 4;

// =============================================================================
// TagType
// =============================================================================

/// Primitive value types a directory entry can declare.
///
/// `AsciiNoNul` never appears on the wire. It is assigned by callers to text
/// tags that are known to be written without a NUL terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum TagType {
    /// Unsigned 8-bit integer (1 byte)
    Byte = 1,

    /// 8-bit text, NUL-terminated (1 byte)
    Ascii = 2,

    /// Unsigned 16-bit integer (2 bytes)
    Short = 3,

    /// Unsigned 32-bit integer (4 bytes)
    Long = 4,

    /// Two unsigned 32-bit integers, numerator then denominator (8 bytes)
    Rational = 5,

    /// Opaque bytes whose layout depends on the tag (1 byte)
    Undefined = 7,

    /// Signed 32-bit integer (4 bytes)
    SignedLong = 9,

    /// Two signed 32-bit integers, numerator then denominator (8 bytes)
    SignedRational = 10,

    /// 8-bit text without a terminator (1 byte)
    AsciiNoNul = 0xF0,
}

impl TagType {
    /// Size of a single unit of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            TagType::Byte | TagType::Ascii | TagType::Undefined | TagType::AsciiNoNul => 1,
            TagType::Short => 2,
            TagType::Long | TagType::SignedLong => 4,
            TagType::Rational | TagType::SignedRational => 8,
        }
    }

    /// Create a TagType from its numeric value.
    ///
    /// Returns `None` for unknown type values.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(TagType::Byte),
            2 => Some(TagType::Ascii),
            3 => Some(TagType::Short),
            4 => Some(TagType::Long),
            5 => Some(TagType::Rational),
            7 => Some(TagType::Undefined),
            9 => Some(TagType::SignedLong),
            10 => Some(TagType::SignedRational),
            0xF0 => Some(TagType::AsciiNoNul),
            _ => None,
        }
    }

    /// Get the numeric type ID.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Conventional upper-case name of the type.
    pub const fn name(self) -> &'static str {
        match self {
            TagType::Byte => "BYTE",
            TagType::Ascii => "ASCII",
            TagType::Short => "SHORT",
            TagType::Long => "LONG",
            TagType::Rational => "RATIONAL",
            TagType::Undefined => "UNDEFINED",
            TagType::SignedLong => "SLONG",
            TagType::SignedRational => "SRATIONAL",
            TagType::AsciiNoNul => "_ASCII_NO_NUL",
        }
    }

    /// Total byte length of `count` units of this type.
    ///
    /// Computed in u64 so that a 32-bit count can never overflow.
    #[inline]
    pub fn byte_length(self, count: u32) -> u64 {
        self.size_in_bytes() as u64 * count as u64
    }

    /// Check if `count` units of this type fit in the inline value slot.
    #[inline]
    pub fn fits_inline(self, count: u32) -> bool {
        self.byte_length(count) <= INLINE_SLOT_SIZE as u64
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================
