//! Human-readable rendering of raw tag values.
//!
//! # Output
//!
//! ```text
//! BYTE                 01 02 ff        (hex dump, never truncated)
//! ASCII, ASCII_NO_NUL  Canon           (decoded text, never truncated)
//! numeric, full        [1 2 3]
//! numeric, first only  1...            ("..." marks dropped elements)
//! rationals            [72/1 300/1]
//! ```
//!
//! UNDEFINED values have no generic layout and are rejected.

use std::fmt::{Display, Write as _};

use crate::error::DecodeError;

use super::byte_order::ByteOrder;
use super::decoder;
use super::tags::TagType;

/// Render `raw` as `tag_type` in `byte_order`.
///
/// The unit count is derived from the length of `raw`, which must be a whole
/// number of units. With `first_only`, numeric types render only their first
/// element (empty string for an empty sequence).
pub fn format(
    raw: &[u8],
    tag_type: TagType,
    first_only: bool,
    byte_order: ByteOrder,
) -> Result<String, DecodeError> {
    if tag_type == TagType::Undefined {
        return Err(DecodeError::UnformattableType(tag_type.name()));
    }

    let unit_size = tag_type.size_in_bytes();
    if raw.len() % unit_size != 0 {
        return Err(DecodeError::Misaligned {
            length: raw.len(),
            type_name: tag_type.name(),
            unit_size,
        });
    }
    let units = raw.len() / unit_size;
    let count = u32::try_from(units).map_err(|_| DecodeError::TooManyUnits(units))?;

    match tag_type {
        TagType::Byte => Ok(hex_dump(decoder::parse_bytes(raw, count)?)),
        TagType::Ascii => decoder::parse_ascii(raw, count),
        TagType::AsciiNoNul => decoder::parse_ascii_no_nul(raw, count),
        TagType::Short => Ok(join(
            &decoder::parse_u16_seq(raw, count, byte_order)?,
            first_only,
        )),
        TagType::Long => Ok(join(
            &decoder::parse_u32_seq(raw, count, byte_order)?,
            first_only,
        )),
        TagType::SignedLong => Ok(join(
            &decoder::parse_i32_seq(raw, count, byte_order)?,
            first_only,
        )),
        TagType::Rational => Ok(join(
            &decoder::parse_rational_seq(raw, count, byte_order)?,
            first_only,
        )),
        TagType::SignedRational => Ok(join(
            &decoder::parse_signed_rational_seq(raw, count, byte_order)?,
            first_only,
        )),
        TagType::Undefined => Err(DecodeError::UnformattableType(tag_type.name())),
    }
}

fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{b:02x}");
    }
    out
}

fn join<T: Display>(items: &[T], first_only: bool) -> String {
    match items {
        [] => String::new(),
        [first, rest @ ..] if first_only => {
            if rest.is_empty() {
                first.to_string()
            } else {
                format!("{first}...")
            }
        }
        _ => {
            let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
            format!("[{}]", parts.join(" "))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
