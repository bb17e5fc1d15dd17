//! Raw byte to typed value conversion.
//!
//! These functions are the decoder service the value context delegates to.
//! They hold no state. Each one checks up front that `data` holds at least
//! `count` units and then reads exactly `count` units, ignoring any trailing
//! bytes.
//!
//! Text is decoded one byte per character (ISO-8859-1), so the decoded string
//! always has exactly as many characters as bytes were read.

use crate::error::DecodeError;

use super::byte_order::ByteOrder;
use super::tags::TagType;
use super::values::{Rational, SignedRational};

/// Ensure `data` holds `count` units of `tag_type`, returning the byte length.
fn require(data: &[u8], count: u32, tag_type: TagType) -> Result<usize, DecodeError> {
    let needed = tag_type.byte_length(count);
    if (data.len() as u64) < needed {
        return Err(DecodeError::NotEnoughData {
            needed: needed as usize,
            available: data.len(),
        });
    }
    Ok(needed as usize)
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Return the first `count` bytes.
pub fn parse_bytes(data: &[u8], count: u32) -> Result<&[u8], DecodeError> {
    let len = require(data, count, TagType::Byte)?;
    Ok(&data[..len])
}

/// Decode NUL-terminated text, stripping the terminator.
///
/// A count of zero yields an empty string.
pub fn parse_ascii(data: &[u8], count: u32) -> Result<String, DecodeError> {
    let len = require(data, count, TagType::Ascii)?;
    if len == 0 {
        return Ok(String::new());
    }

    match data[..len].split_last() {
        Some((&0, text)) => Ok(latin1(text)),
        _ => Err(DecodeError::MissingTerminator),
    }
}

/// Decode text that carries no terminator. Every byte, NUL included, is kept.
pub fn parse_ascii_no_nul(data: &[u8], count: u32) -> Result<String, DecodeError> {
    let len = require(data, count, TagType::AsciiNoNul)?;
    Ok(latin1(&data[..len]))
}

/// Decode `count` unsigned 16-bit values.
pub fn parse_u16_seq(
    data: &[u8],
    count: u32,
    byte_order: ByteOrder,
) -> Result<Vec<u16>, DecodeError> {
    let len = require(data, count, TagType::Short)?;
    Ok(data[..len]
        .chunks_exact(2)
        .map(|unit| byte_order.read_u16(unit))
        .collect())
}

/// Decode `count` unsigned 32-bit values.
pub fn parse_u32_seq(
    data: &[u8],
    count: u32,
    byte_order: ByteOrder,
) -> Result<Vec<u32>, DecodeError> {
    let len = require(data, count, TagType::Long)?;
    Ok(data[..len]
        .chunks_exact(4)
        .map(|unit| byte_order.read_u32(unit))
        .collect())
}

/// Decode `count` signed 32-bit values.
pub fn parse_i32_seq(
    data: &[u8],
    count: u32,
    byte_order: ByteOrder,
) -> Result<Vec<i32>, DecodeError> {
    let len = require(data, count, TagType::SignedLong)?;
    Ok(data[..len]
        .chunks_exact(4)
        .map(|unit| byte_order.read_i32(unit))
        .collect())
}

/// Decode `count` unsigned rationals (numerator then denominator).
pub fn parse_rational_seq(
    data: &[u8],
    count: u32,
    byte_order: ByteOrder,
) -> Result<Vec<Rational>, DecodeError> {
    let len = require(data, count, TagType::Rational)?;
    Ok(data[..len]
        .chunks_exact(8)
        .map(|unit| Rational::new(byte_order.read_u32(unit), byte_order.read_u32(&unit[4..])))
        .collect())
}

/// Decode `count` signed rationals (numerator then denominator).
pub fn parse_signed_rational_seq(
    data: &[u8],
    count: u32,
    byte_order: ByteOrder,
) -> Result<Vec<SignedRational>, DecodeError> {
    let len = require(data, count, TagType::SignedRational)?;
    Ok(data[..len]
        .chunks_exact(8)
        .map(|unit| {
            SignedRational::new(byte_order.read_i32(unit), byte_order.read_i32(&unit[4..]))
        })
        .collect())
}

// =============================================================================
// Tests
// =============================================================================
