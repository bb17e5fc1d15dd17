//! Value location and typed extraction for a single tag.
//!
//! A [`ValueContext`] wraps one directory entry together with the data region
//! its offsets point into. Every read goes through the same two steps:
//!
//! 1. **Resolve** the effective (type, count). This is the declared pair,
//!    except for UNDEFINED tags, whose layout must be supplied by the caller
//!    through [`ValueContextBuilder::undefined_value`].
//! 2. **Extract** exactly `size(type) * count` bytes, either from the 4-byte
//!    inline slot (embedded) or from the data region at the value offset
//!    (referenced).
//!
//! The extracted bytes are then handed to the [`decoder`] or the
//! [`formatter`](super::formatter). No bytes are copied before decoding.
//!
//! # Unit counts of UNDEFINED tags
//!
//! Typed readers decode the *effective* unit count, the same count that sized
//! the extracted span. For every type other than UNDEFINED this equals the
//! declared count.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{DecodeError, Result, ValueError};

use super::byte_order::ByteOrder;
use super::decoder;
use super::entry::IfdTagEntry;
use super::formatter;
use super::tags::{TagType, INLINE_SLOT_SIZE};
use super::values::{Rational, SignedRational, TagValue};

// =============================================================================
// ValueContextBuilder
// =============================================================================

/// Collects the parameters of a [`ValueContext`].
///
/// The UNDEFINED override can only be supplied here, so a built context never
/// changes.
#[derive(Clone)]
pub struct ValueContextBuilder<'a> {
    ifd_path: &'a str,
    tag_id: u16,
    tag_type: TagType,
    unit_count: u32,
    value_offset: Option<u32>,
    raw_value_offset: &'a [u8; INLINE_SLOT_SIZE],
    addressable_data: &'a [u8],
    byte_order: ByteOrder,
    undefined_value: Option<(TagType, u32)>,
}

impl<'a> ValueContextBuilder<'a> {
    /// Start a context for a tag declared as `unit_count` units of `tag_type`.
    ///
    /// Unless [`value_offset`](Self::value_offset) is called, the offset is
    /// read from `raw_value_offset` in `byte_order`.
    pub fn new(
        tag_type: TagType,
        unit_count: u32,
        raw_value_offset: &'a [u8; INLINE_SLOT_SIZE],
        addressable_data: &'a [u8],
        byte_order: ByteOrder,
    ) -> Self {
        Self {
            ifd_path: "",
            tag_id: 0,
            tag_type,
            unit_count,
            value_offset: None,
            raw_value_offset,
            addressable_data,
            byte_order,
            undefined_value: None,
        }
    }

    /// Start a context from a decoded directory entry.
    pub fn from_tag_entry(
        entry: &'a IfdTagEntry,
        addressable_data: &'a [u8],
        byte_order: ByteOrder,
    ) -> Self {
        Self::new(
            entry.tag_type,
            entry.unit_count,
            &entry.raw_value_offset,
            addressable_data,
            byte_order,
        )
        .tag(&entry.ifd_path, entry.tag_id)
        .value_offset(entry.value_offset)
    }

    /// Identify the tag in errors and log events.
    pub fn tag(mut self, ifd_path: &'a str, tag_id: u16) -> Self {
        self.ifd_path = ifd_path;
        self.tag_id = tag_id;
        self
    }

    /// Use an explicit offset instead of decoding it from the value slot.
    pub fn value_offset(mut self, value_offset: u32) -> Self {
        self.value_offset = Some(value_offset);
        self
    }

    /// Effective type and count for a tag declared UNDEFINED.
    ///
    /// Ignored for every other declared type.
    pub fn undefined_value(mut self, tag_type: TagType, unit_count: u32) -> Self {
        self.undefined_value = Some((tag_type, unit_count));
        self
    }

    /// Finish the context, decoding the offset from the slot if none was set.
    pub fn build(self) -> ValueContext<'a> {
        let value_offset = self
            .value_offset
            .unwrap_or_else(|| self.byte_order.read_u32(self.raw_value_offset));

        ValueContext {
            ifd_path: self.ifd_path,
            tag_id: self.tag_id,
            tag_type: self.tag_type,
            unit_count: self.unit_count,
            value_offset,
            raw_value_offset: self.raw_value_offset,
            addressable_data: self.addressable_data,
            byte_order: self.byte_order,
            undefined_value: self.undefined_value,
        }
    }
}

// =============================================================================
// ValueContext
// =============================================================================

/// Everything needed to locate and decode one tag value.
///
/// Borrows the inline slot and the data region; it is cheap to build one per
/// tag and safe to share across threads.
#[derive(Clone, Copy)]
pub struct ValueContext<'a> {
    ifd_path: &'a str,
    tag_id: u16,
    tag_type: TagType,
    unit_count: u32,
    value_offset: u32,
    raw_value_offset: &'a [u8; INLINE_SLOT_SIZE],
    addressable_data: &'a [u8],
    byte_order: ByteOrder,
    undefined_value: Option<(TagType, u32)>,
}

impl<'a> ValueContext<'a> {
    /// Shorthand for [`ValueContextBuilder::new`].
    pub fn builder(
        tag_type: TagType,
        unit_count: u32,
        raw_value_offset: &'a [u8; INLINE_SLOT_SIZE],
        addressable_data: &'a [u8],
        byte_order: ByteOrder,
    ) -> ValueContextBuilder<'a> {
        ValueContextBuilder::new(
            tag_type,
            unit_count,
            raw_value_offset,
            addressable_data,
            byte_order,
        )
    }

    /// Build a context for an entry that needs no UNDEFINED override.
    pub fn from_tag_entry(
        entry: &'a IfdTagEntry,
        addressable_data: &'a [u8],
        byte_order: ByteOrder,
    ) -> Self {
        ValueContextBuilder::from_tag_entry(entry, addressable_data, byte_order).build()
    }

    /// Directory path used in errors and log events.
    #[inline]
    pub fn ifd_path(&self) -> &'a str {
        self.ifd_path
    }

    /// Tag number.
    #[inline]
    pub fn tag_id(&self) -> u16 {
        self.tag_id
    }

    /// Declared type.
    #[inline]
    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    /// Declared unit count.
    #[inline]
    pub fn unit_count(&self) -> u32 {
        self.unit_count
    }

    /// Offset into the data region. Meaningless for embedded values.
    #[inline]
    pub fn value_offset(&self) -> u32 {
        self.value_offset
    }

    /// The entry's 4-byte value slot, undecoded.
    #[inline]
    pub fn raw_value_offset(&self) -> &'a [u8; INLINE_SLOT_SIZE] {
        self.raw_value_offset
    }

    /// Region that `value_offset` points into.
    #[inline]
    pub fn addressable_data(&self) -> &'a [u8] {
        self.addressable_data
    }

    /// Byte order of the multi-byte values.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------

    /// The (type, count) used to size and decode the value.
    ///
    /// # Errors
    /// `UndefinedTypeNotConfigured` if the tag is declared UNDEFINED and no
    /// usable override was supplied. An override that is itself UNDEFINED
    /// counts as missing.
    pub fn effective_parameters(&self) -> Result<(TagType, u32)> {
        if self.tag_type != TagType::Undefined {
            return Ok((self.tag_type, self.unit_count));
        }

        match self.undefined_value {
            Some((tag_type, unit_count)) if tag_type != TagType::Undefined => {
                Ok((tag_type, unit_count))
            }
            _ => {
                debug!(
                    ifd_path = self.ifd_path,
                    tag_id = self.tag_id,
                    "undefined-value type not set"
                );
                Err(ValueError::UndefinedTypeNotConfigured {
                    ifd_path: self.ifd_path.to_string(),
                    tag_id: self.tag_id,
                })
            }
        }
    }

    /// Whether the value lives in the inline slot rather than at an offset.
    pub fn is_embedded(&self) -> Result<bool> {
        let (tag_type, unit_count) = self.effective_parameters()?;
        Ok(tag_type.fits_inline(unit_count))
    }

    // -------------------------------------------------------------------------
    // Extraction
    // -------------------------------------------------------------------------

    /// The raw, still-encoded bytes of the value.
    ///
    /// Exactly `size(type) * count` bytes of the effective parameters, taken
    /// from the inline slot or from the data region.
    ///
    /// # Errors
    /// - `UndefinedTypeNotConfigured` (see [`effective_parameters`](Self::effective_parameters))
    /// - `OutOfBounds` if the span does not fit its source
    pub fn read_raw(&self) -> Result<&'a [u8]> {
        let (tag_type, unit_count) = self.effective_parameters()?;
        let length = tag_type.byte_length(unit_count);

        if tag_type.fits_inline(unit_count) {
            trace!(
                ifd_path = self.ifd_path,
                tag_id = self.tag_id,
                length,
                "reading embedded value"
            );
            // Unreachable while `fits_inline` holds.
            return self
                .raw_value_offset
                .get(..length as usize)
                .ok_or_else(|| self.out_of_bounds(0, length, INLINE_SLOT_SIZE));
        }

        let start = self.value_offset as u64;
        let end = start + length;
        trace!(
            ifd_path = self.ifd_path,
            tag_id = self.tag_id,
            offset = start,
            length,
            "reading referenced value"
        );
        if end > self.addressable_data.len() as u64 {
            return Err(self.out_of_bounds(start, length, self.addressable_data.len()));
        }
        Ok(&self.addressable_data[start as usize..end as usize])
    }

    // -------------------------------------------------------------------------
    // Typed readers
    // -------------------------------------------------------------------------

    /// Read the value as raw bytes, borrowed from the slot or the region.
    pub fn read_bytes(&self) -> Result<&'a [u8]> {
        self.decode_with(decoder::parse_bytes)
    }

    /// Read NUL-terminated text. The terminator is stripped.
    pub fn read_ascii(&self) -> Result<String> {
        self.decode_with(decoder::parse_ascii)
    }

    /// Read text that has no terminator. Every byte is kept.
    pub fn read_ascii_no_nul(&self) -> Result<String> {
        self.decode_with(decoder::parse_ascii_no_nul)
    }

    /// Read unsigned 16-bit integers.
    pub fn read_shorts(&self) -> Result<Vec<u16>> {
        let byte_order = self.byte_order;
        self.decode_with(|raw, count| decoder::parse_u16_seq(raw, count, byte_order))
    }

    /// Read unsigned 32-bit integers.
    pub fn read_longs(&self) -> Result<Vec<u32>> {
        let byte_order = self.byte_order;
        self.decode_with(|raw, count| decoder::parse_u32_seq(raw, count, byte_order))
    }

    /// Read signed 32-bit integers.
    pub fn read_signed_longs(&self) -> Result<Vec<i32>> {
        let byte_order = self.byte_order;
        self.decode_with(|raw, count| decoder::parse_i32_seq(raw, count, byte_order))
    }

    /// Read numerator/denominator pairs of unsigned LONGs.
    pub fn read_rationals(&self) -> Result<Vec<Rational>> {
        let byte_order = self.byte_order;
        self.decode_with(|raw, count| decoder::parse_rational_seq(raw, count, byte_order))
    }

    /// Signed counterpart of [`read_rationals`](Self::read_rationals).
    pub fn read_signed_rationals(&self) -> Result<Vec<SignedRational>> {
        let byte_order = self.byte_order;
        self.decode_with(|raw, count| decoder::parse_signed_rational_seq(raw, count, byte_order))
    }

    // -------------------------------------------------------------------------
    // Dispatch and formatting
    // -------------------------------------------------------------------------

    /// Decode the value according to its declared type.
    ///
    /// UNDEFINED values are always rejected with `UnsupportedType`, even when
    /// an override was supplied; their layout is tag-specific and has to be
    /// decoded by the caller from [`read_raw`](Self::read_raw).
    pub fn values(&self) -> Result<TagValue<'a>> {
        match self.tag_type {
            TagType::Byte => self.read_bytes().map(TagValue::Bytes),
            TagType::Ascii => self.read_ascii().map(TagValue::Ascii),
            TagType::AsciiNoNul => self.read_ascii_no_nul().map(TagValue::AsciiNoNul),
            TagType::Short => self.read_shorts().map(TagValue::Shorts),
            TagType::Long => self.read_longs().map(TagValue::Longs),
            TagType::SignedLong => self.read_signed_longs().map(TagValue::SignedLongs),
            TagType::Rational => self.read_rationals().map(TagValue::Rationals),
            TagType::SignedRational => self.read_signed_rationals().map(TagValue::SignedRationals),
            TagType::Undefined => {
                debug!(
                    ifd_path = self.ifd_path,
                    tag_id = self.tag_id,
                    "will not dispatch undefined-type value"
                );
                Err(self.unsupported_type())
            }
        }
    }

    /// Render the whole value as a string.
    pub fn format(&self) -> Result<String> {
        self.format_with(false)
    }

    /// Render only the first element (empty string for an empty value).
    ///
    /// Bytes and text are never truncated.
    pub fn format_first(&self) -> Result<String> {
        self.format_with(true)
    }

    /// Render the value in the declared type via the formatter.
    ///
    /// UNDEFINED values fail with `UnsupportedType` once their bytes have been
    /// located.
    pub fn format_with(&self, first_only: bool) -> Result<String> {
        let raw = self.read_raw()?;
        formatter::format(raw, self.tag_type, first_only, self.byte_order).map_err(|err| {
            match err {
                DecodeError::UnformattableType(_) => self.unsupported_type(),
                source => self.decode_error(source),
            }
        })
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn decode_with<T>(
        &self,
        parse: impl FnOnce(&'a [u8], u32) -> std::result::Result<T, DecodeError>,
    ) -> Result<T> {
        let (_, unit_count) = self.effective_parameters()?;
        let raw = self.read_raw()?;
        parse(raw, unit_count).map_err(|source| self.decode_error(source))
    }

    fn out_of_bounds(&self, offset: u64, length: u64, available: usize) -> ValueError {
        debug!(
            ifd_path = self.ifd_path,
            tag_id = self.tag_id,
            offset,
            length,
            available,
            "value span out of bounds"
        );
        ValueError::OutOfBounds {
            ifd_path: self.ifd_path.to_string(),
            tag_id: self.tag_id,
            offset,
            length,
            available: available as u64,
        }
    }

    fn unsupported_type(&self) -> ValueError {
        ValueError::UnsupportedType {
            ifd_path: self.ifd_path.to_string(),
            tag_id: self.tag_id,
            type_id: self.tag_type.as_u16(),
        }
    }

    fn decode_error(&self, source: DecodeError) -> ValueError {
        debug!(
            ifd_path = self.ifd_path,
            tag_id = self.tag_id,
            error = %source,
            "value decoding failed"
        );
        ValueError::Decode {
            ifd_path: self.ifd_path.to_string(),
            tag_id: self.tag_id,
            source,
        }
    }
}

impl fmt::Debug for ValueContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueContext")
            .field("ifd_path", &self.ifd_path)
            .field("tag_id", &format_args!("0x{:04x}", self.tag_id))
            .field("tag_type", &self.tag_type)
            .field("unit_count", &self.unit_count)
            .field("value_offset", &self.value_offset)
            .field("raw_value_offset", &self.raw_value_offset)
            .field("addressable_len", &self.addressable_data.len())
            .field("byte_order", &self.byte_order)
            .field("undefined_value", &self.undefined_value)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
