//! Decoded tag values.

use std::fmt;

use serde::Serialize;

use super::tags::TagType;

/// Unsigned fraction stored as two u32 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    /// Create a rational. A zero denominator is allowed.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The fraction as a float, or `None` when the denominator is zero.
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.numerator as f64 / self.denominator as f64)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Signed fraction stored as two i32 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SignedRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SignedRational {
    /// Create a signed rational.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The fraction as a float, or `None` when the denominator is zero.
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.numerator as f64 / self.denominator as f64)
    }
}

impl fmt::Display for SignedRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A fully decoded tag value, tagged with the type it was decoded as.
///
/// Every variant except the two text variants is a sequence, even when the
/// tag holds a single unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TagValue<'a> {
    Bytes(&'a [u8]),
    Ascii(String),
    AsciiNoNul(String),
    Shorts(Vec<u16>),
    Longs(Vec<u32>),
    SignedLongs(Vec<i32>),
    Rationals(Vec<Rational>),
    SignedRationals(Vec<SignedRational>),
}

impl TagValue<'_> {
    /// The type this value was decoded as.
    pub fn tag_type(&self) -> TagType {
        match self {
            TagValue::Bytes(_) => TagType::Byte,
            TagValue::Ascii(_) => TagType::Ascii,
            TagValue::AsciiNoNul(_) => TagType::AsciiNoNul,
            TagValue::Shorts(_) => TagType::Short,
            TagValue::Longs(_) => TagType::Long,
            TagValue::SignedLongs(_) => TagType::SignedLong,
            TagValue::Rationals(_) => TagType::Rational,
            TagValue::SignedRationals(_) => TagType::SignedRational,
        }
    }

    /// Number of decoded units. Text counts characters.
    pub fn len(&self) -> usize {
        match self {
            TagValue::Bytes(v) => v.len(),
            TagValue::Ascii(s) | TagValue::AsciiNoNul(s) => s.chars().count(),
            TagValue::Shorts(v) => v.len(),
            TagValue::Longs(v) => v.len(),
            TagValue::SignedLongs(v) => v.len(),
            TagValue::Rationals(v) => v.len(),
            TagValue::SignedRationals(v) => v.len(),
        }
    }

    /// Whether there are no decoded units.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
