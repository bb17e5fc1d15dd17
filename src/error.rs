use thiserror::Error;

/// Alias for a `Result` with the error type [`ValueError`].
pub type Result<T> = std::result::Result<T, ValueError>;

/// Errors raised by the decoder and formatter services.
///
/// These know nothing about which tag the bytes came from; the value context
/// wraps them in [`ValueError::Decode`] together with the tag's identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer bytes were supplied than the unit count requires
    #[error("not enough data: need {needed} bytes, got {available}")]
    NotEnoughData { needed: usize, available: usize },

    /// NUL-terminated text did not end with a NUL byte
    #[error("ASCII value is not NUL-terminated")]
    MissingTerminator,

    /// Byte count is not a multiple of the unit size
    #[error("byte count {length} does not align with {type_name} unit size {unit_size}")]
    Misaligned {
        length: usize,
        type_name: &'static str,
        unit_size: usize,
    },

    /// The unit count does not fit the 32-bit count field
    #[error("{0} units exceed the 32-bit unit count")]
    TooManyUnits(usize),

    /// The type has no generic rendering (UNDEFINED)
    #[error("values of type {0} cannot be formatted")]
    UnformattableType(&'static str),
}

/// Errors that can occur when locating or reading a tag value.
///
/// Every variant is terminal for the tag being read, never for the rest of
/// the directory. `ifd_path` and `tag_id` are carried for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// An UNDEFINED-typed tag was read before its effective type was supplied
    #[error("{ifd_path} tag 0x{tag_id:04x}: undefined-value type not set")]
    UndefinedTypeNotConfigured { ifd_path: String, tag_id: u16 },

    /// The value span falls outside the inline slot or the addressable data
    #[error(
        "{ifd_path} tag 0x{tag_id:04x}: value span out of bounds: \
         {length} bytes at offset {offset}, {available} available"
    )]
    OutOfBounds {
        ifd_path: String,
        tag_id: u16,
        offset: u64,
        length: u64,
        available: u64,
    },

    /// The type cannot be handled here (UNDEFINED or an unknown type id)
    #[error("{ifd_path} tag 0x{tag_id:04x}: unsupported value type {type_id}")]
    UnsupportedType {
        ifd_path: String,
        tag_id: u16,
        type_id: u16,
    },

    /// The raw bytes were rejected by the decoder or formatter
    #[error("{ifd_path} tag 0x{tag_id:04x}: {source}")]
    Decode {
        ifd_path: String,
        tag_id: u16,
        #[source]
        source: DecodeError,
    },
}

impl ValueError {
    /// Numeric ID of the tag the error was raised for.
    pub fn tag_id(&self) -> u16 {
        match self {
            ValueError::UndefinedTypeNotConfigured { tag_id, .. }
            | ValueError::OutOfBounds { tag_id, .. }
            | ValueError::UnsupportedType { tag_id, .. }
            | ValueError::Decode { tag_id, .. } => *tag_id,
        }
    }

    /// Directory path of the tag the error was raised for.
    pub fn ifd_path(&self) -> &str {
        match self {
            ValueError::UndefinedTypeNotConfigured { ifd_path, .. }
            | ValueError::OutOfBounds { ifd_path, .. }
            | ValueError::UnsupportedType { ifd_path, .. }
            | ValueError::Decode { ifd_path, .. } => ifd_path,
        }
    }
}
