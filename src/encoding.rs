//! Encoding identifiers
//!
//! The closed set of text encodings that carry a standardized byte-order
//! mark. Discriminants start at 1 so that a zeroed raw value never names a
//! real encoding.

use crate::error::BomError;
use serde::Serialize;
use std::fmt;

/// Text encoding identified by a byte-order mark
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Encoding {
    /// UTF-8
    #[serde(rename = "UTF-8")]
    Utf8 = 1,
    /// UTF-16, either byte order
    #[serde(rename = "UTF-16")]
    Utf16 = 2,
    /// UTF-32, either byte order
    #[serde(rename = "UTF-32")]
    Utf32 = 3,
    /// UTF-7
    #[serde(rename = "UTF-7")]
    Utf7 = 4,
    /// UTF-1
    #[serde(rename = "UTF-1")]
    Utf1 = 5,
    /// UTF-EBCDIC
    #[serde(rename = "UTF-EBCDIC")]
    UtfEbcdic = 6,
    /// Standard Compression Scheme for Unicode
    #[serde(rename = "SCSU")]
    Scsu = 7,
    /// Binary Ordered Compression for Unicode
    #[serde(rename = "BOCU-1")]
    Bocu1 = 8,
    /// GB 18030 Chinese national standard
    #[serde(rename = "GB-18030")]
    Gb18030 = 9,
}

impl Encoding {
    /// Every encoding, in declaration order
    pub const ALL: [Encoding; 9] = [
        Encoding::Utf8,
        Encoding::Utf16,
        Encoding::Utf32,
        Encoding::Utf7,
        Encoding::Utf1,
        Encoding::UtfEbcdic,
        Encoding::Scsu,
        Encoding::Bocu1,
        Encoding::Gb18030,
    ];

    /// Returns the canonical display label, e.g. `"GB-18030"`
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16 => "UTF-16",
            Encoding::Utf32 => "UTF-32",
            Encoding::Utf7 => "UTF-7",
            Encoding::Utf1 => "UTF-1",
            Encoding::UtfEbcdic => "UTF-EBCDIC",
            Encoding::Scsu => "SCSU",
            Encoding::Bocu1 => "BOCU-1",
            Encoding::Gb18030 => "GB-18030",
        }
    }

    /// Returns true if the BOM of this encoding also encodes a byte order
    pub fn has_byte_order(&self) -> bool {
        matches!(self, Encoding::Utf16 | Encoding::Utf32)
    }

    /// Returns the raw discriminant, never 0
    pub fn as_raw(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u8> for Encoding {
    type Error = BomError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(Encoding::Utf8),
            2 => Ok(Encoding::Utf16),
            3 => Ok(Encoding::Utf32),
            4 => Ok(Encoding::Utf7),
            5 => Ok(Encoding::Utf1),
            6 => Ok(Encoding::UtfEbcdic),
            7 => Ok(Encoding::Scsu),
            8 => Ok(Encoding::Bocu1),
            9 => Ok(Encoding::Gb18030),
            _ => Err(BomError::InvalidEncoding(raw)),
        }
    }
}
