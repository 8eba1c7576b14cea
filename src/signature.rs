//! Byte-order-mark signatures
//!
//! The fixed table mapping exact BOM byte sequences to the encoding (and,
//! for UTF-16/UTF-32, the byte order) they announce. The raw sequences are
//! public so callers can peek the head of a larger stream themselves.

use crate::byte_order::ByteOrder;
use crate::encoding::Encoding;

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
pub const UTF32_LE_BOM: [u8; 4] = [0xFE, 0xFF, 0x00, 0x00];
pub const UTF7_BOM_1: [u8; 4] = [0x2B, 0x2F, 0x76, 0x38];
pub const UTF7_BOM_2: [u8; 4] = [0x2B, 0x2F, 0x76, 0x39];
pub const UTF7_BOM_3: [u8; 4] = [0x2B, 0x2F, 0x76, 0x2B];
pub const UTF7_BOM_4: [u8; 4] = [0x2B, 0x2F, 0x76, 0x2F];
pub const UTF7_BOM_5: [u8; 5] = [0x2B, 0x2F, 0x76, 0x38, 0x2D];
pub const UTF1_BOM: [u8; 3] = [0xF7, 0x64, 0x4C];
pub const UTF_EBCDIC_BOM: [u8; 4] = [0xDD, 0x73, 0x66, 0x73];
pub const SCSU_BOM: [u8; 3] = [0x0E, 0xFE, 0xFF];
pub const BOCU1_BOM: [u8; 3] = [0xFB, 0xEE, 0x28];
pub const GB18030_BOM: [u8; 4] = [0x84, 0x31, 0x95, 0x33];

/// Length of the longest known signature
pub const MAX_BOM_LEN: usize = 5;

/// One row of the signature table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BomSignature {
    bytes: &'static [u8],
    encoding: Encoding,
    byte_order: Option<ByteOrder>,
}

impl BomSignature {
    const fn new(bytes: &'static [u8], encoding: Encoding, byte_order: Option<ByteOrder>) -> Self {
        Self {
            bytes,
            encoding,
            byte_order,
        }
    }

    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Present only for UTF-16 and UTF-32
    pub fn byte_order(&self) -> Option<ByteOrder> {
        self.byte_order
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// All known signatures, byte-order-bearing entries first
pub static SIGNATURES: [BomSignature; 15] = [
    BomSignature::new(&UTF16_BE_BOM, Encoding::Utf16, Some(ByteOrder::BigEndian)),
    BomSignature::new(&UTF16_LE_BOM, Encoding::Utf16, Some(ByteOrder::LittleEndian)),
    BomSignature::new(&UTF32_BE_BOM, Encoding::Utf32, Some(ByteOrder::BigEndian)),
    BomSignature::new(&UTF32_LE_BOM, Encoding::Utf32, Some(ByteOrder::LittleEndian)),
    BomSignature::new(&UTF8_BOM, Encoding::Utf8, None),
    BomSignature::new(&UTF7_BOM_1, Encoding::Utf7, None),
    BomSignature::new(&UTF7_BOM_2, Encoding::Utf7, None),
    BomSignature::new(&UTF7_BOM_3, Encoding::Utf7, None),
    BomSignature::new(&UTF7_BOM_4, Encoding::Utf7, None),
    BomSignature::new(&UTF7_BOM_5, Encoding::Utf7, None),
    BomSignature::new(&UTF1_BOM, Encoding::Utf1, None),
    BomSignature::new(&UTF_EBCDIC_BOM, Encoding::UtfEbcdic, None),
    BomSignature::new(&SCSU_BOM, Encoding::Scsu, None),
    BomSignature::new(&BOCU1_BOM, Encoding::Bocu1, None),
    BomSignature::new(&GB18030_BOM, Encoding::Gb18030, None),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signatures_are_unique() {
        for (i, a) in SIGNATURES.iter().enumerate() {
            for b in &SIGNATURES[i + 1..] {
                assert_ne!(a.bytes(), b.bytes());
            }
        }
    }

    #[test]
    fn byte_order_only_on_utf16_and_utf32() {
        for sig in &SIGNATURES {
            assert_eq!(sig.byte_order().is_some(), sig.encoding().has_byte_order());
        }
    }

    #[test]
    fn max_len_covers_table() {
        let longest = SIGNATURES.iter().map(BomSignature::len).max();
        assert_eq!(longest, Some(MAX_BOM_LEN));
        assert!(SIGNATURES.iter().all(|sig| !sig.is_empty()));
    }
}
