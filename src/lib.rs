//! Byte-order-mark signature matching.
//!
//! Identifies a text encoding (and, for UTF-16/UTF-32, its byte order) from
//! the BOM bytes at the head of a stream. Nothing here decodes text.

pub mod byte_order;
pub mod encoding;
mod error;
pub mod matcher;
pub mod signature;

pub use byte_order::ByteOrder;
pub use encoding::Encoding;
pub use error::{BomError, Result};
pub use matcher::{BomMatch, BomMatcher, detect_prefix, match_bom, strip_bom};
pub use signature::{BomSignature, MAX_BOM_LEN, SIGNATURES};
