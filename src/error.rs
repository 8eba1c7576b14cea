use std::io;
use thiserror::Error;

/// Errors produced while identifying a byte-order mark
#[derive(Debug, Error)]
pub enum BomError {
    /// The bytes are not exactly one of the known BOM signatures
    #[error("not a valid encoding")]
    NotValidEncoding,

    /// A raw value outside the defined encoding set was coerced into `Encoding`
    #[error("encoding not valid: {0}")]
    InvalidEncoding(u8),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BomError>;
