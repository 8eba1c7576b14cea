use serde::Serialize;
use std::fmt;

/// Serialization order of multi-byte code units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ByteOrder {
    /// Most significant byte first
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl ByteOrder {
    /// Returns a human-readable name for this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::BigEndian => "BigEndian",
            ByteOrder::LittleEndian => "LittleEndian",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
