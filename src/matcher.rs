//! BOM matching
//!
//! Two flavours of lookup live here. [`match_bom`] is the exact form: the
//! input must equal a signature byte for byte, with no trimming. The prefix
//! form ([`detect_prefix`], [`BomMatcher`], [`strip_bom`]) looks for the
//! longest signature at the head of a larger buffer and uses an anchored
//! Aho-Corasick automaton for it.

use crate::byte_order::ByteOrder;
use crate::encoding::Encoding;
use crate::error::{BomError, Result};
use crate::signature::{BomSignature, MAX_BOM_LEN, SIGNATURES};
use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};
use serde::Serialize;
use std::io::{self, Read, Seek, SeekFrom};
use std::sync::LazyLock;

static DEFAULT_MATCHER: LazyLock<BomMatcher> = LazyLock::new(BomMatcher::new);

/// Result of a successful BOM lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BomMatch {
    pub encoding: Encoding,
    /// Set only for UTF-16 and UTF-32
    pub byte_order: Option<ByteOrder>,
}

impl From<&BomSignature> for BomMatch {
    fn from(signature: &BomSignature) -> Self {
        Self {
            encoding: signature.encoding(),
            byte_order: signature.byte_order(),
        }
    }
}

/// Matches `bytes` against the known BOM signatures.
///
/// The whole input must equal a signature; a buffer that merely starts with
/// one is rejected. Returns [`BomError::NotValidEncoding`] on a miss.
///
/// ```
/// use bomsig::{match_bom, ByteOrder, Encoding};
///
/// let found = match_bom(&[0xFE, 0xFF]).unwrap();
/// assert_eq!(found.encoding, Encoding::Utf16);
/// assert_eq!(found.byte_order, Some(ByteOrder::BigEndian));
///
/// assert!(match_bom(&[0xFE, 0xFF, 0x41]).is_err());
/// ```
pub fn match_bom(bytes: &[u8]) -> Result<BomMatch> {
    match SIGNATURES.iter().find(|sig| sig.bytes() == bytes) {
        Some(sig) => {
            tracing::trace!(encoding = %sig.encoding(), "matched byte-order mark");
            Ok(BomMatch::from(sig))
        }
        None => {
            tracing::trace!(len = bytes.len(), "no byte-order mark matched");
            Err(BomError::NotValidEncoding)
        }
    }
}

/// Finds the longest known signature at the start of `data`.
///
/// Returns the match together with the signature length, i.e. the number of
/// bytes to skip before the encoded text begins.
pub fn detect_prefix(data: &[u8]) -> Option<(BomMatch, usize)> {
    DEFAULT_MATCHER.detect_prefix(data)
}

/// Consumes a leading BOM from `reader`, if one is present.
///
/// Reads up to [`MAX_BOM_LEN`] bytes, however many `read` calls that takes,
/// then leaves the reader positioned just after the BOM. When no signature
/// prefixes the stream the reader is rewound to where it started.
pub fn strip_bom<R: Read + Seek + ?Sized>(reader: &mut R) -> Result<Option<BomMatch>> {
    let start = reader.stream_position()?;
    let mut head = [0u8; MAX_BOM_LEN];
    let mut filled = 0usize;

    while filled < head.len() {
        match reader.read(&mut head[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some((bom, len)) = detect_prefix(&head[..filled]) {
        reader.seek(SeekFrom::Start(start + len as u64))?;
        tracing::trace!(encoding = %bom.encoding, len, "stripped byte-order mark");
        return Ok(Some(bom));
    }

    reader.seek(SeekFrom::Start(start))?;
    Ok(None)
}

/// Signature matcher restricted to a set of encodings
#[derive(Debug)]
pub struct BomMatcher {
    enabled: Vec<Encoding>,
    signatures: Vec<&'static BomSignature>,
    pattern_matcher: Option<AhoCorasick>,
}

impl BomMatcher {
    /// Creates a matcher for every known encoding
    pub fn new() -> Self {
        Self::with_encodings(&Encoding::ALL)
    }

    /// Creates a matcher that only recognizes the given encodings
    pub fn with_encodings(encodings: &[Encoding]) -> Self {
        let mut enabled = Vec::with_capacity(encodings.len());
        for encoding in encodings {
            if !enabled.contains(encoding) {
                enabled.push(*encoding);
            }
        }

        let signatures: Vec<&'static BomSignature> = SIGNATURES
            .iter()
            .filter(|sig| enabled.contains(&sig.encoding()))
            .collect();

        let mut matcher = Self {
            enabled,
            signatures,
            pattern_matcher: None,
        };
        matcher.build_pattern_matcher();
        matcher
    }

    fn build_pattern_matcher(&mut self) {
        if self.signatures.is_empty() {
            return;
        }

        let built = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .start_kind(StartKind::Anchored)
            .build(self.signatures.iter().map(|sig| sig.bytes()));

        match built {
            Ok(automaton) => {
                tracing::debug!(
                    patterns = automaton.patterns_len(),
                    "built byte-order mark automaton"
                );
                self.pattern_matcher = Some(automaton);
            }
            Err(e) => {
                tracing::warn!("falling back to linear BOM search: {}", e);
            }
        }
    }

    /// Encodings this matcher recognizes, deduplicated, in the order given
    pub fn enabled_encodings(&self) -> &[Encoding] {
        &self.enabled
    }

    /// Returns the signatures this matcher recognizes
    pub fn signatures(&self) -> impl Iterator<Item = &'static BomSignature> + '_ {
        self.signatures.iter().copied()
    }

    /// Exact-equality lookup, limited to the enabled encodings
    pub fn match_exact(&self, bytes: &[u8]) -> Result<BomMatch> {
        self.signatures
            .iter()
            .find(|sig| sig.bytes() == bytes)
            .map(|sig| BomMatch::from(*sig))
            .ok_or(BomError::NotValidEncoding)
    }

    /// Longest enabled signature that prefixes `data`
    pub fn detect_prefix(&self, data: &[u8]) -> Option<(BomMatch, usize)> {
        let matcher = match &self.pattern_matcher {
            Some(m) => m,
            None => return self.detect_prefix_linear(data),
        };

        let input = Input::new(data).anchored(Anchored::Yes);
        let mat = matcher.try_find(input).ok().flatten()?;
        let sig = self.signatures.get(mat.pattern().as_usize())?;
        Some((BomMatch::from(*sig), mat.len()))
    }

    fn detect_prefix_linear(&self, data: &[u8]) -> Option<(BomMatch, usize)> {
        self.signatures
            .iter()
            .filter(|sig| data.starts_with(sig.bytes()))
            .max_by_key(|sig| sig.len())
            .map(|sig| (BomMatch::from(*sig), sig.len()))
    }
}

impl Default for BomMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{UTF16_BE_BOM, UTF32_LE_BOM, UTF7_BOM_5};

    #[test]
    fn linear_fallback_agrees_with_automaton() {
        let matcher = BomMatcher::new();
        let samples: [&[u8]; 5] = [
            &[0xFE, 0xFF, 0x00, 0x00, 0x41],
            &[0xFE, 0xFF, 0x00, 0x41],
            &[0x2B, 0x2F, 0x76, 0x38, 0x2D, 0x41],
            &[0xEF, 0xBB],
            &[],
        ];
        for data in samples {
            assert_eq!(matcher.detect_prefix(data), matcher.detect_prefix_linear(data));
        }
    }

    #[test]
    fn longest_prefix_wins() {
        let (bom, len) = detect_prefix(&[0xFE, 0xFF, 0x00, 0x00, 0x20]).unwrap();
        assert_eq!(bom.encoding, Encoding::Utf32);
        assert_eq!(len, UTF32_LE_BOM.len());

        let (bom, len) = detect_prefix(&[0x2B, 0x2F, 0x76, 0x38, 0x2D]).unwrap();
        assert_eq!(bom.encoding, Encoding::Utf7);
        assert_eq!(len, UTF7_BOM_5.len());
    }

    #[test]
    fn filtered_matcher_ignores_disabled_encodings() {
        let matcher = BomMatcher::with_encodings(&[Encoding::Utf16, Encoding::Utf16]);
        assert_eq!(matcher.enabled_encodings(), &[Encoding::Utf16]);
        assert_eq!(matcher.signatures().count(), 2);

        // UTF-32 LE is disabled, so the shorter UTF-16 BE prefix is reported
        let (bom, len) = matcher.detect_prefix(&[0xFE, 0xFF, 0x00, 0x00]).unwrap();
        assert_eq!(bom.encoding, Encoding::Utf16);
        assert_eq!(len, UTF16_BE_BOM.len());

        assert!(matcher.match_exact(&[0xEF, 0xBB, 0xBF]).is_err());
    }

    #[test]
    fn empty_matcher_matches_nothing() {
        let matcher = BomMatcher::with_encodings(&[]);
        assert!(matcher.detect_prefix(&[0xEF, 0xBB, 0xBF]).is_none());
        assert!(matcher.match_exact(&[0xEF, 0xBB, 0xBF]).is_err());
    }
}
