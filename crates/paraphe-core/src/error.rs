//! Error types for `paraphe-core`.
//!
//! A decode failure is a corpus defect, never a verification result. It is
//! kept structurally disjoint from [`crate::Outcome::Reject`] so a malformed
//! vector can never masquerade as an invalid signature.

use thiserror::Error;

/// Errors produced when decoding hex text into raw bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Hex text with an odd number of characters cannot encode whole bytes.
    #[error("odd-length hex input: {len} characters")]
    OddLength {
        /// Character count of the offending input.
        len: usize,
    },

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex character at offset {position}")]
    InvalidCharacter {
        /// Byte offset of the first invalid character.
        position: usize,
    },

    /// Decoded bytes have the wrong width for a fixed-size field
    /// (public key = 32 bytes, signature = 64 bytes).
    #[error("decoded length is {got} bytes (expected {expected})")]
    Length {
        /// Required byte width.
        expected: usize,
        /// Actual decoded byte width.
        got: usize,
    },
}

/// A decode failure attributed to one field of a test vector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("field `{field}`: {source}")]
pub struct VectorDecodeError {
    /// Corpus field name (`message`, `pub_key` or `signature`).
    pub field: &'static str,
    /// The underlying hex decode failure.
    #[source]
    pub source: DecodeError,
}

/// Errors produced while driving a vector corpus through verification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// A corpus record failed to decode. The run is aborted with the
    /// zero-based position of the offending record; the failure is never
    /// mapped to a rejection outcome.
    #[error("vector #{index}: {source}")]
    MalformedVector {
        /// Zero-based position of the record in the corpus.
        index: usize,
        /// The field-level decode failure.
        #[source]
        source: VectorDecodeError,
    },
}
