//! Hex text ↔ byte sequence conversion for corpus fields.
//!
//! Decoding is case-insensitive, lossless and deterministic: two hex
//! characters map to exactly one byte, and `decode(encode(b)) == Ok(b)`
//! for every byte sequence `b`.

use data_encoding::{DecodeKind, HEXLOWER, HEXLOWER_PERMISSIVE};

use crate::error::DecodeError;

/// Decode a hex string into the byte sequence it encodes.
///
/// Accepts both uppercase and lowercase digits. The empty string decodes
/// to an empty byte sequence.
///
/// # Errors
///
/// Returns [`DecodeError::OddLength`] for inputs with an odd number of
/// characters and [`DecodeError::InvalidCharacter`] for any character
/// outside `[0-9a-fA-F]`.
pub fn decode(hex: &str) -> Result<Vec<u8>, DecodeError> {
    HEXLOWER_PERMISSIVE
        .decode(hex.as_bytes())
        .map_err(|e| match e.kind {
            DecodeKind::Length => DecodeError::OddLength { len: hex.len() },
            _ => DecodeError::InvalidCharacter { position: e.position },
        })
}

/// Encode a byte sequence as lowercase hex.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    HEXLOWER.encode(bytes)
}
