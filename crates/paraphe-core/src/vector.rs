//! Conformance vector data model: on-disk hex records and their decoded form.

use serde::Deserialize;

use crate::encoding;
use crate::error::{DecodeError, VectorDecodeError};

/// Ed25519 public key length in bytes (256 bits).
pub const PUBLIC_KEY_LEN: usize = 32;

/// Ed25519 signature length in bytes (512 bits).
pub const SIGNATURE_LEN: usize = 64;

/// One corpus record as it appears on disk: three hex-encoded fields.
///
/// The field names follow the shared corpus schema (`cases.json`);
/// `publicKey` and `pubKey` are accepted as aliases so corpora emitted
/// by other-language tooling parse unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VectorRecord {
    /// Hex-encoded signed payload (may be empty).
    pub message: String,
    /// Hex-encoded 32-byte verification key of the claimed signer.
    #[serde(alias = "publicKey", alias = "pubKey")]
    pub pub_key: String,
    /// Hex-encoded 64-byte signature under test.
    pub signature: String,
}

/// A fully decoded conformance case. Immutable once constructed.
///
/// No cryptographic judgement happens at this level: an all-zero key or a
/// non-canonical point encoding decodes fine and is left for the
/// verification primitive to accept or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestVector {
    /// Signed payload, arbitrary length.
    pub message: Vec<u8>,
    /// Claimed signer's verification key.
    pub pub_key: [u8; PUBLIC_KEY_LEN],
    /// Signature under test.
    pub signature: [u8; SIGNATURE_LEN],
}

impl TestVector {
    /// Decode a corpus record's three hex fields into raw bytes.
    ///
    /// Decoding is case-insensitive and lossless (two hex characters per
    /// byte). The public key and signature must decode to exactly
    /// [`PUBLIC_KEY_LEN`] and [`SIGNATURE_LEN`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`VectorDecodeError`] naming the offending field on
    /// malformed hex or a wrong field width.
    pub fn from_record(record: &VectorRecord) -> Result<Self, VectorDecodeError> {
        let message = decode_field("message", &record.message)?;
        let pub_key = decode_fixed::<PUBLIC_KEY_LEN>("pub_key", &record.pub_key)?;
        let signature = decode_fixed::<SIGNATURE_LEN>("signature", &record.signature)?;
        Ok(Self {
            message,
            pub_key,
            signature,
        })
    }
}

/// Decode a variable-length hex field, attributing failures to `field`.
fn decode_field(field: &'static str, hex: &str) -> Result<Vec<u8>, VectorDecodeError> {
    encoding::decode(hex).map_err(|source| VectorDecodeError { field, source })
}

/// Decode a fixed-width hex field, attributing failures to `field`.
fn decode_fixed<const N: usize>(
    field: &'static str,
    hex: &str,
) -> Result<[u8; N], VectorDecodeError> {
    let bytes = decode_field(field, hex)?;
    let got = bytes.len();
    <[u8; N]>::try_from(bytes).map_err(|_| VectorDecodeError {
        field,
        source: DecodeError::Length { expected: N, got },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(message: &str, pub_key: &str, signature: &str) -> VectorRecord {
        VectorRecord {
            message: message.to_string(),
            pub_key: pub_key.to_string(),
            signature: signature.to_string(),
        }
    }

    #[test]
    fn from_record_decodes_all_fields() {
        let rec = record("af82", &"00".repeat(32), &"11".repeat(64));
        let tv = TestVector::from_record(&rec).unwrap();
        assert_eq!(tv.message, vec![0xAF, 0x82]);
        assert_eq!(tv.pub_key, [0u8; PUBLIC_KEY_LEN]);
        assert_eq!(tv.signature, [0x11u8; SIGNATURE_LEN]);
    }

    #[test]
    fn from_record_accepts_empty_message() {
        let rec = record("", &"00".repeat(32), &"00".repeat(64));
        let tv = TestVector::from_record(&rec).unwrap();
        assert!(tv.message.is_empty());
    }

    #[test]
    fn from_record_attributes_bad_hex_to_its_field() {
        let rec = record("af82", &"zz".repeat(16), &"00".repeat(64));
        let err = TestVector::from_record(&rec).unwrap_err();
        assert_eq!(err.field, "pub_key");
        assert_eq!(err.source, DecodeError::InvalidCharacter { position: 0 });
    }

    #[test]
    fn from_record_rejects_wrong_public_key_width() {
        let rec = record("", &"00".repeat(31), &"00".repeat(64));
        let err = TestVector::from_record(&rec).unwrap_err();
        assert_eq!(err.field, "pub_key");
        assert_eq!(
            err.source,
            DecodeError::Length {
                expected: PUBLIC_KEY_LEN,
                got: 31
            }
        );
    }

    #[test]
    fn from_record_rejects_wrong_signature_width() {
        let rec = record("", &"00".repeat(32), &"00".repeat(65));
        let err = TestVector::from_record(&rec).unwrap_err();
        assert_eq!(err.field, "signature");
        assert_eq!(
            err.source,
            DecodeError::Length {
                expected: SIGNATURE_LEN,
                got: 65
            }
        );
    }

    #[test]
    fn from_record_rejects_odd_length_message() {
        let rec = record("abc", &"00".repeat(32), &"00".repeat(64));
        let err = TestVector::from_record(&rec).unwrap_err();
        assert_eq!(err.field, "message");
        assert_eq!(err.source, DecodeError::OddLength { len: 3 });
    }

    #[test]
    fn record_deserializes_snake_case_schema() {
        let json = format!(
            r#"{{"message": "af82", "pub_key": "{}", "signature": "{}"}}"#,
            "00".repeat(32),
            "00".repeat(64)
        );
        let rec: VectorRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec.message, "af82");
    }

    #[test]
    fn record_accepts_camel_case_aliases() {
        for key in ["publicKey", "pubKey"] {
            let json = format!(
                r#"{{"message": "", "{key}": "{}", "signature": "{}"}}"#,
                "aa".repeat(32),
                "bb".repeat(64)
            );
            let rec: VectorRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(rec.pub_key, "aa".repeat(32));
        }
    }
}
