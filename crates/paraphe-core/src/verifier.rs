//! The Ed25519 verification capability.
//!
//! The harness never reimplements curve arithmetic: it feeds decoded bytes
//! to a [`SignatureVerifier`] and relays its boolean verdict. The production
//! implementation is [`RingVerifier`]; tests inject instrumented substitutes.

use ring::signature;

use crate::vector::{PUBLIC_KEY_LEN, SIGNATURE_LEN};

/// A standards-conformant Ed25519 verification primitive.
///
/// Implementations must be pure and deterministic: the verdict is a function
/// of the three inputs alone. Canonical-encoding rejection, scalar range
/// validation and cofactor handling are the primitive's responsibility —
/// callers pass edge cases (all-zero keys, non-canonical encodings) through
/// unmodified.
pub trait SignatureVerifier {
    /// Report whether `signature` is valid for `message` under `pub_key`.
    fn verify(
        &self,
        pub_key: &[u8; PUBLIC_KEY_LEN],
        message: &[u8],
        signature: &[u8; SIGNATURE_LEN],
    ) -> bool;
}

/// Ed25519 verification backed by `ring`.
///
/// `ring` uses the cofactorless verification equation and rejects
/// non-canonical point and scalar encodings (s ≥ L).
#[derive(Debug, Clone, Copy, Default)]
pub struct RingVerifier;

impl SignatureVerifier for RingVerifier {
    fn verify(
        &self,
        pub_key: &[u8; PUBLIC_KEY_LEN],
        message: &[u8],
        signature: &[u8; SIGNATURE_LEN],
    ) -> bool {
        let pk = signature::UnparsedPublicKey::new(&signature::ED25519, pub_key);
        pk.verify(message, signature).is_ok()
    }
}
