//! `paraphe-core` — Ed25519 conformance checking primitives for PARAPHE.
//!
//! Decodes hex-encoded (message, public key, signature) corpus vectors and
//! drives them through an injected Ed25519 verification capability, yielding
//! one accept/reject outcome per vector in corpus order.
//!
//! This crate is the audit target: zero network, zero async, zero file I/O.
//! Corpus loading and matrix rendering live in `paraphe-runner`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod encoding;
pub mod error;
pub mod harness;
pub mod vector;
pub mod verifier;

pub use error::{DecodeError, HarnessError, VectorDecodeError};
pub use harness::{decode_records, run, run_records, Outcome};
pub use vector::{TestVector, VectorRecord, PUBLIC_KEY_LEN, SIGNATURE_LEN};
pub use verifier::{RingVerifier, SignatureVerifier};
