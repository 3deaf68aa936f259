//! Drives a vector corpus through a verification capability.
//!
//! Each vector is an independent, stateless check: the harness decodes,
//! verifies and collects — in corpus order, with no retries, no caching
//! and no cross-vector state.

use crate::error::HarnessError;
use crate::vector::{TestVector, VectorRecord};
use crate::verifier::SignatureVerifier;

/// The verdict for a single vector.
///
/// A rejection is a legitimate, expected outcome — not an error. Malformed
/// corpus input is reported as [`HarnessError`] instead and never mapped
/// onto this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The primitive reports the signature valid for the key and message.
    Accept,
    /// The primitive reports the signature invalid.
    Reject,
}

impl Outcome {
    /// Map the primitive's boolean verdict to an outcome.
    #[must_use]
    pub const fn from_valid(valid: bool) -> Self {
        if valid {
            Self::Accept
        } else {
            Self::Reject
        }
    }

    /// `true` for [`Outcome::Accept`].
    #[must_use]
    pub const fn is_accept(self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Verify a sequence of decoded vectors, in order.
///
/// Returns exactly one outcome per vector; outcome `i` is the verdict for
/// vector `i`. Repeated runs over the same vectors yield identical results
/// for any conformant (pure, deterministic) verifier.
pub fn run<V: SignatureVerifier>(verifier: &V, vectors: &[TestVector]) -> Vec<Outcome> {
    vectors
        .iter()
        .map(|v| Outcome::from_valid(verifier.verify(&v.pub_key, &v.message, &v.signature)))
        .collect()
}

/// Decode every corpus record, attributing failures to their position.
///
/// # Errors
///
/// Returns [`HarnessError::MalformedVector`] for the first record whose hex
/// fields fail to decode, carrying its zero-based corpus index.
pub fn decode_records(records: &[VectorRecord]) -> Result<Vec<TestVector>, HarnessError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            TestVector::from_record(record)
                .map_err(|source| HarnessError::MalformedVector { index, source })
        })
        .collect()
}

/// Decode then verify a sequence of corpus records, in order.
///
/// The whole run aborts on the first malformed record: a corpus defect is
/// reported with its index, never silently coerced into a rejection.
///
/// # Errors
///
/// Returns [`HarnessError::MalformedVector`] if any record fails to decode.
pub fn run_records<V: SignatureVerifier>(
    verifier: &V,
    records: &[VectorRecord],
) -> Result<Vec<Outcome>, HarnessError> {
    let vectors = decode_records(records)?;
    Ok(run(verifier, &vectors))
}
