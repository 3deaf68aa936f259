//! `paraphe-runner` — corpus I/O and matrix rendering for PARAPHE.
//!
//! The thin shell around `paraphe-core`: loads the shared JSON vector
//! corpus, runs it through the `ring` verifier and renders the resulting
//! accept/reject sequence as one row of the cross-implementation
//! conformance matrix.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod corpus;
pub mod error;
pub mod report;

pub use corpus::{load_corpus, parse_corpus};
pub use error::RunnerError;
pub use report::{render_row, ACCEPT_MARKER, LABEL_WIDTH, REJECT_MARKER};
