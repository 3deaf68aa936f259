//! JSON corpus loading.
//!
//! The shared corpus is a JSON array of records with three hex fields
//! (`message`, `pub_key`/`publicKey`, `signature`), produced once by the
//! corpus-authoring tooling and consumed byte-for-byte by every
//! implementation in the conformance matrix.

use std::fs;
use std::path::Path;

use paraphe_core::VectorRecord;

use crate::error::RunnerError;

/// Read and parse a JSON corpus file.
///
/// # Errors
///
/// Returns [`RunnerError::Io`] if the file cannot be read and
/// [`RunnerError::Json`] if it is not a JSON array of vector records.
pub fn load_corpus(path: &Path) -> Result<Vec<VectorRecord>, RunnerError> {
    let text = fs::read_to_string(path).map_err(|source| RunnerError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_corpus(&text)
}

/// Parse corpus JSON into vector records.
///
/// # Errors
///
/// Returns [`RunnerError::Json`] if the text is not a JSON array of
/// vector records.
pub fn parse_corpus(json: &str) -> Result<Vec<VectorRecord>, RunnerError> {
    Ok(serde_json::from_str(json)?)
}
