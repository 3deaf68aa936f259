//! Runner error types for `paraphe-runner`.

use paraphe_core::HarnessError;
use thiserror::Error;

/// Errors produced while loading or running a conformance corpus.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Corpus file could not be read.
    #[error("cannot read corpus file `{path}`: {source}")]
    Io {
        /// Path of the corpus file.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Corpus file is not a valid JSON array of vector records.
    #[error("corpus is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A corpus record failed to decode (delegated from the core harness).
    #[error(transparent)]
    Harness(#[from] HarnessError),
}
