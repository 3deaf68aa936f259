//! PARAPHE conformance runner.
//!
//! Loads the shared JSON vector corpus, verifies every vector with the
//! `ring` Ed25519 primitive and prints one conformance matrix row. A
//! rejected vector is a legitimate result and does not fail the run;
//! a malformed corpus aborts with the offending vector's index.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use paraphe_core::{run_records, RingVerifier};
use paraphe_runner::{load_corpus, render_row, RunnerError};

/// Check an Ed25519 conformance corpus and print one matrix row.
#[derive(Debug, Parser)]
#[command(name = "paraphe", version, about)]
struct Cli {
    /// Path to the JSON corpus of conformance vectors.
    #[arg(default_value = "cases.json")]
    corpus: PathBuf,

    /// Implementation label for the matrix row.
    #[arg(long, default_value = "ring")]
    label: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match check(&cli) {
        Ok(row) => {
            println!("{row}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn check(cli: &Cli) -> Result<String, RunnerError> {
    let records = load_corpus(&cli.corpus)?;
    tracing::info!(vectors = records.len(), corpus = %cli.corpus.display(), "corpus loaded");

    let outcomes = run_records(&RingVerifier, &records)?;
    Ok(render_row(&cli.label, &outcomes))
}
