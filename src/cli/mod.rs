//! CLI support for jsonmatch
//!
//! Provides programmatic access to the `jsonmatch` command so other test
//! harnesses can run the same assertions without spawning a process.

mod check;
mod docs;

pub use check::{Assertion, CheckOptions, CheckOutput, execute_check};
pub use docs::get_syntax_doc;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// The assertion or query failed
    #[error("{0}")]
    Match(#[from] crate::Error),

    /// Output serialization failed
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input, set JSONMATCH_INPUT or pipe JSON to stdin.")]
    NoInput,
}
