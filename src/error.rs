//! Structured error types for oligokit

use thiserror::Error;

/// Unified error type for all oligokit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while talking to an external tool
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input (out-of-alphabet characters, bad arguments)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A residue with no entry in the scale being applied
    #[error("no scale entry for residue '{0}'")]
    UnknownResidue(char),

    /// An external tool exited unsuccessfully
    #[error("{tool} failed ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    /// An external tool produced a line that could not be parsed
    #[error("unparseable output from {tool}: {line:?}")]
    ToolOutput { tool: String, line: String },

    /// An external tool returned the wrong number of results for a batch
    #[error("{tool} returned {got} results for {expected} inputs")]
    BatchMismatch {
        tool: String,
        expected: usize,
        got: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
