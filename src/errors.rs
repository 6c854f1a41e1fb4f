//! Error types for reading coefficients.
//!
//! Only two conditions reach the user: a malformed line, which the reader
//! recovers from by prompting again, and an exhausted input stream, which
//! ends the program with a non-zero status.

use std::io;
use thiserror::Error;

/// Why a single token could not be used as a coefficient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

/// Failure to obtain an equation from the input stream.
#[derive(Debug, Error)]
pub enum InputError {
    /// Recoverable: the current line is discarded and the user is re-prompted.
    #[error("incorrect input")]
    Malformed(#[from] MalformedInput),

    /// End of stream before three coefficients were read.
    #[error("no input")]
    Exhausted,

    /// The underlying stream failed while reading.
    #[error("failed to read input")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Whether the reader should prompt again instead of giving up.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const INPUT_EXHAUSTED: u8 = 1;
    pub const FAILURE: u8 = 2;
}

/// Map a fatal error to the status the process should exit with.
pub fn exit_code_for(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<InputError>() {
        Some(InputError::Exhausted) => exit_code::INPUT_EXHAUSTED,
        _ => exit_code::FAILURE,
    }
}
