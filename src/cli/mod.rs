//! CLI module for square-solver
//!
//! - Argument parsing (`args`)
//! - Runtime setup: logging and panic reporting (`setup`)

pub mod args;
pub mod setup;

pub use args::Cli;
pub use setup::{init_logging, log_filter};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
