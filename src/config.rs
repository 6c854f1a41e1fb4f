//! Run configuration derived from the command line.
//!
//! There are no configuration files and no environment variables: every
//! setting comes from a CLI flag and is fixed for the whole run.

use crate::cli::Cli;
use crate::io::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub format: OutputFormat,
    pub show_title: bool,
    pub show_prompts: bool,
    pub verbosity: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_title: true,
            show_prompts: true,
            verbosity: 0,
        }
    }
}

impl RunConfig {
    // Pure function to build configuration from parsed arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            show_title: !cli.quiet,
            show_prompts: !cli.quiet,
            verbosity: cli.verbose,
        }
    }
}
