// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{is_zero, Equation, Outcome, OutcomeKind, EPS};

pub use crate::errors::{InputError, MalformedInput};

pub use crate::formatting::{format_general, format_root};

pub use crate::io::{present, CoefficientReader, OutputFormat, Report};

pub use crate::solver::{solve, Strategy};
