//! I/O at the edges: coefficient input and report output.
//!
//! The solver itself never touches a stream; everything here is generic over
//! `BufRead` / `Write` so the whole interactive session can be driven from
//! in-memory buffers in tests.

pub mod output;
pub mod reader;

pub use output::{
    create_writer, present, JsonWriter, OutputFormat, OutputWriter, Report, TextWriter,
};
pub use reader::{prompt_equation, CoefficientReader, INCORRECT_INPUT, PROMPT};
