use crate::core::{Equation, Outcome, OutcomeKind};
use crate::formatting::format_root;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Human-readable description of an outcome.
pub fn present(outcome: &Outcome) -> String {
    match *outcome {
        Outcome::NoRoots => "No roots".to_string(),
        Outcome::OneRoot(x) => format!("One root: {}", format_root(x)),
        Outcome::TwoRoots(x1, x2) => format!("Roots: {}, {}", format_root(x1), format_root(x2)),
        Outcome::AllReals => "Any number is root".to_string(),
    }
}

/// Serializable view of a solved equation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub equation: Equation,
    pub kind: OutcomeKind,
    pub roots: Vec<f64>,
    pub message: String,
}

impl Report {
    pub fn new(equation: Equation, outcome: &Outcome) -> Self {
        Self {
            equation,
            kind: outcome.kind(),
            roots: outcome.roots(),
            message: present(outcome),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", report.message)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
