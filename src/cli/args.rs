use crate::io::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "square-solver")]
#[command(about = "Solve a·x² + b·x + c = 0 for real x", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format for the result
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print the title line or the coefficient prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
