//! CLI argument parsing for sonarsweep

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::ParseMode;

#[derive(Parser, Debug)]
#[command(name = "sonar")]
#[command(author, version, about = "Count depth increases in a sonar sweep", long_about = None)]
pub struct Cli {
    /// Input file, one reading per line (default: config input_path)
    pub input: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print only one metric (1 = raw increases, 2 = windowed increases)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Window width for the second metric (default: 3)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub window: Option<u64>,

    /// Fail on a line that is not an integer instead of reading it as 0
    #[arg(long, conflicts_with = "lenient")]
    pub strict: bool,

    /// Read lines that are not integers as 0, even if the config sets strict
    #[arg(long)]
    pub lenient: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse mode forced on the command line, if any
    pub fn parse_mode(&self) -> Option<ParseMode> {
        if self.strict {
            Some(ParseMode::Strict)
        } else if self.lenient {
            Some(ParseMode::Lenient)
        } else {
            None
        }
    }
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One bare integer per line
    #[default]
    Text,
    /// A single JSON object
    Json,
}
