use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Literal pattern to search for
    pub pattern: String,

    /// File to search
    pub file: PathBuf,

    /// Number of workers (defaults to the number of CPUs)
    #[clap(short, long, value_parser)]
    pub threads: Option<usize>,

    /// Output format
    #[clap(long, value_parser, default_value_t = OutputFormatArg::Text)]
    pub format: OutputFormatArg,

    /// Print only the number of matching lines
    #[clap(short, long, value_parser, default_value_t = false)]
    pub count: bool,

    /// Disable match highlighting
    #[clap(long, value_parser, default_value_t = false)]
    pub no_color: bool,

    #[clap(long, value_parser, default_value_t = false)]
    pub verbose: bool,

    /// Write the log to a file instead of stderr
    #[clap(long, value_parser)]
    pub log: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormatArg::Text => write!(f, "text"),
            OutputFormatArg::Json => write!(f, "json"),
        }
    }
}
