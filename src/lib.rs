pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod search;

pub use cli::{Cli, OutputFormatArg};
pub use config::Config;
pub use error::{PargrepError, Result};
pub use input::MappedFile;
pub use output::{write_matches, OutputConfig, OutputFormat};
pub use search::{search, MatchLine, Partition, SearchJob, SearchSummary};
