mod cli;
mod config;
mod error;
mod input;
mod output;
mod search;

use crate::cli::{Cli, OutputFormatArg};
use crate::config::Config;
use crate::error::Result as PargrepResult;
use crate::input::MappedFile;
use crate::output::{write_matches, OutputConfig, OutputFormat};
use crate::search::{search, SearchJob};
use byte_unit::Byte;
use clap::Parser;
use colored::*;
use env_logger::{Builder, Env, Target};
use is_terminal::IsTerminal;
use log::{info, warn};
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

const EXIT_NO_MATCH: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = setup_logging(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        return ExitCode::from(EXIT_FAILURE);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: &Cli) -> PargrepResult<ExitCode> {
    let start_time = Instant::now();
    info!("searching {} for {:?}", cli.file.display(), cli.pattern);

    let file_config = Config::load().unwrap_or_else(|e| {
        warn!("{e}; using default configuration");
        Config::default()
    });

    let mapped = MappedFile::open(&cli.file)?;
    let job = SearchJob::new(mapped.bytes(), cli.pattern.as_bytes())?;

    let worker_hint = cli.threads.or(file_config.search.threads);
    let summary = search(&job, worker_hint)?;

    let format = match cli.format {
        OutputFormatArg::Text => OutputFormat::Text,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    let output_config = OutputConfig {
        format,
        highlight: format == OutputFormat::Text
            && !cli.no_color
            && file_config.display.highlight
            && std::io::stdout().is_terminal(),
        count_only: cli.count,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_matches(&mut out, &job, &summary, &output_config)?;

    for fault in &summary.faults {
        eprintln!("{} {fault}", "warning:".yellow().bold());
    }

    if cli.verbose || file_config.display.show_summary {
        let adjusted = Byte::from_u64(mapped.len() as u64)
            .get_appropriate_unit(byte_unit::UnitType::Binary);
        eprintln!(
            "searched {:.2} {} across {} partitions in {:.2?}: {} matching lines",
            adjusted.get_value(),
            adjusted.get_unit(),
            summary.partitions,
            start_time.elapsed(),
            summary.matches.len()
        );
    }
    info!(
        "search finished; total elapsed time: {:.2?}",
        start_time.elapsed()
    );

    if !summary.faults.is_empty() {
        return Ok(ExitCode::from(EXIT_FAILURE));
    }
    if summary.any_matched() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_NO_MATCH))
    }
}

fn setup_logging(cli: &Cli) -> PargrepResult<()> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                fs::create_dir_all(parent_dir).map_err(crate::error::PargrepError::Io)?;
            }
        }
        let log_file = fs::File::create(log_path).map_err(crate::error::PargrepError::Io)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| crate::error::PargrepError::Config(e.to_string()))?;
    Ok(())
}
