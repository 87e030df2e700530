//! Rendering matched lines
//!
//! The core hands over byte ranges; everything about presentation — color,
//! format, counting — is decided here, driven by an explicit [`OutputConfig`]
//! rather than module-level constants.
use colored::Colorize;
use is_terminal::IsTerminal;
use serde_json::json;
use std::io::Write;

use crate::error::Result;
use crate::search::{kmp, SearchJob, SearchSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Presentation settings, passed in by the caller.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Highlight the first pattern occurrence within each matched line.
    pub highlight: bool,
    /// Print only the number of matching lines.
    pub count_only: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            highlight: std::io::stdout().is_terminal(),
            count_only: false,
        }
    }
}

/// Write every matched line to `out` in the summary's (already
/// deterministic) order.
pub fn write_matches(
    out: &mut impl Write,
    job: &SearchJob<'_>,
    summary: &SearchSummary,
    config: &OutputConfig,
) -> Result<()> {
    if config.count_only {
        writeln!(out, "{}", summary.matches.len())?;
        return Ok(());
    }

    match config.format {
        OutputFormat::Text => write_text(out, job, summary, config.highlight),
        OutputFormat::Json => write_json(out, job, summary),
    }
}

fn write_text(
    out: &mut impl Write,
    job: &SearchJob<'_>,
    summary: &SearchSummary,
    highlight: bool,
) -> Result<()> {
    for line in &summary.matches {
        let bytes = &job.buffer[line.start..line.end];
        if highlight {
            // the matcher is a pure query; re-run it to recover the span
            if let Some(at) = kmp::find_first(bytes, job.pattern, &job.failure_table) {
                let matched = &bytes[at..at + job.pattern.len()];
                out.write_all(&bytes[..at])?;
                write!(out, "{}", String::from_utf8_lossy(matched).red().bold())?;
                out.write_all(&bytes[at + job.pattern.len()..])?;
                writeln!(out)?;
                continue;
            }
        }
        out.write_all(bytes)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, job: &SearchJob<'_>, summary: &SearchSummary) -> Result<()> {
    let matches: Vec<_> = summary
        .matches
        .iter()
        .map(|m| {
            json!({
                "start_offset": m.start,
                "end_offset": m.end,
                "line": String::from_utf8_lossy(&job.buffer[m.start..m.end]),
            })
        })
        .collect();

    let document = json!({
        "pattern": String::from_utf8_lossy(job.pattern),
        "total_matches": summary.matches.len(),
        "matches": matches,
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search;

    fn run(buffer: &[u8], pattern: &[u8], config: &OutputConfig) -> String {
        let job = SearchJob::new(buffer, pattern).unwrap();
        let summary = search(&job, Some(1)).unwrap();
        let mut out = Vec::new();
        write_matches(&mut out, &job, &summary, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_text_lines_without_terminators() {
        let config = OutputConfig {
            format: OutputFormat::Text,
            highlight: false,
            count_only: false,
        };
        assert_eq!(run(b"foo\nbar\nfoobar\n", b"foo", &config), "foo\nfoobar\n");
    }

    #[test]
    fn count_only_prints_the_total() {
        let config = OutputConfig {
            format: OutputFormat::Text,
            highlight: false,
            count_only: true,
        };
        assert_eq!(run(b"foo\nbar\nfoobar\n", b"foo", &config), "2\n");
    }

    #[test]
    fn json_document_carries_offsets() {
        let config = OutputConfig {
            format: OutputFormat::Json,
            highlight: false,
            count_only: false,
        };
        let rendered = run(b"foo\nbar\nfoobar\n", b"foo", &config);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["total_matches"], 2);
        assert_eq!(parsed["matches"][0]["start_offset"], 0);
        assert_eq!(parsed["matches"][1]["line"], "foobar");
    }
}
