//! Partitioned concurrent line search over a shared byte buffer
pub mod coordinator;
pub mod kmp;
pub mod partition;
pub mod scanner;

pub use coordinator::{search, SearchSummary};
pub use partition::Partition;
pub use scanner::MatchLine;

use crate::error::Result;

/// Everything a worker needs, shared read-only by all workers for the whole
/// run. The failure table is computed exactly once, before any worker
/// starts, and never mutated afterwards.
#[derive(Debug)]
pub struct SearchJob<'a> {
    pub buffer: &'a [u8],
    pub pattern: &'a [u8],
    pub failure_table: Vec<i32>,
}

impl<'a> SearchJob<'a> {
    /// Validate the pattern and precompute its failure table.
    pub fn new(buffer: &'a [u8], pattern: &'a [u8]) -> Result<Self> {
        let failure_table = kmp::build_failure_table(pattern)?;
        Ok(Self {
            buffer,
            pattern,
            failure_table,
        })
    }
}
