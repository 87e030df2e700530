//! Spawning one worker per partition and collecting output deterministically
use log::{debug, info};
use rayon::prelude::*;

use crate::error::{PargrepError, Result};
use crate::search::partition::{self, Partition};
use crate::search::scanner::{LineScanner, MatchLine};
use crate::search::SearchJob;

/// Outcome of one run: matched lines in partition order, plus any
/// per-partition faults. A faulting worker never aborts its siblings.
#[derive(Debug)]
pub struct SearchSummary {
    pub matches: Vec<MatchLine>,
    pub partitions: usize,
    pub faults: Vec<PargrepError>,
}

impl SearchSummary {
    pub fn any_matched(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Scan the whole buffer for the job's pattern.
///
/// Each partition is scanned by its own worker over the shared read-only
/// buffer. Matches are buffered per worker and only flushed after every
/// worker has finished, in partition index order, so output is identical
/// from run to run regardless of scheduling.
pub fn search(job: &SearchJob<'_>, worker_hint: Option<usize>) -> Result<SearchSummary> {
    if job.buffer.is_empty() {
        return Err(PargrepError::Setup(
            "buffer is empty: nothing to search".to_string(),
        ));
    }

    let partitions = partition::plan(job.buffer.len(), worker_hint);
    debug!(
        "scanning {} bytes across {} partitions",
        job.buffer.len(),
        partitions.len()
    );

    // collect() joins all workers and keeps partition order intact; this is
    // the deterministic flush
    let per_partition: Vec<Result<Vec<MatchLine>>> = partitions
        .par_iter()
        .map(|p| scan_partition(job, *p))
        .collect();

    let mut matches = Vec::new();
    let mut faults = Vec::new();
    for outcome in per_partition {
        match outcome {
            Ok(lines) => matches.extend(lines),
            Err(fault) => faults.push(fault),
        }
    }

    info!(
        "found {} matching lines in {} partitions",
        matches.len(),
        partitions.len()
    );
    Ok(SearchSummary {
        matches,
        partitions: partitions.len(),
        faults,
    })
}

fn scan_partition(job: &SearchJob<'_>, partition: Partition) -> Result<Vec<MatchLine>> {
    let scanner = LineScanner::new(job.buffer, job.pattern, &job.failure_table, partition)?;
    Ok(scanner.filter(|line| line.matched).collect())
}
