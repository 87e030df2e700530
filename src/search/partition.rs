//! Splitting the mapped file into per-worker byte ranges
use crate::error::{PargrepError, Result};
use log::{debug, warn};

/// Files at or below this size are scanned by a single worker; spawning
/// threads costs more than the scan itself.
pub const SINGLE_WORKER_THRESHOLD: usize = 4096;

/// One worker's byte range, half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute contiguous, non-overlapping partitions covering `[0, file_size)`.
///
/// Each partition gets `file_size / workers` bytes; the last one absorbs the
/// remainder so the final `end` equals `file_size`. `worker_hint` overrides
/// the detected CPU count but never the small-file clamp.
pub fn plan(file_size: usize, worker_hint: Option<usize>) -> Vec<Partition> {
    let workers = effective_workers(file_size, worker_hint);
    let unit = file_size / workers;

    let partitions: Vec<Partition> = (0..workers)
        .map(|i| Partition {
            index: i,
            start: i * unit,
            end: if i == workers - 1 {
                file_size
            } else {
                (i + 1) * unit
            },
        })
        .collect();

    debug!(
        "planned {} partitions of ~{} bytes over {} bytes",
        partitions.len(),
        unit,
        file_size
    );
    partitions
}

fn effective_workers(file_size: usize, worker_hint: Option<usize>) -> usize {
    if file_size <= SINGLE_WORKER_THRESHOLD {
        return 1;
    }
    let requested = match worker_hint {
        Some(n) => n.max(1),
        None => available_workers(),
    };
    // keep every partition non-empty
    requested.min(file_size)
}

/// Number of processing units to plan for, recovering locally with a
/// single-worker fallback when discovery fails.
pub fn available_workers() -> usize {
    match detect_cpus() {
        Ok(n) => n,
        Err(e) => {
            warn!("{e}; falling back to a single worker");
            1
        }
    }
}

fn detect_cpus() -> Result<usize> {
    let n = num_cpus::get();
    if n == 0 {
        return Err(PargrepError::ResourceUnavailable(
            "CPU count reported as zero".to_string(),
        ));
    }
    Ok(n)
}
