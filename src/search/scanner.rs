//! Boundary-aware line scanning over one partition of the shared buffer
use memchr::memchr;

use crate::error::{PargrepError, Result};
use crate::search::kmp;
use crate::search::partition::Partition;

/// One visited line. Bounds are byte offsets into the shared buffer,
/// exclusive of the terminating newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLine {
    pub start: usize,
    pub end: usize,
    pub matched: bool,
}

/// Iterator over the lines owned by one partition.
///
/// A line is owned by the worker whose partition contains the line's start
/// offset. A scanner whose partition begins mid-line skips ahead to the next
/// line start (the previous worker owns the line in progress), and the last
/// line a worker owns is consumed to its real end even when that end lies
/// past the partition boundary. Line bounds come from index lookup only; the
/// buffer is never written to.
pub struct LineScanner<'a> {
    buffer: &'a [u8],
    pattern: &'a [u8],
    failure_table: &'a [i32],
    pos: usize,
    end: usize,
}

impl<'a> LineScanner<'a> {
    pub fn new(
        buffer: &'a [u8],
        pattern: &'a [u8],
        failure_table: &'a [i32],
        partition: Partition,
    ) -> Result<Self> {
        if partition.start > partition.end || partition.end > buffer.len() {
            return Err(PargrepError::PartitionFault {
                index: partition.index,
                start: partition.start,
                end: partition.end,
                reason: "range exceeds buffer bounds".to_string(),
            });
        }

        let mut pos = partition.start;
        if pos > 0 && pos < buffer.len() && buffer[pos - 1] != b'\n' {
            // mid-line start: the line belongs to the previous partition
            pos = match memchr(b'\n', &buffer[pos..]) {
                Some(nl) => pos + nl + 1,
                None => buffer.len(),
            };
        }

        Ok(Self {
            buffer,
            pattern,
            failure_table,
            pos,
            end: partition.end,
        })
    }
}

impl Iterator for LineScanner<'_> {
    type Item = MatchLine;

    fn next(&mut self) -> Option<MatchLine> {
        if self.pos >= self.end || self.pos >= self.buffer.len() {
            return None;
        }

        let start = self.pos;
        let end = match memchr(b'\n', &self.buffer[start..]) {
            Some(nl) => start + nl,
            None => self.buffer.len(),
        };
        self.pos = end + 1;

        let line = &self.buffer[start..end];
        let matched = kmp::find_first(line, self.pattern, self.failure_table).is_some();
        Some(MatchLine { start, end, matched })
    }
}
