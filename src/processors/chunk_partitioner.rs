use crate::error::{ProcessingError, Result};
use crate::utils::constants::LINE_TERMINATOR;
use std::ops::Range;

/// Splits the input into one byte range per worker.
///
/// Every range but the first starts on a line boundary. Ends are left at the
/// nominal split point: a worker finishes the record that straddles its end,
/// and the next worker skips it.
pub struct ChunkPartitioner {
    workers: usize,
}

impl ChunkPartitioner {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    pub fn partition(&self, buffer: &[u8]) -> Result<Vec<Range<usize>>> {
        let len = buffer.len();
        if len == 0 {
            return Ok(Vec::new());
        }

        let workers = self.workers.clamp(1, len);
        let chunk_size = len / workers;
        let mut ranges = Vec::with_capacity(workers);

        for index in 0..workers {
            let nominal_start = index * chunk_size;
            let end = if index + 1 == workers {
                len
            } else {
                nominal_start + chunk_size
            };

            let start = if nominal_start == 0 {
                0
            } else {
                Self::realign(buffer, nominal_start)?
            };

            ranges.push(start..end.max(start));
        }

        Ok(ranges)
    }

    /// First offset at or after `start` whose preceding byte is a terminator.
    pub fn realign(buffer: &[u8], start: usize) -> Result<usize> {
        let mut pos = start.max(1);
        while pos <= buffer.len() {
            if buffer[pos - 1] == LINE_TERMINATOR {
                return Ok(pos);
            }
            pos += 1;
        }
        Err(ProcessingError::UnterminatedChunk { offset: start })
    }
}
