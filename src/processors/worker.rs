use crate::error::Result;
use crate::processors::AggregateTable;
use crate::readers::LineScanner;
use std::ops::Range;
use tracing::debug;

/// Scans one realigned chunk into its own table.
pub struct Worker<'a> {
    id: usize,
    buffer: &'a [u8],
    range: Range<usize>,
    table_capacity: usize,
}

impl<'a> Worker<'a> {
    pub fn new(id: usize, buffer: &'a [u8], range: Range<usize>, table_capacity: usize) -> Self {
        Self {
            id,
            buffer,
            range,
            table_capacity,
        }
    }

    /// Consume every record that starts before the range end, including one
    /// that runs past it.
    pub fn run(self) -> Result<AggregateTable<'a>> {
        let scanner = LineScanner::new(self.buffer);
        let mut table = AggregateTable::new(self.buffer, self.table_capacity);

        let mut offset = self.range.start;
        let mut records: u64 = 0;
        while offset < self.range.end {
            let line = scanner.scan(offset)?;
            table.lookup_or_insert(line.name, line.token.temperature())?;
            offset += line.consumed + 1;
            records += 1;
        }

        debug!(
            worker = self.id,
            start = self.range.start,
            end = self.range.end,
            records,
            stations = table.len(),
            "worker finished chunk"
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScaledTemperature;

    const INPUT: &[u8] = b"Hamburg;12.3\nBerlin;-2.5\nHamburg;10.0\n";

    #[test]
    fn test_worker_reads_whole_range() -> Result<()> {
        let table = Worker::new(0, INPUT, 0..INPUT.len(), 64).run()?;

        assert_eq!(table.len(), 2);
        assert_eq!(table.total_count(), 3);
        assert_eq!(
            table.get(b"Hamburg").map(|s| s.max),
            Some(ScaledTemperature::new(123))
        );

        Ok(())
    }

    #[test]
    fn test_worker_finishes_record_straddling_end() -> Result<()> {
        // End falls inside "Berlin;-2.5"; that record still belongs here.
        let table = Worker::new(0, INPUT, 0..16, 64).run()?;

        assert_eq!(table.total_count(), 2);
        assert!(table.get(b"Berlin").is_some());
        assert!(table.get(b"Hamburg").map(|s| s.count) == Some(1));

        Ok(())
    }

    #[test]
    fn test_worker_with_empty_range() -> Result<()> {
        let table = Worker::new(3, INPUT, 25..25, 64).run()?;
        assert!(table.is_empty());
        Ok(())
    }

    #[test]
    fn test_worker_propagates_scan_errors() {
        let result = Worker::new(0, b"Oslo;1x.0\n", 0..10, 8).run();
        assert!(result.is_err());
    }
}
