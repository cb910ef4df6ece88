use crate::error::Result;
use crate::processors::{AggregateTable, ChunkPartitioner, MergeReducer, Worker};
use crate::utils::constants::DEFAULT_TABLE_CAPACITY;
use crate::utils::progress::ProgressReporter;
use crate::utils::Settings;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct ParallelProcessor {
    max_workers: usize,
    table_capacity: usize,
}

/// Merged table of one run plus what it took to build it.
#[derive(Debug)]
pub struct Aggregation<'a> {
    pub table: AggregateTable<'a>,
    pub workers: usize,
    pub chunks: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregationSummary {
    pub bytes: usize,
    pub records: u64,
    pub stations: usize,
    pub workers: usize,
    pub chunks: usize,
    pub table_capacity: usize,
    pub load_factor: f64,
    pub elapsed: Duration,
}

impl AggregationSummary {
    pub fn summary(&self) -> String {
        format!(
            "Input: {} bytes, {} records\nStations: {} (table {} slots, load {:.1}%)\nWorkers: {}\nChunks: {}\nElapsed: {:.2?}",
            self.bytes,
            self.records,
            self.stations,
            self.table_capacity,
            self.load_factor * 100.0,
            self.workers,
            self.chunks,
            self.elapsed
        )
    }
}

impl Aggregation<'_> {
    pub fn summary(&self) -> AggregationSummary {
        AggregationSummary {
            bytes: self.table.buffer().len(),
            records: self.table.total_count(),
            stations: self.table.len(),
            workers: self.workers,
            chunks: self.chunks,
            table_capacity: self.table.capacity(),
            load_factor: self.table.load_factor(),
            elapsed: self.elapsed,
        }
    }
}

impl ParallelProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            table_capacity: DEFAULT_TABLE_CAPACITY,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.max_workers).with_table_capacity(settings.table_capacity)
    }

    pub fn with_table_capacity(mut self, table_capacity: usize) -> Self {
        self.table_capacity = table_capacity;
        self
    }

    /// Partition, scan every chunk in parallel, then merge the worker tables.
    pub fn process<'a>(
        &self,
        buffer: &'a [u8],
        progress: Option<&ProgressReporter>,
    ) -> Result<Aggregation<'a>> {
        let started = Instant::now();

        let ranges = ChunkPartitioner::new(self.max_workers).partition(buffer)?;
        let chunks = ranges.len();
        info!(
            bytes = buffer.len(),
            chunks,
            table_capacity = self.table_capacity,
            "partitioned input"
        );

        if let Some(p) = progress {
            p.set_length(chunks as u64);
            p.set_message(&format!("Scanning {} chunks...", chunks));
        }

        // Dedicated pool so the worker count is exactly what was configured
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()?;

        let completed = Arc::new(AtomicUsize::new(0));
        let table_capacity = self.table_capacity;

        let tables: Vec<AggregateTable<'a>> = pool.install(|| {
            ranges
                .into_par_iter()
                .enumerate()
                .map(|(id, range)| {
                    let result = Worker::new(id, buffer, range, table_capacity).run();

                    let count = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(p) = progress {
                        p.update(count as u64);
                    }

                    result
                })
                .collect::<Result<Vec<_>>>()
        })?;

        debug!(tables = tables.len(), "all workers finished");

        if let Some(p) = progress {
            p.set_message("Merging worker tables...");
        }

        let table = MergeReducer::new(buffer, self.table_capacity).reduce(tables)?;
        let elapsed = started.elapsed();

        info!(
            stations = table.len(),
            records = table.total_count(),
            elapsed_ms = elapsed.as_millis() as u64,
            "aggregation complete"
        );

        if let Some(p) = progress {
            p.finish_with_message(&format!("Aggregated {} stations", table.len()));
        }

        Ok(Aggregation {
            table,
            workers: self.max_workers,
            chunks,
            elapsed,
        })
    }
}

impl Default for ParallelProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
