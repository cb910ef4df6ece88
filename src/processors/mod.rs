pub mod aggregate_table;
pub mod chunk_partitioner;
pub mod merge_reducer;
pub mod parallel_processor;
pub mod report_builder;
pub mod worker;

pub use aggregate_table::{fnv1a, AggregateTable, Slot};
pub use chunk_partitioner::ChunkPartitioner;
pub use merge_reducer::MergeReducer;
pub use parallel_processor::{Aggregation, AggregationSummary, ParallelProcessor};
pub use report_builder::{Report, ReportBuilder, ReportEntry};
pub use worker::Worker;
