pub mod chunk_aggregator;
pub mod parallel_processor;
pub mod partitioner;

pub use chunk_aggregator::{aggregate_chunk, PartialResults};
pub use parallel_processor::{ParallelProcessor, StationSummary};
pub use partitioner::partition;
