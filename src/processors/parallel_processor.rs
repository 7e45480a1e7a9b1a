use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::StationStats;
use crate::processors::{aggregate_chunk, partition, PartialResults};
use crate::readers::MeasurementFile;
use crate::utils::progress::ProgressReporter;

/// Final station name -> statistics mapping, ordered by name. String ordering
/// is byte-lexicographic, which is exactly the report order.
pub type StationSummary = BTreeMap<String, StationStats>;

pub struct ParallelProcessor {
    max_workers: usize,
}

impl ParallelProcessor {
    pub fn new(max_workers: usize) -> Self {
        Self { max_workers }
    }

    /// Map a measurement file and aggregate it with all configured workers.
    pub fn summarize_file(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<StationSummary> {
        let file = MeasurementFile::open(path)?;
        debug!(bytes = file.len(), workers = self.max_workers, "input mapped");
        self.summarize_bytes(file.bytes(), progress)
    }

    /// Aggregate an in-memory byte region: partition into record-aligned
    /// chunks, scan each chunk on its own worker with a private map, then
    /// merge all partial maps single-threaded once every worker has finished.
    pub fn summarize_bytes(
        &self,
        data: &[u8],
        progress: Option<&ProgressReporter>,
    ) -> Result<StationSummary> {
        if self.max_workers == 0 {
            return Err(ProcessingError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }

        let chunks = partition(data, self.max_workers);
        let completed_count = AtomicUsize::new(0);

        // Configure Rayon thread pool
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| ProcessingError::Config(e.to_string()))?;

        // Scan chunks in parallel; collect() joins every worker and surfaces
        // the first error, so a malformed record aborts the whole run.
        let partials: Result<Vec<PartialResults>> = pool.install(|| {
            chunks
                .into_par_iter()
                .map(|chunk| {
                    let result = aggregate_chunk(data, chunk);

                    let count = completed_count.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(p) = progress {
                        p.update(count as u64);
                    }

                    result
                })
                .collect()
        });

        Ok(Self::merge_partials(partials?))
    }

    /// Fold worker-private maps into the global ordered map. Entry merging is
    /// commutative and associative, so fold order is irrelevant.
    fn merge_partials(partials: Vec<PartialResults>) -> StationSummary {
        let mut summary = StationSummary::new();

        for partial in partials {
            for (name, stats) in partial {
                match summary.get_mut(&name) {
                    Some(existing) => existing.merge(&stats),
                    None => {
                        summary.insert(name, stats);
                    }
                }
            }
        }

        summary
    }
}

impl Default for ParallelProcessor {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}
