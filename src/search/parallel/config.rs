//! Configuration for parallel search execution.

/// Worker count used when the CPU count cannot be detected.
pub const DEFAULT_WORKERS: usize = 4;

/// Configuration for parallel search execution.
#[derive(Debug, Clone, Default)]
pub struct ParallelConfig {
    /// Requested number of worker threads (None = one per detected CPU).
    pub num_workers: Option<usize>,
}

impl ParallelConfig {
    /// Request a fixed number of worker threads.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = Some(num_workers.max(1));
        self
    }

    /// Set the worker count from an Option.
    pub fn with_workers_option(mut self, num_workers: Option<usize>) -> Self {
        self.num_workers = num_workers.map(|n| n.max(1));
        self
    }

    /// Requested worker count, or the detected CPU count.
    pub fn requested_workers(&self) -> usize {
        self.num_workers.unwrap_or_else(detected_workers)
    }

    /// Workers actually spawned for an alphabet of `radix` symbols.
    ///
    /// Capped by the radix so that every worker owns at least one
    /// leading-symbol partition.
    pub fn resolve_workers(&self, radix: usize) -> usize {
        self.requested_workers().min(radix).max(1)
    }
}

// num_cpus reports at least 1; the fallback only guards a zero from it.
fn detected_workers() -> usize {
    match num_cpus::get() {
        0 => DEFAULT_WORKERS,
        n => n,
    }
}
