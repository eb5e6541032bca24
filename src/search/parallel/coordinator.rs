//! Parallel search coordinator that manages worker threads.

use crate::alphabet::Alphabet;
use crate::search::candidate::{Partition, assign_partitions, matches, render};
use crate::search::config::SearchConfig;
use crate::search::parallel::channel::{
    CoordinatorChannels, WorkerChannels, WorkerMessage, create_channels,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::{Searcher, Strategy};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Per-worker outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerStatistics {
    pub worker_id: usize,
    /// Leading-symbol indices this worker owned.
    pub leading: Vec<usize>,
    pub candidates_evaluated: u64,
}

/// Which worker claimed the match, and in which partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOrigin {
    pub worker_id: usize,
    pub leading: usize,
}

/// Result from parallel search execution.
#[derive(Debug, Clone)]
pub struct ParallelResult {
    /// Combined result across all workers.
    pub result: SearchResult,
    /// Worker that claimed the match, if any.
    pub origin: Option<MatchOrigin>,
    /// Per-worker statistics, ordered by worker id.
    pub worker_statistics: Vec<WorkerStatistics>,
}

/// Search every candidate of exactly `target`'s length, split by leading
/// symbol across worker threads.
///
/// Blocks until every worker has stopped, even after a match is claimed.
pub fn run_parallel_search(
    target: &str,
    alphabet: &Alphabet,
    config: &ParallelConfig,
) -> ParallelResult {
    let start_time = Instant::now();
    let target: Vec<char> = target.chars().collect();
    let length = target.len();
    let radix = alphabet.len();

    let mut statistics = SearchStatistics::new(Strategy::Parallel);
    statistics.max_length_tried = length;

    // The empty candidate is the whole length-0 space; nothing to split.
    if length == 0 {
        statistics.candidates_evaluated = 1;
        statistics.elapsed_time = start_time.elapsed();
        return ParallelResult {
            result: SearchResult::with_match(String::new(), statistics),
            origin: None,
            worker_statistics: Vec::new(),
        };
    }

    let num_workers = config.resolve_workers(radix);
    statistics.workers = num_workers;
    info!(
        target_len = length,
        alphabet_len = radix,
        workers = num_workers,
        "starting parallel search"
    );

    let assignments = assign_partitions(length, radix, num_workers);
    let mut worker_statistics: Vec<WorkerStatistics> = assignments
        .iter()
        .enumerate()
        .map(|(worker_id, owned)| WorkerStatistics {
            worker_id,
            leading: owned.iter().map(|p| p.leading).collect(),
            candidates_evaluated: 0,
        })
        .collect();

    let (coordinator_channels, worker_channels) = create_channels(num_workers);

    let target = Arc::new(target);
    let alphabet = Arc::new(alphabet.clone());

    let worker_handles: Vec<_> = worker_channels
        .into_iter()
        .zip(assignments)
        .enumerate()
        .map(|(worker_id, (channels, partitions))| {
            let target = Arc::clone(&target);
            let alphabet = Arc::clone(&alphabet);

            std::thread::spawn(move || {
                run_worker(worker_id, &partitions, &target, &alphabet, channels)
            })
        })
        .collect();

    let (found, origin) = run_coordinator(coordinator_channels, &mut worker_statistics);

    for (worker_id, handle) in worker_handles.into_iter().enumerate() {
        if handle.join().is_err() {
            warn!(worker_id, "worker thread panicked");
        }
    }

    statistics.candidates_evaluated = worker_statistics
        .iter()
        .map(|s| s.candidates_evaluated)
        .sum();
    statistics.elapsed_time = start_time.elapsed();

    let result = match found {
        Some(candidate) => {
            info!(
                candidates = statistics.candidates_evaluated,
                "parallel search found a match"
            );
            SearchResult::with_match(candidate, statistics)
        }
        None => {
            info!(
                candidates = statistics.candidates_evaluated,
                "parallel search exhausted without a match"
            );
            SearchResult::not_found(statistics)
        }
    };

    ParallelResult {
        result,
        origin,
        worker_statistics,
    }
}

/// Drain worker messages until every worker has dropped its sender.
fn run_coordinator(
    channels: CoordinatorChannels,
    worker_statistics: &mut [WorkerStatistics],
) -> (Option<String>, Option<MatchOrigin>) {
    let mut found = None;
    let mut origin = None;

    for message in channels.from_workers.iter() {
        match message {
            WorkerMessage::Found {
                worker_id,
                candidate,
                leading,
            } => {
                debug!(worker_id, leading, "worker claimed match");
                // Only the claim winner ever sends this.
                debug_assert!(found.is_none());
                found = Some(candidate);
                origin = Some(MatchOrigin { worker_id, leading });
            }
            WorkerMessage::Finished {
                worker_id,
                candidates_evaluated,
            } => {
                if let Some(stats) = worker_statistics.get_mut(worker_id) {
                    stats.candidates_evaluated = candidates_evaluated;
                }
            }
        }
    }

    debug_assert!(found.is_none() || channels.shared.should_stop());
    (found, origin)
}

/// Walk every owned partition until exhausted or another worker claims a
/// match. The stop flag is checked before each candidate.
fn run_worker(
    worker_id: usize,
    partitions: &[Partition],
    target: &[char],
    alphabet: &Alphabet,
    channels: WorkerChannels,
) {
    let mut candidates_evaluated: u64 = 0;

    'partitions: for partition in partitions {
        debug!(worker_id, leading = partition.leading, "searching partition");
        let mut digits = partition.first();
        loop {
            if channels.shared.should_stop() {
                break 'partitions;
            }
            candidates_evaluated += 1;
            if matches(&digits, alphabet, target) {
                if channels.shared.try_claim() {
                    let _ = channels.to_coordinator.send(WorkerMessage::Found {
                        worker_id,
                        candidate: render(&digits, alphabet),
                        leading: partition.leading,
                    });
                }
                break 'partitions;
            }
            if !partition.advance(&mut digits) {
                break;
            }
        }
    }

    debug!(worker_id, candidates_evaluated, "worker finished");
    let _ = channels.to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        candidates_evaluated,
    });
}

/// Fixed-length parallel search as a [`Searcher`].
pub struct ParallelSearch {
    statistics: SearchStatistics,
}

impl ParallelSearch {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(Strategy::Parallel),
        }
    }
}

impl Default for ParallelSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher for ParallelSearch {
    fn search(
        &mut self,
        target: &str,
        alphabet: &Alphabet,
        config: &SearchConfig,
    ) -> SearchResult {
        self.reset();
        let parallel = run_parallel_search(target, alphabet, &config.parallel);
        self.statistics = parallel.result.statistics.clone();
        parallel.result
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Strategy::Parallel);
    }
}
