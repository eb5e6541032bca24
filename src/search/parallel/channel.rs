//! Shared stop flag and worker-to-coordinator messages.

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Worker won the claim on the result.
    Found {
        worker_id: usize,
        candidate: String,
        leading: usize,
    },
    /// Worker has stopped, either exhausted or told to stop.
    Finished {
        worker_id: usize,
        candidates_evaluated: u64,
    },
}

/// State shared by all workers of one search.
#[derive(Debug, Default)]
pub struct SharedFound {
    /// Set once by the worker that claims the match.
    found: AtomicBool,
}

impl SharedFound {
    /// Claim the result slot. Exactly one caller ever gets `true`.
    pub fn try_claim(&self) -> bool {
        self.found
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Check if some worker has already claimed a match.
    pub fn should_stop(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Shared claim flag.
    pub shared: Arc<SharedFound>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
    /// Shared claim flag.
    pub shared: Arc<SharedFound>,
}

/// Create channels for parallel search with the given number of workers.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let shared = Arc::new(SharedFound::default());

    // Unbounded so a finishing worker never blocks on the coordinator
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            to_coordinator: worker_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        shared,
    };

    (coordinator, worker_channels)
}
