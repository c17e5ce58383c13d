use std::io;
use thiserror::Error;

/// Fatal conditions that abort a counting run.
///
/// None of these ever let a partial count be reported as a valid result:
/// the orchestrator returns the error and the caller reports failure.
#[derive(Debug, Error)]
pub enum CountError {
    /// The match counter's lock was poisoned, so the count can no longer
    /// be trusted.
    #[error("match counter lock poisoned")]
    Sync,

    /// A worker thread could not be created. Workers already running are
    /// still joined before this is reported.
    #[error("cannot create worker for segment {index}: {source}")]
    Spawn {
        index: usize,
        #[source]
        source: io::Error,
    },

    /// A worker panicked mid-sieve (for example on allocation failure),
    /// so its segment was never fully counted.
    #[error("worker for segment {index} panicked")]
    WorkerPanicked { index: usize },
}
