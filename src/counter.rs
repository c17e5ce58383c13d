use std::sync::Mutex;

use crate::error::CountError;

/// Shared accumulator for the matches found across all workers.
///
/// One counter is created per run and handed to every worker by reference;
/// it never outlives the run. Increments are serialized by the mutex and
/// the critical section is a single addition.
pub struct MatchCounter {
    total: Mutex<usize>,
}

impl MatchCounter {
    pub fn new() -> Self {
        MatchCounter {
            total: Mutex::new(0),
        }
    }

    /// Record one match. A poisoned lock means another worker died holding
    /// it, so the count is unreliable and the run must fail.
    pub fn increment(&self) -> Result<(), CountError> {
        let mut total = self.total.lock().map_err(|_| CountError::Sync)?;
        *total += 1;
        Ok(())
    }

    /// Final value. Only meaningful once every worker has been joined.
    pub fn total(&self) -> Result<usize, CountError> {
        self.total.lock().map(|t| *t).map_err(|_| CountError::Sync)
    }
}
