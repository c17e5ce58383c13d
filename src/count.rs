use std::thread;

use crate::counter::MatchCounter;
use crate::digits;
use crate::error::CountError;
use crate::partition::{self, Segment};
use crate::sieve;

/// Outcome of one counting run: the final total plus the segment
/// assignment in partition order, for the caller's progress reporting.
#[derive(Debug)]
pub struct CountReport {
    pub total: usize,
    pub segments: Vec<Segment>,
}

/// Count the primes in [start, end] whose decimal form contains the digit
/// 3 at least twice, using one worker thread per segment.
///
/// Each worker sieves its segment independently, filters the primes
/// through the digit predicate and bumps the shared counter once per
/// match. The counter is read only after every worker has been joined;
/// any worker failure aborts the run without surfacing a partial total.
///
/// Callers guarantee start >= 2, end >= start and threads >= 1.
pub fn run(start: usize, end: usize, threads: usize) -> Result<CountReport, CountError> {
    let segments = partition::partition(start, end, threads);
    let counter = MatchCounter::new();

    let mut spawn_error = None;

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(segments.len());

        for (index, &segment) in segments.iter().enumerate() {
            let counter = &counter;
            let builder = thread::Builder::new().name(format!("sieve-{index}"));
            match builder.spawn_scoped(scope, move || count_segment(segment, counter)) {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    // Stop spawning; the scope still joins every worker
                    // already running before the run reports failure.
                    spawn_error = Some(CountError::Spawn { index, source });
                    break;
                }
            }
        }

        for (index, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(result) => result?,
                Err(_) => return Err(CountError::WorkerPanicked { index }),
            }
        }

        Ok(())
    })?;

    if let Some(err) = spawn_error {
        return Err(err);
    }

    let total = counter.total()?;
    Ok(CountReport { total, segments })
}

fn count_segment(segment: Segment, counter: &MatchCounter) -> Result<(), CountError> {
    for prime in sieve::sieve_segment(segment) {
        if digits::has_two_threes(prime) {
            counter.increment()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single-pass sieve-and-count over the whole range, for cross-checks.
    fn brute_force(start: usize, end: usize) -> usize {
        sieve::low_primes(end)
            .into_iter()
            .filter(|&p| p >= start && digits::has_two_threes(p))
            .count()
    }

    #[test]
    fn test_end_to_end_reference_range() {
        // 233 and 313 qualify; 331 is the next match and lies out of range.
        let report = run(2, 330, 3).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.segments.len(), 3);

        // Widening past 331 and 337 picks both up.
        assert_eq!(run(2, 340, 3).unwrap().total, 4);
    }

    #[test]
    fn test_total_is_independent_of_thread_count() {
        let expected = run(2, 2000, 1).unwrap().total;
        for threads in [2, 3, 4, 8] {
            assert_eq!(run(2, 2000, threads).unwrap().total, expected);
        }
    }

    #[test]
    fn test_matches_brute_force() {
        for (start, end) in [(2, 340), (2, 1000), (100, 500), (233, 233), (300, 400)] {
            let expected = brute_force(start, end);
            for threads in [1, 3, 7] {
                assert_eq!(run(start, end, threads).unwrap().total, expected);
            }
        }
    }

    #[test]
    fn test_single_element_range() {
        let report = run(2, 2, 1).unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(report.segments, vec![Segment { start: 2, end: 2 }]);
    }

    #[test]
    fn test_threads_exceeding_range() {
        // No prime <= 5 has two 3s; the 100 requested threads clamp to 4
        // unit segments.
        let report = run(2, 5, 100).unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(report.segments.len(), 4);
    }

    #[test]
    fn test_report_segments_match_partitioner() {
        let report = run(2, 340, 3).unwrap();
        assert_eq!(report.segments, partition::partition(2, 340, 3));
    }
}
