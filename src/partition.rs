/// A contiguous, inclusive sub-range of the search range, assigned to
/// exactly one worker thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

/// Split [start, end] into at most `threads` contiguous segments.
///
/// Every segment gets range/threads numbers; the first range%threads
/// segments take one extra so the whole range is covered with nothing left
/// over. When there are more threads than numbers, the thread count is
/// clamped to the range and every segment holds a single number.
///
/// Callers guarantee start >= 2, end >= start and threads >= 1.
pub fn partition(start: usize, end: usize, threads: usize) -> Vec<Segment> {
    let range = end - start + 1;
    let threads = threads.min(range);
    let base = range / threads;
    let mut left_over = range - base * threads;

    let mut segments = Vec::with_capacity(threads);
    let mut this_start = start;
    for _ in 0..threads {
        let mut this_end = this_start + base - 1;
        if left_over > 0 {
            this_end += 1;
            left_over -= 1;
        }
        segments.push(Segment {
            start: this_start,
            end: this_end,
        });
        this_start = this_end + 1;
    }

    segments
}
