use crate::partition::Segment;

/// All primes <= bound, via a classic Sieve of Eratosthenes.
///
/// - Time complexity: O(n log log n)
/// - Space complexity: O(n) - 1 byte per number
pub fn low_primes(bound: usize) -> Vec<usize> {
    if bound < 2 {
        return vec![];
    }

    let mut is_prime = vec![true; bound + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    for i in 2..=((bound as f64).sqrt() as usize) {
        if is_prime[i] {
            let mut j = i * i;
            while j <= bound {
                is_prime[j] = false;
                j += i;
            }
        }
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(num, &prime)| if prime { Some(num) } else { None })
        .collect()
}

/// All primes inside one segment, via a two-phase segmented sieve.
///
/// Phase 1 sieves the low primes up to ceil(sqrt(segment.end)); any
/// composite in the segment has a factor among them. Phase 2 owns a
/// separate buffer with one slot per candidate in the segment and crosses
/// off every multiple of each low prime. The two buffers are allocated
/// independently: the low-prime bound can exceed the segment length, so
/// the phases must never share index space.
pub fn sieve_segment(segment: Segment) -> Vec<usize> {
    let bound = sqrt_ceil(segment.end);
    let primes = low_primes(bound);

    let range = segment.end - segment.start + 1;
    let mut candidates = vec![true; range];

    for &p in &primes {
        // Smallest multiple of p that is >= segment.start but > p itself,
        // so a low prime falling inside the segment is never crossed off.
        let mut m = ((segment.start + p - 1) / p) * p;
        if m == p {
            m += p;
        }
        while m <= segment.end {
            candidates[m - segment.start] = false;
            m += p;
        }
    }

    candidates
        .iter()
        .enumerate()
        .filter_map(|(i, &is_p)| if is_p { Some(segment.start + i) } else { None })
        .collect()
}

/// ceil(sqrt(n)). The f64 estimate is corrected upward so the bound never
/// undershoots for large n.
fn sqrt_ceil(n: usize) -> usize {
    let mut root = (n as f64).sqrt().ceil() as usize;
    while root * root < n {
        root += 1;
    }
    root
}
