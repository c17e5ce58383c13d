/// True if the decimal representation of `n` contains the digit 3 at least
/// twice.
///
/// Digits are peeled off with repeated division by 10; the scan stops as
/// soon as the second 3 is seen. Pure, O(log10 n).
pub fn has_two_threes(mut n: usize) -> bool {
    let mut threes = 0;
    while n != 0 {
        if n % 10 == 3 {
            threes += 1;
            if threes == 2 {
                return true;
            }
        }
        n /= 10;
    }
    false
}
