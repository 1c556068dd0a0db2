pub(crate) fn divup(dividend: usize, divisor: usize) -> usize {
    let quotient = dividend / divisor;
    match dividend % divisor {
        0 => quotient,
        _ => quotient + 1,
    }
}

/// Minimum entries per non-root node: ceil(0.4 * degree), in exact integers.
pub(crate) fn min_fill(degree: usize) -> usize {
    divup(2 * degree, 5)
}
