//! Integer sequences: Fibonacci numbers and binomial coefficients.

/// The `n`-th Fibonacci number (`a_0 = 0`, `a_1 = 1`), computed iteratively
/// with a rolling pair.
pub fn fib(n: u64) -> u64 {
    if n < 1 {
        return 0;
    }
    let (mut b, mut a) = (0u64, 1u64);
    for _ in 0..n - 1 {
        let next = a + b;
        b = a;
        a = next;
    }
    a
}

/// The `n`-th Fibonacci number from the defining recurrence
/// `a_{n+1} = a_n + a_{n-1}` directly. Exponential running time; kept as the
/// textbook contrast to [`fib`].
pub fn fib_rec(n: u64) -> u64 {
    if n < 1 {
        0
    } else if n == 1 {
        1
    } else {
        fib_rec(n - 1) + fib_rec(n - 2)
    }
}

/// The binomial coefficient `n` over `k`, i.e. `n! / (k!·(n−k)!)`, computed
/// from the shorter of the two product forms. Requires `k <= n`.
pub fn binomial(n: u64, k: u64) -> u64 {
    let k = k.min(n - k);
    let mut denominator = 1u64;
    for i in 1..=k {
        denominator *= i;
    }
    let mut numerator = 1u64;
    for i in (n - k + 1)..=n {
        numerator *= i;
    }
    numerator / denominator
}

/// Pascal's triangle up to row `n`: entry `[n][k]` is the binomial
/// coefficient `n` over `k`.
pub fn pascal(n: usize) -> Vec<Vec<u64>> {
    let mut triangle = vec![vec![1u64]];
    for row_index in 1..=n {
        let mut row = vec![1u64; row_index + 1];
        for k in 1..row_index {
            row[k] = triangle[row_index - 1][k - 1] + triangle[row_index - 1][k];
        }
        triangle.push(row);
    }
    triangle
}
