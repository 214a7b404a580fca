//! Experiments on floating-point representation: measuring the machine
//! epsilon of a scalar type, the forward difference quotient, and the effect
//! of summation order on series.

use crate::traits::Scalar;

/// Measures the distance from 1 to the next larger representable number of
/// `T` experimentally: halves `x` until `1 + x/2` rounds back to 1.
///
/// For `f64` this yields `2.220446049250313e-16`.
pub fn machine_epsilon<T: Scalar>() -> T {
    let one = T::one();
    let two = T::from_f64(2.0).unwrap();
    let mut x = one;
    while one + x / two > one {
        x = x / two;
    }
    x
}

/// The forward difference quotient `(f(x+h) − f(x)) / h`.
pub fn forward_difference<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x)) / h
}

/// Sums the series terms `a(1) + a(2) + … + a(n)` in forward order.
pub fn series_forward<T, F>(a: F, n: usize) -> T
where
    T: Scalar,
    F: Fn(usize) -> T,
{
    let mut sum = T::zero();
    for k in 1..=n {
        sum = sum + a(k);
    }
    sum
}

/// Sums the series terms in backward order `a(n) + … + a(1)`, which keeps
/// small terms from being swallowed by an already large partial sum.
pub fn series_backward<T, F>(a: F, n: usize) -> T
where
    T: Scalar,
    F: Fn(usize) -> T,
{
    let mut sum = T::zero();
    for k in (1..=n).rev() {
        sum = sum + a(k);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_epsilon_of_f64() {
        assert_eq!(machine_epsilon::<f64>(), 2.220446049250313e-16);
        assert_eq!(machine_epsilon::<f64>(), f64::EPSILON);
    }

    #[test]
    fn machine_epsilon_of_f32() {
        assert_eq!(machine_epsilon::<f32>(), f32::EPSILON);
    }

    #[test]
    fn forward_difference_approximates_derivative() {
        let h = 2f64.powi(-28);
        assert!((forward_difference(f64::cos, 1.0, h) + 1f64.sin()).abs() < 2e-9);
        // Too small a step loses most of the accuracy to cancellation.
        let h = 2f64.powi(-48);
        let error = (forward_difference(f64::cos, 1.0, h) + 1f64.sin()).abs();
        assert!(error < 5e-2);
        assert!(error > 2e-4);
    }

    #[test]
    fn summation_in_either_order_reaches_the_limit() {
        assert_eq!(series_forward(|k| k as f64, 100), 5050.0);
        assert_eq!(series_backward(|k| k as f64, 100), 5050.0);

        let term = |k: usize| 1.0f64 / (k * k) as f64;
        let forward: f64 = series_forward(term, 100_000);
        let backward: f64 = series_backward(term, 100_000);
        let exact = std::f64::consts::PI.powi(2) / 6.0 - 1.0 / 100_000.5;
        assert!((forward - exact).abs() < 1e-9);
        assert!((backward - exact).abs() < 1e-9);
    }
}
