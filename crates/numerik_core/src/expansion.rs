//! Digit representations of exact rationals: the periodic expansion to an
//! arbitrary base, the plain decimal expansion, Egyptian unit-fraction sums,
//! and the way back from a periodic expansion to a fraction.
//!
//! All routines work on [`BigRational`] values `0 < q < 1` so that arbitrarily
//! long expansions stay exact.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Expands `q` into its (eventually periodic) digit sequence to base `p`.
///
/// Returns the digits together with the length of the finite pre-period; the
/// digits from that index onward repeat forever. Detection works by recording
/// the scaled remainders and stopping at the first repetition.
pub fn periodic_digits(q: &BigRational, p: u32) -> (Vec<BigInt>, usize) {
    let mut digits = Vec::new();
    let mut scale = BigInt::one();
    let mut remainders: Vec<BigRational> = Vec::new();
    let mut q = q.clone();
    loop {
        let key = q.clone() * BigRational::from_integer(scale.clone());
        if let Some(start) = remainders.iter().position(|r| r == &key) {
            return (digits, start);
        }
        remainders.push(key);
        scale = scale * BigInt::from(p);
        let digit = (q.numer() * &scale) / q.denom();
        digits.push(digit.clone());
        q = q - BigRational::new(digit, scale.clone());
    }
}

/// Expands `q` into its decimal digit sequence.
///
/// Does not terminate for values with a periodic decimal expansion; use
/// [`periodic_digits`] for those.
pub fn decimal_digits(q: &BigRational) -> Vec<BigInt> {
    let mut digits = Vec::new();
    let mut scale = BigInt::from(10);
    let mut q = q.clone();
    while !q.is_zero() {
        let digit = (q.clone() * BigRational::from_integer(scale.clone()))
            .trunc()
            .to_integer();
        digits.push(digit.clone());
        q = q - BigRational::new(digit, scale.clone());
        scale = scale * BigInt::from(10);
    }
    digits
}

/// Decomposes `q` into a finite sum of unit fractions (an Egyptian fraction)
/// with the greedy choice `1/a`, `a = ⌈den/num⌉`, at every step.
pub fn unit_fractions(q: &BigRational) -> Vec<BigRational> {
    let mut parts = Vec::new();
    let mut q = q.clone();
    while !q.numer().is_one() {
        let a = (q.numer() + q.denom() - BigInt::one()) / q.numer();
        parts.push(BigRational::new(BigInt::one(), a.clone()));
        q = BigRational::new(q.numer() * &a - q.denom(), q.denom() * a);
    }
    parts.push(q);
    parts
}

/// Reassembles a fraction from a periodic digit sequence to base `p`:
/// `digits` holds pre-period and period back to back, `pre_period` is the
/// length of the finite part. The period must be non-empty.
pub fn from_periodic_digits(digits: &[BigInt], pre_period: usize, p: u32) -> BigRational {
    let base = BigInt::from(p);

    // Horner on the finite part and on one period.
    let mut head = BigInt::zero();
    for digit in &digits[..pre_period] {
        head = head * &base + digit;
    }
    let mut period = BigInt::zero();
    for digit in &digits[pre_period..] {
        period = period * &base + digit;
    }

    let period_len = digits.len() - pre_period;
    let repeat = num_traits::pow(base.clone(), period_len) - BigInt::one();
    BigRational::new(
        head * &repeat + period,
        num_traits::pow(base, pre_period) * repeat,
    )
}
