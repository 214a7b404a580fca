//! Continued fractions `a₀ + 1/(a₁ + 1/(a₂ + …))`.
//!
//! Sequences follow the canonical convention that the last partial quotient
//! satisfies `aₙ ≥ 2`, which makes the representation unambiguous. The
//! evaluation routines require a non-empty sequence.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

/// Evaluates a continued fraction by right-to-left accumulation:
/// `x ← aₙ`, then `x ← aₖ + 1/x` for each preceding term.
pub fn evaluate(a: &[i64]) -> f64 {
    let (last, rest) = a.split_last().expect("empty continued fraction");
    let mut x = *last as f64;
    for &ak in rest.iter().rev() {
        x = ak as f64 + 1.0 / x;
    }
    x
}

/// Recursive formulation of [`evaluate`]. Agrees with the iterative variant
/// up to floating-point roundoff.
pub fn evaluate_recursive(a: &[i64]) -> f64 {
    if a.len() == 1 {
        a[0] as f64
    } else {
        a[0] as f64 + 1.0 / evaluate_recursive(&a[1..])
    }
}

/// Evaluates a continued fraction exactly, carrying the recurrence in a
/// numerator/denominator pair `(p, q)` for the value `p/q`.
pub fn evaluate_exact(a: &[i64]) -> (i64, i64) {
    let (last, rest) = a.split_last().expect("empty continued fraction");
    let (mut p, mut q) = (*last, 1i64);
    for &ak in rest.iter().rev() {
        let t = q + ak * p;
        q = p;
        p = t;
    }
    (p, q)
}

/// Searches the continued-fraction representation of `x > 0` by repeatedly
/// splitting off the integer part and reciprocating the remainder.
///
/// Terminates only for values whose remainder eventually hits zero exactly;
/// for irrational inputs (or long expansions of float artifacts) the caller
/// is responsible for bounding the call.
pub fn expand(x: f64) -> Vec<i64> {
    let mut a = vec![x.trunc() as i64];
    let mut y = x - x.trunc();
    while y != 0.0 {
        let inv = 1.0 / y;
        a.push(inv.trunc() as i64);
        y = inv - inv.trunc();
    }
    a
}

/// Exact variant of [`expand`] over rationals, which always terminates and
/// yields the canonical finite expansion.
pub fn expand_exact(q: &BigRational) -> Vec<BigInt> {
    let first = q.trunc().to_integer();
    let mut y = q - BigRational::from_integer(first.clone());
    let mut a = vec![first];
    while !y.is_zero() {
        let inv = y.recip();
        let ai = inv.trunc().to_integer();
        y = inv - BigRational::from_integer(ai.clone());
        a.push(ai);
    }
    a
}
