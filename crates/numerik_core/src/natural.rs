use num_traits::{Num, One, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};
use thiserror::Error;

/// Errors raised by the fallible natural-number operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NaturalError {
    #[error("{minuend} < {subtrahend} in subtraction")]
    Underflow { minuend: u64, subtrahend: u64 },
    #[error("division by zero")]
    DivisionByZero,
}

/// A natural number whose arithmetic is built from the successor and
/// predecessor functions alone.
///
/// Addition repeatedly applies the successor, multiplication repeatedly adds,
/// division repeatedly subtracts, and the comparisons are defined through the
/// existence of a difference. Every operation is deliberately linear (or
/// worse) in the magnitude of its operands; the point is the axiomatic
/// construction, not speed. Each iterative operation has a recursive
/// counterpart producing identical results, with recursion depth equal to the
/// input magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Natural(u64);

impl Natural {
    pub const ZERO: Natural = Natural(0);
    pub const ONE: Natural = Natural(1);

    pub fn new(n: u64) -> Self {
        Natural(n)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// The value as a container index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Successor function n⁺.
    pub fn succ(self) -> Natural {
        Natural(self.0 + 1)
    }

    /// Predecessor function n⁻. Undefined at zero; calling it there is an
    /// arithmetic fault (debug builds panic on the underflow).
    pub fn pred(self) -> Natural {
        Natural(self.0 - 1)
    }

    /// Searches the difference `d` with `m + d == self` by counting upwards
    /// from zero. Returns `None` if `m` exceeds `self`.
    pub fn difference(self, m: Natural) -> Option<Natural> {
        for d in Count::new(Natural::ZERO, self) {
            if m + d == self {
                return Some(d);
            }
        }
        None
    }

    /// Recursive variant of [`Natural::difference`], counting `d` upwards.
    pub fn difference_rec(self, m: Natural, d: Natural) -> Option<Natural> {
        if m.plus_rec(d) == self {
            Some(d)
        } else if d == self {
            None
        } else {
            self.difference_rec(m, d.succ())
        }
    }

    /// Runtime-improved variant of [`Natural::difference`]: counts `m` up
    /// alongside `d`, saving the addition `m + d` in every step.
    pub fn fast_difference(self, mut m: Natural) -> Option<Natural> {
        for d in Count::new(Natural::ZERO, self) {
            if m == self {
                return Some(d);
            }
            m = m.succ();
        }
        None
    }

    /// Recursive variant of [`Natural::fast_difference`].
    pub fn fast_difference_rec(self, m: Natural, d: Natural) -> Option<Natural> {
        if m == self {
            Some(d)
        } else if d == self {
            None
        } else {
            self.fast_difference_rec(m.succ(), d.succ())
        }
    }

    /// Subtraction with the absence of a difference escalated to an error.
    pub fn try_sub(self, m: Natural) -> Result<Natural, NaturalError> {
        match self.difference(m) {
            Some(d) => Ok(d),
            None => Err(NaturalError::Underflow {
                minuend: self.0,
                subtrahend: m.0,
            }),
        }
    }

    /// Recursive variant of [`Natural::try_sub`].
    pub fn try_sub_rec(self, m: Natural) -> Result<Natural, NaturalError> {
        if m.le_rec(self) {
            Ok(self
                .difference_rec(m, Natural::ZERO)
                .expect("difference exists for m <= n"))
        } else {
            Err(NaturalError::Underflow {
                minuend: self.0,
                subtrahend: m.0,
            })
        }
    }

    /// Recursive addition: counts the left summand down with the predecessor
    /// function while applying the successor to the result.
    pub fn plus_rec(self, m: Natural) -> Natural {
        if self == Natural::ZERO {
            m
        } else {
            m.plus_rec(self.pred()).succ()
        }
    }

    /// Recursive multiplication by repeated recursive addition.
    pub fn mul_rec(self, m: Natural) -> Natural {
        if self == Natural::ZERO {
            self
        } else {
            m.plus_rec(m.mul_rec(self.pred()))
        }
    }

    /// `self <= m`, decided through the existence of a difference, using the
    /// recursive difference search.
    pub fn le_rec(self, m: Natural) -> bool {
        m.difference_rec(self, Natural::ZERO).is_some()
    }

    /// Quotient `k` and remainder `l` with `self = k*m + l`, computed by
    /// repeated subtraction of the divisor.
    pub fn divmod(self, m: Natural) -> Result<(Natural, Natural), NaturalError> {
        if m == Natural::ZERO {
            return Err(NaturalError::DivisionByZero);
        }
        let (mut k, mut l) = (Natural::ZERO, self);
        while m <= l {
            l = l - m;
            k = k.succ();
        }
        Ok((k, l))
    }

    /// Recursive variant of [`Natural::divmod`].
    pub fn divmod_rec(self, m: Natural) -> Result<(Natural, Natural), NaturalError> {
        if m == Natural::ZERO {
            return Err(NaturalError::DivisionByZero);
        }
        Ok(self.divmod_rec_step(m, Natural::ZERO, self))
    }

    fn divmod_rec_step(self, m: Natural, k: Natural, l: Natural) -> (Natural, Natural) {
        if m.le_rec(l) {
            self.divmod_rec_step(
                m,
                k.succ(),
                l.try_sub_rec(m).expect("divisor fits into remainder"),
            )
        } else {
            (k, l)
        }
    }

    /// Exponentiation by repeated multiplication.
    pub fn pow(self, m: Natural) -> Natural {
        let mut ret = Natural::ONE;
        for _ in Count::new(Natural::ONE, m) {
            ret = ret * self;
        }
        ret
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Natural {
    fn from(n: u64) -> Self {
        Natural(n)
    }
}

impl Add for Natural {
    type Output = Natural;

    /// Addition by repeated application of the successor function.
    fn add(self, m: Natural) -> Natural {
        let mut ret = m;
        for _ in Count::new(Natural::ONE, self) {
            ret = ret.succ();
        }
        ret
    }
}

impl Mul for Natural {
    type Output = Natural;

    /// Multiplication by repeated addition.
    fn mul(self, m: Natural) -> Natural {
        let mut ret = Natural::ZERO;
        for _ in Count::new(Natural::ONE, self) {
            ret = ret + m;
        }
        ret
    }
}

impl Sub for Natural {
    type Output = Natural;

    /// Panics when the subtrahend exceeds the minuend; [`Natural::try_sub`]
    /// is the fallible variant.
    fn sub(self, m: Natural) -> Natural {
        match self.try_sub(m) {
            Ok(d) => d,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Div for Natural {
    type Output = Natural;

    /// Panics on division by zero; [`Natural::divmod`] is the fallible variant.
    fn div(self, m: Natural) -> Natural {
        match self.divmod(m) {
            Ok((k, _)) => k,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Rem for Natural {
    type Output = Natural;

    /// Panics on division by zero; [`Natural::divmod`] is the fallible variant.
    fn rem(self, m: Natural) -> Natural {
        match self.divmod(m) {
            Ok((_, l)) => l,
            Err(e) => panic!("{}", e),
        }
    }
}

impl PartialOrd for Natural {
    /// The ordering is decided through the existence of a difference, so a
    /// comparison takes time linear in the operand values.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(if self == other {
            Ordering::Equal
        } else if other.difference(*self).is_some() {
            Ordering::Less
        } else {
            Ordering::Greater
        })
    }
}

// Zero/One/Num make Natural usable as the digit type of a positional number
// system.

impl Zero for Natural {
    fn zero() -> Self {
        Natural::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Natural::ZERO
    }
}

impl One for Natural {
    fn one() -> Self {
        Natural::ONE
    }
}

impl Num for Natural {
    type FromStrRadixErr = std::num::ParseIntError;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        u64::from_str_radix(str, radix).map(Natural)
    }
}

/// Iterator over the inclusive range `[a, b]`, counting with the successor
/// function of [`Natural`]. An empty range (`a > b`) yields nothing.
#[derive(Debug, Clone)]
pub struct Count {
    next: Natural,
    last: Natural,
}

impl Count {
    pub fn new(a: Natural, b: Natural) -> Self {
        Count { next: a, last: b }
    }
}

impl Iterator for Count {
    type Item = Natural;

    fn next(&mut self) -> Option<Natural> {
        if self.next == self.last.succ() {
            return None;
        }
        let n = self.next;
        self.next = self.next.succ();
        Some(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_plain_value() {
        assert_eq!(Natural::new(42).to_string(), "42");
    }

    #[test]
    fn successor_and_predecessor() {
        for i in [0u64, 1, 7, 99] {
            assert_eq!(Natural::new(i).succ(), Natural::new(i + 1));
        }
        for i in [1u64, 7, 99] {
            assert_eq!(Natural::new(i).pred(), Natural::new(i - 1));
        }
    }

    #[test]
    fn count_iterates_inclusive_range() {
        let values: Vec<u64> = Count::new(Natural::new(2), Natural::new(5))
            .map(Natural::value)
            .collect();
        assert_eq!(values, vec![2, 3, 4, 5]);
        assert_eq!(Count::new(Natural::ONE, Natural::ZERO).count(), 0);
    }

    #[test]
    fn addition_matches_builtin() {
        for (a, b) in [(0u64, 0u64), (0, 9), (9, 0), (17, 25), (40, 40)] {
            assert_eq!(Natural::new(a) + Natural::new(b), Natural::new(a + b));
            assert_eq!(
                Natural::new(a).plus_rec(Natural::new(b)),
                Natural::new(a + b)
            );
        }
    }

    #[test]
    fn multiplication_matches_builtin() {
        for (a, b) in [(0u64, 5u64), (5, 0), (1, 13), (7, 8), (12, 12)] {
            assert_eq!(Natural::new(a) * Natural::new(b), Natural::new(a * b));
            assert_eq!(
                Natural::new(a).mul_rec(Natural::new(b)),
                Natural::new(a * b)
            );
        }
    }

    #[test]
    fn comparison_through_difference() {
        for (a, b) in [(0u64, 0u64), (3, 7), (7, 3), (5, 5), (0, 1)] {
            let (m, n) = (Natural::new(a), Natural::new(b));
            assert_eq!(m <= n, a <= b);
            assert_eq!(m < n, a < b);
            assert_eq!(m.le_rec(n), a <= b);
        }
    }

    #[test]
    fn difference_variants_agree() {
        for (a, b) in [(0u64, 0u64), (9, 4), (4, 9), (12, 12), (20, 0)] {
            let (n, m) = (Natural::new(a), Natural::new(b));
            let expected = a.checked_sub(b).map(Natural::new);
            assert_eq!(n.difference(m), expected);
            assert_eq!(n.difference_rec(m, Natural::ZERO), expected);
            assert_eq!(n.fast_difference(m), expected);
            assert_eq!(n.fast_difference_rec(m, Natural::ZERO), expected);
        }
    }

    #[test]
    fn subtraction_escalates_missing_difference() {
        assert_eq!(
            Natural::new(9) - Natural::new(4),
            Natural::new(5)
        );
        assert_eq!(
            Natural::new(4).try_sub(Natural::new(9)),
            Err(NaturalError::Underflow {
                minuend: 4,
                subtrahend: 9
            })
        );
        assert_eq!(
            Natural::new(4).try_sub_rec(Natural::new(9)),
            Err(NaturalError::Underflow {
                minuend: 4,
                subtrahend: 9
            })
        );
        assert_eq!(
            Natural::new(9).try_sub_rec(Natural::new(4)),
            Ok(Natural::new(5))
        );
    }

    #[test]
    #[should_panic(expected = "4 < 9 in subtraction")]
    fn subtraction_operator_panics_on_underflow() {
        let _ = Natural::new(4) - Natural::new(9);
    }

    #[test]
    fn divmod_satisfies_division_identity() {
        for (a, b) in [(0u64, 3u64), (17, 5), (25, 25), (99, 10), (7, 9)] {
            let (n, m) = (Natural::new(a), Natural::new(b));
            let (k, l) = n.divmod(m).expect("divisor is nonzero");
            assert_eq!(k.value() * b + l.value(), a);
            assert!(l.value() < b);
            assert_eq!(n.divmod_rec(m).expect("divisor is nonzero"), (k, l));
            assert_eq!(n / m, k);
            assert_eq!(n % m, l);
        }
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            Natural::new(7).divmod(Natural::ZERO),
            Err(NaturalError::DivisionByZero)
        );
        assert_eq!(
            Natural::new(7).divmod_rec(Natural::ZERO),
            Err(NaturalError::DivisionByZero)
        );
    }

    #[test]
    fn pow_by_repeated_multiplication() {
        assert_eq!(Natural::new(2).pow(Natural::new(10)), Natural::new(1024));
        assert_eq!(Natural::new(5).pow(Natural::ZERO), Natural::ONE);
        assert_eq!(Natural::ZERO.pow(Natural::new(3)), Natural::ZERO);
    }
}
