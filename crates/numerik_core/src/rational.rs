use crate::gcd::gcd;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RationalError {
    #[error("denominator must not be zero")]
    ZeroDenominator,
}

/// An exact rational number, always stored in lowest terms with a positive
/// denominator and the sign carried by the numerator. Because the stored form
/// is canonical, equality is structural. All arithmetic returns new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Creates the rational `num/den`, reduced and sign-normalized.
    /// A zero denominator is rejected.
    pub fn new(num: i64, den: i64) -> Result<Rational, RationalError> {
        if den == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(Self::reduced(num, den))
    }

    // Reduction for internal arithmetic, where the denominator is known to be
    // nonzero.
    fn reduced(num: i64, den: i64) -> Rational {
        let sign = if (num < 0) != (den < 0) { -1 } else { 1 };
        let (num, den) = (num.unsigned_abs(), den.unsigned_abs());
        let d = gcd(num, den);
        Rational {
            num: sign * (num / d) as i64,
            den: (den / d) as i64,
        }
    }

    pub fn numerator(self) -> i64 {
        self.num
    }

    pub fn denominator(self) -> i64 {
        self.den
    }

    pub fn abs(self) -> Rational {
        Rational {
            num: self.num.abs(),
            den: self.den,
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational { num: 0, den: 1 }
    }
}

impl From<i64> for Rational {
    fn from(m: i64) -> Self {
        Rational { num: m, den: 1 }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        Rational::reduced(
            self.num * other.den + other.num * self.den,
            self.den * other.den,
        )
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        self + (-other)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        Rational::reduced(self.num * other.num, self.den * other.den)
    }
}

impl Div for Rational {
    type Output = Rational;

    /// Panics when dividing by a zero rational.
    fn div(self, other: Rational) -> Rational {
        if other.num == 0 {
            panic!("division by a zero rational");
        }
        Rational::reduced(self.num * other.den, self.den * other.num)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross multiplication keeps the order.
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(num: i64, den: i64) -> Rational {
        Rational::new(num, den).expect("nonzero denominator")
    }

    #[test]
    fn construction_reduces_and_normalizes_sign() {
        let cases = [
            (4, 8, 1, 2),
            (-4, 8, -1, 2),
            (4, -8, -1, 2),
            (-4, -8, 1, 2),
            (0, 5, 0, 1),
            (0, -5, 0, 1),
            (17, 33, 17, 33),
            (21, 14, 3, 2),
        ];
        for (m, n, expect_m, expect_n) in cases {
            let q = rat(m, n);
            assert_eq!((q.numerator(), q.denominator()), (expect_m, expect_n));
        }
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(Rational::new(1, 0), Err(RationalError::ZeroDenominator));
    }

    #[test]
    fn display_and_default() {
        assert_eq!(rat(-3, 6).to_string(), "-1/2");
        assert_eq!(Rational::default(), Rational::from(0));
    }

    #[test]
    fn arithmetic_matches_exact_fractions() {
        assert_eq!(rat(1, 2) + rat(1, 3), rat(5, 6));
        assert_eq!(rat(1, 2) - rat(1, 3), rat(1, 6));
        assert_eq!(rat(1, 3) - rat(1, 2), rat(-1, 6));
        assert_eq!(rat(2, 3) * rat(3, 4), rat(1, 2));
        assert_eq!(rat(2, 3) / rat(4, 9), rat(3, 2));
        assert_eq!(rat(2, 3) / rat(-4, 9), rat(-3, 2));
        assert_eq!(-rat(1, 2), rat(-1, 2));
        assert_eq!(rat(-7, 3).abs(), rat(7, 3));
    }

    #[test]
    fn mixed_arithmetic_through_explicit_conversion() {
        assert_eq!(rat(1, 2) + Rational::from(1), rat(3, 2));
        assert_eq!(Rational::from(2) * rat(3, 4), rat(3, 2));
        assert_eq!(Rational::from(1) / rat(3, 1), rat(1, 3));
    }

    #[test]
    fn ordering_by_cross_multiplication() {
        assert!(rat(1, 3) <= rat(1, 2));
        assert!(rat(-1, 2) < rat(-1, 3));
        assert!(rat(2, 4) <= rat(1, 2));
        assert!(rat(7, 5) > rat(4, 3));
    }

    #[test]
    #[should_panic(expected = "division by a zero rational")]
    fn division_by_zero_rational_panics() {
        let _ = rat(1, 2) / rat(0, 5);
    }
}
