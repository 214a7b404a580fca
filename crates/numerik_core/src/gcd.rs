use serde::{Deserialize, Serialize};

/// Greatest common divisor via Euclid's algorithm (repeated division with
/// remainder). `gcd(a, 0) == a` and `gcd(0, b) == b`.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut n, mut m, mut l) = (a, b, b);
    while l != 0 {
        l = n % m;
        n = m;
        m = l;
    }
    n
}

/// Greatest common divisor via alternating subtraction, the pre-Euclidean
/// formulation: the larger operand repeatedly sheds the smaller until both
/// agree.
pub fn gcd_subtractive(a: u64, b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }
    let (mut a, mut b) = (a, b);
    while a != b {
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
    }
    a
}

/// Result of an extended GCD computation: `m*a + n*b == gcd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bezout {
    pub gcd: i64,
    pub m: i64,
    pub n: i64,
}

/// Extended Euclidean algorithm, building the Bézout coefficients backwards
/// from the recorded quotient sequence after the division chain finishes.
/// Operands are expected non-negative.
pub fn gcd_ext_backward(a: i64, b: i64) -> Bezout {
    let (mut a, mut b) = (a, b);
    let mut quotients = Vec::new();
    while b != 0 {
        let q = a / b;
        quotients.push(q);
        let r = a - q * b;
        a = b;
        b = r;
    }
    let (mut m, mut n) = (1i64, 0i64);
    for q in quotients.iter().rev() {
        let t = m - q * n;
        m = n;
        n = t;
    }
    Bezout { gcd: a, m, n }
}

/// Extended Euclidean algorithm, carrying the Bézout coefficients forward
/// through the division chain. Operands are expected non-negative.
pub fn gcd_ext_forward(a: i64, b: i64) -> Bezout {
    let (mut a, mut b) = (a, b);
    let (mut new_m, mut m) = (0i64, 1i64);
    let (mut new_n, mut n) = (1i64, 0i64);
    while b != 0 {
        let r = a / b;
        let t = a - r * b;
        a = b;
        b = t;
        let tm = m - r * new_m;
        m = new_m;
        new_m = tm;
        let tn = n - r * new_n;
        n = new_n;
        new_n = tn;
    }
    Bezout { gcd: a, m, n }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: &[(u64, u64)] = &[
        (0, 0),
        (0, 9),
        (9, 0),
        (1, 1),
        (12, 18),
        (18, 12),
        (17, 5),
        (48, 36),
        (1071, 462),
        (270, 192),
    ];

    #[test]
    fn euclid_is_symmetric_and_divides_both() {
        for &(a, b) in PAIRS {
            let g = gcd(a, b);
            assert_eq!(g, gcd(b, a));
            if g != 0 {
                assert_eq!(a % g, 0);
                assert_eq!(b % g, 0);
            } else {
                assert_eq!((a, b), (0, 0));
            }
        }
    }

    #[test]
    fn subtractive_variant_agrees_with_euclid() {
        for &(a, b) in PAIRS {
            assert_eq!(gcd_subtractive(a, b), gcd(a, b));
        }
    }

    #[test]
    fn extended_variants_satisfy_bezout_identity() {
        for &(a, b) in PAIRS {
            let (a, b) = (a as i64, b as i64);
            for result in [gcd_ext_backward(a, b), gcd_ext_forward(a, b)] {
                assert_eq!(result.gcd, gcd(a as u64, b as u64) as i64);
                assert_eq!(
                    result.m * a + result.n * b,
                    result.gcd,
                    "a={} b={} {:?}",
                    a,
                    b,
                    result
                );
            }
        }
    }

    #[test]
    fn known_coefficients() {
        let r = gcd_ext_backward(240, 46);
        assert_eq!(r.gcd, 2);
        assert_eq!(r.m * 240 + r.n * 46, 2);
    }
}
