use crate::natural::{Count, Natural};
use crate::traits::Digit;
use anyhow::{bail, Result};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer in positional representation to an arbitrary base.
///
/// The digits are stored least-significant first; the digit type `T` is fixed
/// by the base. Reads past the stored length yield zero, and writes past the
/// stored length zero-extend the digit sequence, so the representation behaves
/// as if padded with infinitely many trailing zeros. The container itself does
/// not enforce `digit < base` — algorithms may park out-of-range values in a
/// digit slot before propagating carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Positional<T> {
    base: T,
    digits: Vec<T>,
}

impl<T: Digit> Positional<T> {
    /// A number without any stored digits (value zero).
    pub fn new(base: T) -> Self {
        Self::with_digits(base, Vec::new())
    }

    pub fn with_digits(base: T, digits: Vec<T>) -> Self {
        Positional { base, digits }
    }

    pub fn base(&self) -> &T {
        &self.base
    }

    /// The stored digits, least-significant first.
    pub fn digits(&self) -> &[T] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The `k`-th digit, or zero beyond the stored length.
    pub fn digit(&self, k: usize) -> T {
        self.digits.get(k).cloned().unwrap_or_else(T::zero)
    }

    /// Overwrites the `k`-th digit, zero-extending the sequence first when `k`
    /// lies past the stored length. Never fails for sparse writes.
    pub fn set_digit(&mut self, k: usize, value: T) {
        if k < self.digits.len() {
            self.digits[k] = value;
        } else {
            while self.digits.len() < k {
                self.digits.push(T::zero());
            }
            self.digits.push(value);
        }
    }

    /// The represented value, i.e. the digit polynomial evaluated at the base.
    pub fn evaluate(&self) -> T {
        let base = self.base.clone();
        self.evaluate_at(&base)
    }

    /// Evaluates the digit polynomial `Σ dᵢ·xⁱ` at `x` with Horner's method,
    /// folding from the most-significant digit down.
    pub fn evaluate_at(&self, x: &T) -> T {
        let mut f = T::zero();
        for digit in self.digits.iter().rev() {
            f = f * x.clone() + digit.clone();
        }
        f
    }
}

impl<T: Digit + fmt::Display> fmt::Display for Positional<T> {
    /// Digits most-significant first, with the base appended after an
    /// underscore: `Positional::with_digits(2, vec![0, 1, 1])` prints `110_2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits.iter().rev() {
            write!(f, "{}", digit)?;
        }
        write!(f, "_{}", self.base)
    }
}

fn div_rem<T: Digit>(n: T, p: &T) -> (T, T) {
    let q = n.clone() / p.clone();
    let r = n - q.clone() * p.clone();
    (q, r)
}

/// Converts an integer `n` into its representation to base `p` by repeated
/// division, recording remainders least-significant first.
pub fn to_base<T: Digit>(n: T, p: T) -> Positional<T> {
    let (mut f, n0) = div_rem(n, &p);
    let mut out = Positional::with_digits(p.clone(), vec![n0]);
    let mut k = 1usize;
    while p <= f {
        let (q, r) = div_rem(f, &p);
        out.set_digit(k, r);
        f = q;
        k += 1;
    }
    out.set_digit(k, f);
    out
}

/// Converts a positional number into the representation to base `q` by
/// evaluating it (Horner) and re-expanding the value.
pub fn convert_base<T: Digit>(polynomial: &Positional<T>, q: T) -> Positional<T> {
    to_base(polynomial.evaluate(), q)
}

/// Multiplies two numbers directly in their base-`p` representation with the
/// multiplication scheme of Ibn Al-Banna.
///
/// For each output position `k` the valid digit pairs `a[i]·b[k-i]` are
/// accumulated onto the output digit one at a time, and every accumulation is
/// immediately followed by carry propagation (`divmod` by the base) cascading
/// into the subsequent positions. Partial products therefore interleave with
/// carries; the final digits are independent of that order, the intermediate
/// ones are not. The index arithmetic counts with [`Natural`].
pub fn ibn_al_banna<T: Digit>(a: &Positional<T>, b: &Positional<T>) -> Result<Positional<T>> {
    if a.base != b.base {
        bail!(
            "mismatched bases in digit multiplication: {:?} != {:?}",
            a.base,
            b.base
        );
    }

    let p = a.base.clone();
    let mut c = Positional::new(p.clone());
    if a.is_empty() && b.is_empty() {
        return Ok(c);
    }

    // Index of the highest digit/power.
    let n = Natural::new(a.len().max(b.len()) as u64).pred();
    for k in Count::new(Natural::ZERO, n * Natural::new(2)) {
        let m1 = k.difference(n).unwrap_or(Natural::ZERO);
        let m2 = if k <= n { k } else { n };
        for i in Count::new(m1, m2) {
            let ki = k.difference(i).expect("i <= k");
            let ck = a.digit(i.index()) * b.digit(ki.index()) + c.digit(k.index());
            let (mut carry, digit) = div_rem(ck, &p);
            c.set_digit(k.index(), digit);
            let mut j = k.succ();
            while !carry.is_zero() {
                let cj = c.digit(j.index()) + carry;
                let (q, r) = div_rem(cj, &p);
                carry = q;
                c.set_digit(j.index(), r);
                j = j.succ();
            }
        }
    }
    Ok(c)
}
