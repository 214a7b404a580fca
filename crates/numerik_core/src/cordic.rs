//! Arithmetic restricted to addition, subtraction and digit shifts: the
//! shift-add multiplication/division schemes, the CORDIC rotation algorithm
//! for sine and cosine, and the Russian-peasant multiplication.

use std::f64::consts::PI;

fn sgn(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Multiplies `a · b` using only addition, subtraction, multiplication by the
/// base and digit shifts (division by the base). The shift value consumes the
/// digits of `b` from the `p⁰` place downward until the remaining part drops
/// below `eps`.
pub fn shift_mul(a: f64, b: f64, p: u32, eps: f64) -> f64 {
    let sign = (if a > 0.0 { 1.0 } else { -1.0 }) * (if b > 0.0 { 1.0 } else { -1.0 });
    let a = a.abs();
    let (mut x, mut y, mut pp) = (0.0f64, b.abs(), 1.0f64);
    while y.abs() > eps {
        while y - pp >= 0.0 {
            y -= pp;
            x += a * pp;
        }
        pp /= p as f64;
    }
    sign * x
}

/// Divides `a / b` using only addition, subtraction, multiplication by the
/// base and digit shifts. `b` must be nonzero.
pub fn shift_div(a: f64, b: f64, p: u32, eps: f64) -> f64 {
    let sign = (if a > 0.0 { 1.0 } else { -1.0 }) * (if b > 0.0 { 1.0 } else { -1.0 });
    let (mut x, y, mut z, mut pp) = (a.abs(), b.abs(), 0.0f64, 1.0f64);
    while x.abs() > eps {
        while x - y * pp > 0.0 {
            x -= y * pp;
            z += pp;
        }
        pp /= p as f64;
    }
    sign * z
}

/// The CORDIC gain `k_N = Π 1/√(1 + 2^{-2j})`. Real implementations hard-code
/// this value per table size.
fn scale_factor(n: usize) -> f64 {
    (0..=n)
        .map(|j| 1.0 / (1.0 + 2f64.powi(-2 * j as i32)).sqrt())
        .product()
}

/// Lookup table of the partial angles `x_j = atan(2^{-j})`. Real
/// implementations hard-code the table.
fn angle_table(n: usize) -> Vec<f64> {
    (0..=n).map(|j| 2f64.powi(-(j as i32)).atan()).collect()
}

/// CORDIC rotation computing `(sin x, cos x)` with `n` table angles.
///
/// Arguments outside `[−π/2, π/2]` are reduced by a half turn first, flipping
/// both signs.
pub fn sincos(x: f64, n: usize) -> (f64, f64) {
    if x.abs() > PI / 2.0 {
        let (s, c) = sincos(x - sgn(x) * PI, n);
        return (-s, -c);
    }

    let angles = angle_table(n);
    let k_n = scale_factor(n);
    let (mut c, mut s, mut z, mut pp) = (1.0f64, 0.0f64, x, 1.0f64);
    for angle in angles.iter().take(n) {
        let k = sgn(z) * pp;
        let (c_next, s_next) = (c - k * s, s + k * c);
        c = c_next;
        s = s_next;
        z -= sgn(z) * angle;
        pp /= 2.0;
    }
    (k_n * s, k_n * c)
}

/// Russian-peasant multiplication: the product of two natural numbers using
/// only halving (rounding down) and doubling.
pub fn russian_mult(a: u64, b: u64) -> u64 {
    let (mut a, mut b, mut m) = (a, b, 0u64);
    while a != 0 {
        if a % 2 == 1 {
            m += b;
        }
        a /= 2;
        b *= 2;
    }
    m
}

/// Recursive variant of [`russian_mult`]. Requires `a >= 1`.
pub fn russian_mult_rec(a: u64, b: u64) -> u64 {
    if a == 1 {
        b
    } else {
        let mut m = 2 * russian_mult_rec(a / 2, b);
        if a % 2 == 1 {
            m += b;
        }
        m
    }
}
