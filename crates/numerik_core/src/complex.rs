use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A complex number as a pair of floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// The magnitude |z|.
    pub fn abs(self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }
}

impl fmt::Display for Complex {
    /// Prints `re` followed by the signed imaginary part, e.g. `1.5-2i`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}i", self.re, self.im)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        self + (-other)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    /// Division through the scaled conjugate. Division by zero is not
    /// guarded and yields non-finite components.
    fn div(self, other: Complex) -> Complex {
        let mod2 = other.abs() * other.abs();
        self * Complex::new(other.re / mod2, -other.im / mod2)
    }
}

/// The angle of `z` in the complex plane, normalized into `[0, 2π)`.
///
/// On the axes: a zero imaginary part with positive real part maps to 0, a
/// zero real part maps to `π/2` or `3π/2` depending on the sign of the
/// imaginary part, and the origin maps to 0.
pub fn phase(z: Complex) -> f64 {
    if z.re > 0.0 {
        if z.im >= 0.0 {
            (z.im / z.re).atan()
        } else {
            (z.im / z.re).atan() + 2.0 * PI
        }
    } else if z.re < 0.0 {
        (z.im / z.re).atan() + PI
    } else if z.im == 0.0 {
        0.0
    } else if z.im > 0.0 {
        PI / 2.0
    } else {
        3.0 * PI / 2.0
    }
}

/// The polar form `(r, φ)` of `z` with `φ` normalized into `[0, 2π)`.
pub fn polar(z: Complex) -> (f64, f64) {
    (z.abs(), phase(z))
}
