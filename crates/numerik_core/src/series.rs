//! Approximations of π through polygon bounds, series, and AGM iteration.
//!
//! Every routine runs a fixed number of terms or iterations; there is no
//! adaptive stopping. Wherever the underlying recurrence needs a square root,
//! the function is injected by the caller, so the routines evaluate unchanged
//! with an arbitrary-precision scalar type and its matching root function.

use crate::trace::{self, StepTrace};
use crate::traits::Scalar;
use serde::Serialize;

/// Lower and upper perimeter bounds produced by the Archimedes iterations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolygonBounds<T> {
    pub lower: T,
    pub upper: T,
}

/// First Archimedes variant: perimeter recurrences
/// `U_{n+1} = 2·u_n·U_n / (u_n + U_n)` (harmonic mean) and
/// `u_{n+1} = √(U_{n+1}·u_n)` (geometric mean), starting from the hexagon.
/// Trace rows hold the half-perimeters `(u/2, U/2)`, which bracket π.
pub fn archimedes1<T, F>(iters: usize, sqrt_fn: F, mut trace: Option<&mut StepTrace>) -> PolygonBounds<T>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let two = T::from_f64(2.0).unwrap();
    let three = T::from_f64(3.0).unwrap();
    let four = T::from_f64(4.0).unwrap();

    trace::begin(&mut trace);
    trace::record(&mut trace, &[three, two * sqrt_fn(three)]);

    let mut lower = T::from_f64(6.0).unwrap();
    let mut upper = four * sqrt_fn(three);
    for _ in 0..iters {
        upper = two * lower * upper / (lower + upper);
        lower = sqrt_fn(upper * lower);
        trace::record(&mut trace, &[lower / two, upper / two]);
    }
    PolygonBounds { lower, upper }
}

/// Vertex count of the polygon obtained from `n` halvings of the hexagon.
fn vertices<T: Scalar>(n: usize) -> T {
    T::from_u64(6 * (1u64 << n)).unwrap()
}

/// The circumscribed edge length `t = 2s / √(4 − s²)` matching an inscribed
/// edge length `s`.
fn circumscribed_edge<T: Scalar, F: Fn(T) -> T>(s: T, sqrt_fn: &F) -> T {
    let two = T::from_f64(2.0).unwrap();
    let four = T::from_f64(4.0).unwrap();
    two * s / sqrt_fn(four - s * s)
}

/// Second Archimedes variant: edge recurrence
/// `s_{n+1} = √(2 − √(4 − s_n²))` with `s_0 = 1`. The bounds are
/// `u = N·s` and `U = N·t` with `N` the vertex count. The nested subtraction
/// loses significance once `s` is small. Trace rows: half-perimeters.
pub fn archimedes2<T, F>(iters: usize, sqrt_fn: F, mut trace: Option<&mut StepTrace>) -> PolygonBounds<T>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let two = T::from_f64(2.0).unwrap();
    let four = T::from_f64(4.0).unwrap();

    trace::begin(&mut trace);
    let n0: T = vertices(0);
    trace::record(
        &mut trace,
        &[n0 / two, n0 * circumscribed_edge(T::one(), &sqrt_fn) / two],
    );

    let mut s = T::one();
    for n in 0..iters {
        s = sqrt_fn(two - sqrt_fn(four - s * s));
        let nv: T = vertices(n + 1);
        trace::record(
            &mut trace,
            &[nv * s / two, nv * circumscribed_edge(s, &sqrt_fn) / two],
        );
    }
    let nv: T = vertices(iters);
    PolygonBounds {
        lower: nv * s,
        upper: nv * circumscribed_edge(s, &sqrt_fn),
    }
}

/// Third Archimedes variant: the algebraically equivalent but numerically
/// stable edge recurrence `s_{n+1} = s_n / √(2 + √(4 − s_n²))`.
/// Trace rows: half-perimeters.
pub fn archimedes3<T, F>(iters: usize, sqrt_fn: F, mut trace: Option<&mut StepTrace>) -> PolygonBounds<T>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let two = T::from_f64(2.0).unwrap();
    let four = T::from_f64(4.0).unwrap();

    trace::begin(&mut trace);
    let n0: T = vertices(0);
    trace::record(
        &mut trace,
        &[n0 / two, n0 * circumscribed_edge(T::one(), &sqrt_fn) / two],
    );

    let mut s = T::one();
    for n in 0..iters {
        s = s / sqrt_fn(two + sqrt_fn(four - s * s));
        let nv: T = vertices(n + 1);
        trace::record(
            &mut trace,
            &[nv * s / two, nv * circumscribed_edge(s, &sqrt_fn) / two],
        );
    }
    let nv: T = vertices(iters);
    PolygonBounds {
        lower: nv * s,
        upper: nv * circumscribed_edge(s, &sqrt_fn),
    }
}

/// Partial sums of Madhava's series for π/√12:
/// `s_0 = 1`, `s_{n+1} = s_n + (−1)^{n+1} / (3^{n+1}·(2n+3))`.
/// Trace rows: `(s, s·√12)`.
pub fn madhava(n: usize, mut trace: Option<&mut StepTrace>) -> f64 {
    let sqrt12 = 12f64.sqrt();
    trace::begin(&mut trace);
    trace::record(&mut trace, &[1.0, sqrt12]);

    let (mut sign, mut pow3) = (1.0f64, 1.0f64);
    let mut s = 1.0;
    for k in 0..n {
        sign = -sign;
        pow3 = 3.0 * pow3;
        s += sign / (pow3 * (2 * k + 3) as f64);
        trace::record(&mut trace, &[s, s * sqrt12]);
    }
    s
}

/// Taylor expansion of atan around 0, evaluated with `n` terms.
pub fn atan_taylor(x: f64, n: usize) -> f64 {
    let (mut sign, mut power) = (1.0f64, x);
    let mut arctan = 0.0;
    for k in 0..n {
        arctan += sign * power / (2 * k + 1) as f64;
        sign = -sign;
        power = power * x * x;
    }
    arctan
}

/// Machin's formula `π/4 = 4·atan(1/5) − atan(1/239)`, with both arctangents
/// evaluated through their Taylor expansions with `n` terms.
pub fn machin(n: usize) -> f64 {
    4.0 * atan_taylor(1.0 / 5.0, n) - atan_taylor(1.0 / 239.0, n)
}

/// The π approximation `p_k = (x+y)² / (2s)` formed from the Brent–Salamin
/// iterates.
fn brent_salamin_pi<T: Scalar>(x: T, y: T, s: T) -> T {
    let two = T::from_f64(2.0).unwrap();
    (x + y) * (x + y) / (two * s)
}

/// Brent–Salamin arithmetic-geometric-mean iteration, quadratically
/// convergent to π. Trace rows: `(x, y, s, p_k)`.
pub fn brent_salamin<T, F>(n: usize, sqrt_fn: F, mut trace: Option<&mut StepTrace>) -> T
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let two = T::from_f64(2.0).unwrap();
    let half = T::from_f64(0.5).unwrap();

    let (mut x, mut y, mut s) = (T::one(), T::one() / sqrt_fn(two), half);
    trace::begin(&mut trace);
    trace::record(&mut trace, &[x, y, s, brent_salamin_pi(x, y, s)]);

    for k in 0..n {
        let x_new = (x + y) / two;
        y = sqrt_fn(x * y);
        let dx = x_new - x;
        s = s - T::from_u64(1u64 << (k + 1)).unwrap() * dx * dx;
        x = x_new;
        trace::record(&mut trace, &[x, y, s, brent_salamin_pi(x, y, s)]);
    }
    brent_salamin_pi(x, y, s)
}

/// The `k`-th term of the Ramanujan series, computed from the carried
/// factorial and power values to avoid recomputation.
fn ramanujan_term<T: Scalar>(k: usize, fac_k: T, fac_4k: T, pow_4k: T) -> T {
    let fac_k_2 = fac_k * fac_k;
    fac_4k * T::from_usize(1103 + 26390 * k).unwrap() / (fac_k_2 * fac_k_2 * pow_4k)
}

/// Ramanujan's series for 1/π, evaluated with `n + 1` terms. The factorials
/// `k!`, `(4k)!` and the power `396^{4k}` are updated incrementally.
/// Trace rows: `(coef·s, 1/(coef·s))`.
pub fn ramanujan<T, F>(n: usize, sqrt_fn: F, mut trace: Option<&mut StepTrace>) -> T
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let two = T::from_f64(2.0).unwrap();
    let coef = two * sqrt_fn(two) / T::from_u64(9801).unwrap();
    let pow_396_4 = T::from_u64(396u64.pow(4)).unwrap();

    let (mut fac_k, mut fac_4k, mut pow_4k) = (T::one(), T::one(), T::one());
    let mut s = ramanujan_term(0, fac_k, fac_4k, pow_4k);

    trace::begin(&mut trace);
    trace::record(&mut trace, &[coef * s, T::one() / (coef * s)]);

    for k in 1..=n {
        fac_k = fac_k * T::from_usize(k).unwrap();
        pow_4k = pow_4k * pow_396_4;
        fac_4k = fac_4k * T::from_usize(4 * k * (4 * k - 1) * (4 * k - 2) * (4 * k - 3)).unwrap();
        s = s + ramanujan_term(k, fac_k, fac_4k, pow_4k);
        trace::record(&mut trace, &[coef * s, T::one() / (coef * s)]);
    }
    coef * s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_brackets_pi(bounds: PolygonBounds<f64>) {
        assert!(bounds.lower / 2.0 <= PI);
        assert!(PI <= bounds.upper / 2.0);
        assert!((bounds.lower / 2.0 - PI).abs() < 2e-7);
        assert!((bounds.upper / 2.0 - PI).abs() < 3e-7);
    }

    #[test]
    fn archimedes_bounds_bracket_pi() {
        // After 10 halvings the truncation error still dominates the float
        // error, so the bounds provably bracket pi.
        assert_brackets_pi(archimedes1(10, f64::sqrt, None));
        assert_brackets_pi(archimedes3(10, f64::sqrt, None));

        // After 20 halvings both bounds are pi to almost machine precision.
        for bounds in [archimedes1(20, f64::sqrt, None), archimedes3(20, f64::sqrt, None)] {
            assert!((bounds.lower / 2.0 - PI).abs() < 1e-12);
            assert!((bounds.upper / 2.0 - PI).abs() < 1e-12);
        }
    }

    #[test]
    fn archimedes_variants_agree_for_few_iterations() {
        // The second formulation cancels significant digits, so only the
        // first iterations are comparable across all three variants.
        let b1 = archimedes1::<f64, _>(8, f64::sqrt, None);
        let b2 = archimedes2::<f64, _>(8, f64::sqrt, None);
        let b3 = archimedes3::<f64, _>(8, f64::sqrt, None);
        assert!((b1.lower - b2.lower).abs() < 1e-9);
        assert!((b2.lower - b3.lower).abs() < 1e-9);
        assert!((b1.upper - b3.upper).abs() < 1e-9);
    }

    #[test]
    fn archimedes_records_bounds_per_iteration() {
        let mut trace = StepTrace::new();
        archimedes1::<f64, _>(5, f64::sqrt, Some(&mut trace));
        assert_eq!(trace.len(), 6);
        for row in trace.steps() {
            assert!(row[0] <= row[1]);
        }
    }

    #[test]
    fn madhava_converges_to_pi_over_sqrt12() {
        let s = madhava(30, None);
        assert!((s * 12f64.sqrt() - PI).abs() < 1e-14);
    }

    #[test]
    fn machin_reaches_machine_precision_quickly() {
        assert!((4.0 * machin(4) - PI).abs() < 9e-7);
        assert!((4.0 * machin(10) - PI).abs() <= 1e-15);
    }

    #[test]
    fn atan_taylor_matches_library_atan_inside_radius() {
        for x in [0.1, 0.2, 1.0 / 5.0, 1.0 / 239.0] {
            assert!((atan_taylor(x, 40) - x.atan()).abs() < 1e-15);
        }
    }

    #[test]
    fn brent_salamin_converges_quadratically() {
        let pi: f64 = brent_salamin(4, f64::sqrt, None);
        assert!((pi - PI).abs() < 1e-10);
    }

    #[test]
    fn ramanujan_approximates_one_over_pi() {
        let inv_pi: f64 = ramanujan(2, f64::sqrt, None);
        assert!((1.0 / inv_pi - PI).abs() < 1e-12);
    }

    #[test]
    fn ramanujan_records_one_row_per_term() {
        let mut trace = StepTrace::new();
        let _: f64 = ramanujan(3, f64::sqrt, Some(&mut trace));
        assert_eq!(trace.len(), 4);
    }
}
