pub mod complex;
pub mod contfrac;
pub mod cordic;
pub mod expansion;
pub mod fixpoint;
pub mod gcd;
pub mod natural;
pub mod positional;
pub mod primes;
pub mod quadrature;
pub mod rational;
pub mod rounding;
pub mod sequences;
pub mod series;
pub mod trace;
/// The `numerik_core` crate collects the classical numerical methods of an
/// introductory mathematics text, one self-contained algorithm per function.
///
/// Key components:
/// - **Traits**: `Scalar` (float abstraction for the iterative methods) and
///   `Digit` (integer abstraction for the positional number system).
/// - **Number types**: axiomatic `Natural`, exact `Rational`, `Complex` with
///   polar form, and the arbitrary-base `Positional` representation.
/// - **Iterations**: root finding (Heron, fixed point, bisection, Newton,
///   regula falsi, digit-by-digit roots) and π approximations (Archimedes,
///   Madhava, Machin, Brent–Salamin, Ramanujan).
/// - **Trace**: an explicit per-call recorder for per-iteration diagnostics.
pub mod traits;
