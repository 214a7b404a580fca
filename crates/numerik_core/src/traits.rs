use num_traits::{Float, FromPrimitive, Num};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the iterative methods.
/// Must support floating-point arithmetic, debug printing, and conversion from f64.
///
/// `f64` satisfies this out of the box; any higher-precision float type that
/// implements the `num_traits` float interface can be substituted to evaluate
/// the square-root and pi approximations beyond double precision.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A trait for integer-like types usable as digits and base of a positional
/// number system. Requires ring arithmetic with truncating division (for the
/// repeated-divmod loops) and an ordering for carry and termination checks.
///
/// Both the built-in integers and [`crate::natural::Natural`] satisfy this.
pub trait Digit: Num + PartialOrd + Clone + Debug {}

impl<T: Num + PartialOrd + Clone + Debug> Digit for T {}
