//! Cost algebras — the `(compare, add, zero, infinity)` operation set that
//! parameterizes every weighted graph algorithm over an opaque weight type.
//!
//! An algebra is a *value*, not just a type bound: algorithms receive
//! `&impl CostAlgebra`, so a caller can bind custom multi-field weights or
//! weights whose ordering depends on runtime configuration. Two ready-made
//! algebras cover the common cases:
//!
//! - [`SaturatingAlgebra`] for integer weights (`u32`, `i64`, ...), where
//!   `infinity` is the type's maximum and addition saturates so that
//!   relaxation can never wrap around.
//! - [`FloatAlgebra`] for `f32`/`f64`, where `infinity` is IEEE infinity.
//!
//! Algorithms interpret costs through these four operations only. They assume
//! `infinity` is absorbing under `compare` (nothing compares less than it
//! except itself) and that `add(x, zero) == x`. Overflow policy belongs to
//! the algebra, not the engine.

use core::cmp::Ordering;
use core::marker::PhantomData;

use num_traits::{Bounded, Float, SaturatingAdd, Zero};

/// The weight-type contract consumed by every weighted graph algorithm.
///
/// Implementations must uphold two laws:
/// - `compare(infinity(), x)` is `Greater` for every `x != infinity()`, and
///   `compare(infinity(), infinity())` is `Equal`;
/// - `add(x, zero())` compares `Equal` to `x`.
pub trait CostAlgebra {
    /// The opaque weight type.
    type Cost: Clone;

    /// Total order over costs.
    fn compare(&self, a: &Self::Cost, b: &Self::Cost) -> Ordering;

    /// Accumulates two costs.
    fn add(&self, a: &Self::Cost, b: &Self::Cost) -> Self::Cost;

    /// The additive identity (the cost of an empty path).
    fn zero(&self) -> Self::Cost;

    /// The unreachable sentinel.
    fn infinity(&self) -> Self::Cost;

    /// Returns `true` if `a` compares strictly less than `b`.
    #[inline]
    fn less(&self, a: &Self::Cost, b: &Self::Cost) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Integer cost algebra with saturating accumulation.
///
/// `infinity` is `T::max_value()`; `add` saturates at the bounds, so
/// `add(infinity, w) == infinity` holds and relaxation against an unreached
/// vertex stays well-defined without a widened accumulator type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaturatingAlgebra<T>(PhantomData<T>);

impl<T> SaturatingAlgebra<T> {
    /// Creates the algebra.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CostAlgebra for SaturatingAlgebra<T>
where
    T: Clone + Ord + Zero + Bounded + SaturatingAdd,
{
    type Cost = T;

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn add(&self, a: &T, b: &T) -> T {
        a.saturating_add(b)
    }

    #[inline]
    fn zero(&self) -> T {
        T::zero()
    }

    #[inline]
    fn infinity(&self) -> T {
        T::max_value()
    }
}

/// Floating-point cost algebra.
///
/// `infinity` is IEEE infinity. NaN weights are ordered after every other
/// value (including infinity), which keeps `compare` total; feeding NaN
/// weights to an algorithm is a caller bug the algebra merely tolerates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatAlgebra<T>(PhantomData<T>);

impl<T> FloatAlgebra<T> {
    /// Creates the algebra.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Float> CostAlgebra for FloatAlgebra<T> {
    type Cost = T;

    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match a.partial_cmp(b) {
            Some(ord) => ord,
            // At least one NaN: order NaN last.
            None => match (a.is_nan(), b.is_nan()) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            },
        }
    }

    #[inline]
    fn add(&self, a: &T, b: &T) -> T {
        *a + *b
    }

    #[inline]
    fn zero(&self) -> T {
        T::zero()
    }

    #[inline]
    fn infinity(&self) -> T {
        T::infinity()
    }
}
