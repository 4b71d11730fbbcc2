//! Edge weight abstraction.
//!
//! Algorithms are generic over the edge weight type. Each weight type names a
//! wider [`WeightSum`] type used for path lengths and tree totals, so that
//! summing up to `n - 1` weights cannot overflow:
//!
//! | Weight | Sum    |
//! |--------|--------|
//! | `i32`  | `i64`  |
//! | `i64`  | `i128` |
//! | `u32`  | `u64`  |
//! | `u64`  | `u128` |
//! | `f32`  | `f64`  |
//! | `f64`  | `f64`  |
//!
//! Floating point weights are only partially ordered; graph construction
//! rejects NaN so that every stored weight compares totally.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

/// Accumulator type for sums of weights.
pub trait WeightSum: Copy + PartialOrd + Add<Output = Self> + Debug + Send + Sync + 'static {
    /// Additive identity (distance of a source to itself).
    const ZERO: Self;

    /// Sentinel for "unreachable". Never produced by a real sum.
    const INFINITY: Self;

    /// Whether this value is the unreachable sentinel.
    fn is_infinite(self) -> bool;

    /// Total order used by priority queues; NaN never reaches this point.
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// Edge weight type.
pub trait Weight: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Wider type used for sums of this weight.
    type Sum: WeightSum;

    /// Convert into the accumulator type.
    fn widen(self) -> Self::Sum;

    /// Whether the weight is strictly below zero.
    fn is_negative(self) -> bool;

    /// Whether the weight cannot be ordered against others (NaN).
    fn is_unordered(self) -> bool {
        false
    }
}

macro_rules! int_sum {
    ($($t:ty),*) => {$(
        impl WeightSum for $t {
            const ZERO: Self = 0;
            const INFINITY: Self = <$t>::MAX;

            fn is_infinite(self) -> bool {
                self == <$t>::MAX
            }
        }
    )*};
}

int_sum!(i64, i128, u64, u128);

impl WeightSum for f64 {
    const ZERO: Self = 0.0;
    const INFINITY: Self = f64::INFINITY;

    fn is_infinite(self) -> bool {
        self == f64::INFINITY
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

macro_rules! signed_weight {
    ($($t:ty => $sum:ty),*) => {$(
        impl Weight for $t {
            type Sum = $sum;

            fn widen(self) -> $sum {
                <$sum>::from(self)
            }

            fn is_negative(self) -> bool {
                self < 0
            }
        }
    )*};
}

macro_rules! unsigned_weight {
    ($($t:ty => $sum:ty),*) => {$(
        impl Weight for $t {
            type Sum = $sum;

            fn widen(self) -> $sum {
                <$sum>::from(self)
            }

            fn is_negative(self) -> bool {
                false
            }
        }
    )*};
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            type Sum = f64;

            fn widen(self) -> f64 {
                f64::from(self)
            }

            fn is_negative(self) -> bool {
                self < 0.0
            }

            fn is_unordered(self) -> bool {
                self.is_nan()
            }
        }
    )*};
}

signed_weight!(i32 => i64, i64 => i128);
unsigned_weight!(u32 => u64, u64 => u128);
float_weight!(f32, f64);
