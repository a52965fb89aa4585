use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

/// Marker trait for the scalar types a jet can carry (`f32`, `f64`).
///
/// Bundles the numeric traits the recurrences need. Jets and series are
/// built on top of it; they do not implement it themselves.
pub trait Float:
    NumFloat + FloatConst + FromPrimitive + Copy + Send + Sync + Default + Debug + Display + 'static
{
    /// Lift a small non-negative integer (a binomial coefficient or a
    /// count) into the float type.
    #[inline]
    fn from_count(n: u32) -> Self {
        <Self as FromPrimitive>::from_u32(n).unwrap_or_else(Self::nan)
    }
}

impl Float for f32 {}
impl Float for f64 {}
