use std::fmt::Debug;
use std::ops::{Add, Sub};

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Numeric value that can be plotted on one chart axis.
///
/// All derived chart arithmetic that is not a plain add/subtract (tick
/// division, padding ratios, pixel mapping) runs in `f64` and is converted
/// back through [`Quantity::from_f64`], so integer quantities truncate the
/// same way on every axis.
pub trait Quantity:
    Copy + PartialOrd + Debug + Add<Output = Self> + Sub<Output = Self> + Send + Sync + 'static
{
    fn to_f64(self) -> f64;

    fn from_f64(value: f64) -> Self;

    #[must_use]
    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    /// Scalar multiplication evaluated in `f64`.
    #[must_use]
    fn scaled(self, factor: f64) -> Self {
        Self::from_f64(self.to_f64() * factor)
    }

    #[must_use]
    fn is_finite(self) -> bool {
        self.to_f64().is_finite()
    }
}

impl Quantity for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Quantity for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

macro_rules! impl_integer_quantity {
    ($($ty:ty),*) => {
        $(
            impl Quantity for $ty {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                // `as` truncates toward zero and saturates at the type bounds.
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_integer_quantity!(i32, i64, u32);

impl Quantity for Decimal {
    fn to_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// NaN and infinities have no decimal representation and become zero.
    fn from_f64(value: f64) -> Self {
        <Decimal as FromPrimitive>::from_f64(value).unwrap_or(Decimal::ZERO)
    }

    fn zero() -> Self {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_from_f64_truncates_toward_zero() {
        assert_eq!(<i32 as Quantity>::from_f64(4.9), 4);
        assert_eq!(<i32 as Quantity>::from_f64(-4.9), -4);
        assert_eq!(<u32 as Quantity>::from_f64(-1.0), 0);
    }

    #[test]
    fn scaled_runs_in_floating_point() {
        assert_eq!(3_i64.scaled(0.1), 0);
        assert!((3.0_f64.scaled(0.1) - 0.3).abs() <= 1e-12);
    }

    #[test]
    fn decimal_non_finite_maps_to_zero() {
        assert_eq!(<Decimal as Quantity>::from_f64(f64::NAN), Decimal::ZERO);
        assert_eq!(<Decimal as Quantity>::from_f64(f64::INFINITY), Decimal::ZERO);
    }
}
