use std::cmp::Ordering;
use std::fmt::Debug;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Quantity;
use crate::core::primitives::datetime_to_unix_seconds;

/// One plottable sample with an x and a y quantity.
///
/// Points are ordered by `x` only. Two points with the same `x` compare as
/// equal no matter what their `y` values are, so a stable sort keeps their
/// input order.
pub trait GraphablePoint: Copy + Debug + Send + Sync {
    type X: Quantity;
    type Y: Quantity;

    fn x(&self) -> Self::X;

    fn y(&self) -> Self::Y;

    fn new(x: Self::X, y: Self::Y) -> Self;

    /// The origin, used as min/max of an empty chart.
    #[must_use]
    fn zero() -> Self {
        Self::new(Self::X::zero(), Self::Y::zero())
    }

    #[must_use]
    fn cmp_by_x(&self, other: &Self) -> Ordering {
        self.x().partial_cmp(&other.x()).unwrap_or(Ordering::Equal)
    }

    #[must_use]
    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint<X = f64, Y = f64> {
    pub x: X,
    pub y: Y,
}

impl<X: Quantity, Y: Quantity> DataPoint<X, Y> {
    #[must_use]
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }
}

impl DataPoint<f64, Decimal> {
    /// Builds a sample keyed by UTC time (unix seconds on x).
    #[must_use]
    pub fn from_time_price(time: DateTime<Utc>, price: Decimal) -> Self {
        Self {
            x: datetime_to_unix_seconds(time),
            y: price,
        }
    }
}

impl<X: Quantity, Y: Quantity> GraphablePoint for DataPoint<X, Y> {
    type X = X;
    type Y = Y;

    fn x(&self) -> X {
        self.x
    }

    fn y(&self) -> Y {
        self.y
    }

    fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }
}
