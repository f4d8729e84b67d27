use serde::{Deserialize, Serialize};

use crate::core::{Axis, GraphablePoint, Quantity};
use crate::error::{ChartError, ChartResult};

/// Fraction of the data range kept as margin on each side of the plot.
///
/// Coincident data has no range, so it is padded by this fraction of the
/// coordinate's magnitude instead. Padding is therefore never negative.
pub const PADDING_RATIO: f64 = 0.10;

/// Number of labeled graduations per axis, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickCounts {
    pub x: usize,
    pub y: usize,
}

impl Default for TickCounts {
    fn default() -> Self {
        Self { x: 5, y: 5 }
    }
}

impl TickCounts {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Each axis needs at least two ticks so the range can be divided into
    /// `count - 1` increments.
    pub fn validate(self) -> ChartResult<Self> {
        for (axis, count) in [(Axis::X, self.x), (Axis::Y, self.y)] {
            if count < 2 {
                return Err(ChartError::InvalidTickCount { axis, count });
            }
        }
        Ok(self)
    }
}

/// Bounds, tick increments and padding derived from one point collection.
///
/// `min_point` and `max_point` are the corners of the bounding box, so they
/// may combine coordinates of different samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState<P: GraphablePoint> {
    min_point: P,
    max_point: P,
    tick_x: P::X,
    tick_y: P::Y,
    padding_x: P::X,
    padding_y: P::Y,
    tick_counts: TickCounts,
    empty: bool,
}

impl<P: GraphablePoint> ScaleState<P> {
    /// Computes the scale state in one pass over `points`.
    ///
    /// Input order does not matter. Fails with
    /// [`ChartError::InvalidTickCount`] when an axis asks for fewer than two
    /// ticks.
    pub fn compute(points: &[P], tick_counts: TickCounts) -> ChartResult<Self> {
        let tick_counts = tick_counts.validate()?;

        let Some(first) = points.first() else {
            return Ok(Self::empty(tick_counts));
        };

        let mut min_x = first.x();
        let mut min_y = first.y();
        let mut max_x = first.x();
        let mut max_y = first.y();
        for point in points {
            let (x, y) = (point.x(), point.y());
            if x < min_x {
                min_x = x;
            }
            if x > max_x {
                max_x = x;
            }
            if y < min_y {
                min_y = y;
            }
            if y > max_y {
                max_y = y;
            }
        }

        // Native subtraction overflows for bounds far apart in i32 or Decimal.
        let range_x = max_x.to_f64() - min_x.to_f64();
        let range_y = max_y.to_f64() - min_y.to_f64();

        let tick_x = P::X::from_f64(range_x / (tick_counts.x - 1) as f64);
        let tick_y = P::Y::from_f64(range_y / (tick_counts.y - 1) as f64);

        let (padding_x, padding_y) = if range_x == 0.0 && range_y == 0.0 {
            (
                P::X::from_f64(first.x().to_f64().abs() * PADDING_RATIO),
                P::Y::from_f64(first.y().to_f64().abs() * PADDING_RATIO),
            )
        } else {
            (
                P::X::from_f64(range_x * PADDING_RATIO),
                P::Y::from_f64(range_y * PADDING_RATIO),
            )
        };

        Ok(Self {
            min_point: P::new(min_x, min_y),
            max_point: P::new(max_x, max_y),
            tick_x,
            tick_y,
            padding_x,
            padding_y,
            tick_counts,
            empty: false,
        })
    }

    fn empty(tick_counts: TickCounts) -> Self {
        Self {
            min_point: P::zero(),
            max_point: P::zero(),
            tick_x: P::X::zero(),
            tick_y: P::Y::zero(),
            padding_x: P::X::zero(),
            padding_y: P::Y::zero(),
            tick_counts,
            empty: true,
        }
    }

    #[must_use]
    pub fn min_point(&self) -> P {
        self.min_point
    }

    #[must_use]
    pub fn max_point(&self) -> P {
        self.max_point
    }

    #[must_use]
    pub fn tick_x(&self) -> P::X {
        self.tick_x
    }

    #[must_use]
    pub fn tick_y(&self) -> P::Y {
        self.tick_y
    }

    #[must_use]
    pub fn padding_x(&self) -> P::X {
        self.padding_x
    }

    #[must_use]
    pub fn padding_y(&self) -> P::Y {
        self.padding_y
    }

    /// Width of the bounding box, evaluated in `f64`.
    #[must_use]
    pub fn range_x(&self) -> f64 {
        self.max_point.x().to_f64() - self.min_point.x().to_f64()
    }

    /// Height of the bounding box, evaluated in `f64`.
    #[must_use]
    pub fn range_y(&self) -> f64 {
        self.max_point.y().to_f64() - self.min_point.y().to_f64()
    }

    #[must_use]
    pub fn tick_counts(&self) -> TickCounts {
        self.tick_counts
    }

    /// `true` when computed from an empty collection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

#[cfg(test)]
mod tests {
    use super::{ScaleState, TickCounts};
    use crate::core::DataPoint;

    #[test]
    fn tick_counts_below_two_are_rejected() {
        assert!(TickCounts::new(1, 5).validate().is_err());
        assert!(TickCounts::new(5, 0).validate().is_err());
        assert!(TickCounts::new(2, 2).validate().is_ok());
    }

    #[test]
    fn coincident_points_pad_by_coordinate_magnitude() {
        let points: [DataPoint<f64, f64>; 2] = [DataPoint::new(-10.0, 4.0), DataPoint::new(-10.0, 4.0)];
        let state = ScaleState::compute(&points, TickCounts::default()).expect("scale");

        assert!((state.padding_x() - 1.0).abs() <= 1e-12);
        assert!((state.padding_y() - 0.4).abs() <= 1e-12);
        assert_eq!(state.tick_x(), 0.0);
        assert_eq!(state.tick_y(), 0.0);
    }
}
