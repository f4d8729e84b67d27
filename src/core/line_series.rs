#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{CoordinateMapper, GraphablePoint, PixelPoint};
use crate::error::ChartResult;

/// Projects x-sorted samples into the vertices of one polyline.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output. An empty input yields an
/// empty polyline.
pub fn project_polyline<P: GraphablePoint>(
    points: &[P],
    mapper: CoordinateMapper<'_, P>,
    width_px: f64,
    height_px: f64,
) -> ChartResult<Vec<PixelPoint>> {
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .map(|point| mapper.map_point(point, width_px, height_px))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .map(|point| mapper.map_point(point, width_px, height_px))
            .collect()
    }
}
