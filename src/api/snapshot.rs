use serde::{Deserialize, Serialize};

use crate::core::{GraphablePoint, Quantity, TickCounts};
use crate::error::{ChartError, ChartResult};

use super::LineChart;

/// Serializable deterministic view of a chart's scale state, used by
/// regression tests and debugging tooling. Quantities are widened to `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub point_count: usize,
    pub points: Vec<(f64, f64)>,
    pub min_point: (f64, f64),
    pub max_point: (f64, f64),
    pub tick: (f64, f64),
    pub padding: (f64, f64),
    pub tick_counts: TickCounts,
}

impl<P: GraphablePoint> LineChart<P> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let scale = self.scale();
        ChartSnapshot {
            point_count: self.points().len(),
            points: self.points().iter().map(point_to_f64).collect(),
            min_point: point_to_f64(&scale.min_point()),
            max_point: point_to_f64(&scale.max_point()),
            tick: (scale.tick_x().to_f64(), scale.tick_y().to_f64()),
            padding: (scale.padding_x().to_f64(), scale.padding_y().to_f64()),
            tick_counts: scale.tick_counts(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}

impl ChartSnapshot {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}

fn point_to_f64<P: GraphablePoint>(point: &P) -> (f64, f64) {
    (point.x().to_f64(), point.y().to_f64())
}
