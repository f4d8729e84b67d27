use thiserror::Error;

use crate::core::Axis;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{axis} tick count must be >= 2, got {count}")]
    InvalidTickCount { axis: Axis, count: usize },

    #[error("{axis} axis has a zero-width span (range and padding are both zero)")]
    DegenerateAxis { axis: Axis },
}
