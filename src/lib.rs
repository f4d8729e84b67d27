//! line-chart: scale computation and pixel mapping for a single-series line chart.
//!
//! Given an ordered collection of 2D samples the crate derives axis bounds,
//! tick increments and edge padding, maps samples into a viewport, and emits
//! a backend-agnostic [`render::RenderFrame`] with the polyline, the axes and
//! the formatted tick labels. Drawing that frame is left to a
//! [`render::Renderer`] supplied by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AxisFormatter, LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
