mod axis_ticks;
mod chart;
mod config;
mod formatter;
mod snapshot;

pub use axis_ticks::AxisTickLabel;
pub use chart::{LineChart, PlotArea};
pub use config::LineChartConfig;
pub use formatter::AxisFormatter;
pub use snapshot::ChartSnapshot;
