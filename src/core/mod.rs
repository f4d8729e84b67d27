pub mod line_series;
pub mod mapper;
pub mod point;
pub mod primitives;
pub mod quantity;
pub mod scale;
pub mod types;

pub use line_series::project_polyline;
pub use mapper::CoordinateMapper;
pub use point::{DataPoint, GraphablePoint};
pub use quantity::Quantity;
pub use scale::{PADDING_RATIO, ScaleState, TickCounts};
pub use types::{Axis, PixelPoint, Viewport};
