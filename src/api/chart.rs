use tracing::{debug, trace, warn};

use crate::core::{
    CoordinateMapper, GraphablePoint, PixelPoint, ScaleState, Viewport, project_polyline,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    LinePrimitive, PolylinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::axis_ticks::{self, AxisTickLabel};
use super::LineChartConfig;

/// Gap between a label and the axis it annotates.
const LABEL_GAP_PX: f64 = 4.0;

/// Region of the viewport the series is drawn in, after label gutters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }
}

/// Single-series line chart over a snapshot of caller data.
///
/// Construction copies the samples, sorts them by x and computes the scale
/// state once. Frame building only reads that state, so it can run once per
/// draw without side effects.
#[derive(Debug, Clone)]
pub struct LineChart<P: GraphablePoint> {
    points: Vec<P>,
    config: LineChartConfig<P::X, P::Y>,
    scale: ScaleState<P>,
}

impl<P: GraphablePoint> LineChart<P> {
    pub fn new(data: &[P], config: LineChartConfig<P::X, P::Y>) -> ChartResult<Self> {
        config.validate()?;
        let points = canonicalize_points(data);
        let scale = ScaleState::compute(&points, config.tick_counts())?;
        debug!(
            input_count = data.len(),
            point_count = points.len(),
            x_ticks = config.x_num_ticks,
            y_ticks = config.y_num_ticks,
            "line chart scale computed"
        );
        Ok(Self {
            points,
            config,
            scale,
        })
    }

    /// Replaces the series and recomputes the scale state.
    pub fn set_data(&mut self, data: &[P]) -> ChartResult<()> {
        let points = canonicalize_points(data);
        self.scale = ScaleState::compute(&points, self.config.tick_counts())?;
        self.points = points;
        debug!(point_count = self.points.len(), "line chart data replaced");
        Ok(())
    }

    /// Replaces the configuration and recomputes the scale state.
    ///
    /// On error the chart keeps its previous configuration.
    pub fn set_config(&mut self, config: LineChartConfig<P::X, P::Y>) -> ChartResult<()> {
        config.validate()?;
        self.scale = ScaleState::compute(&self.points, config.tick_counts())?;
        self.config = config;
        debug!(
            x_ticks = self.config.x_num_ticks,
            y_ticks = self.config.y_num_ticks,
            "line chart config replaced"
        );
        Ok(())
    }

    /// Samples in ascending x order.
    #[must_use]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig<P::X, P::Y> {
        &self.config
    }

    #[must_use]
    pub fn scale(&self) -> &ScaleState<P> {
        &self.scale
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper<'_, P> {
        CoordinateMapper::new(&self.scale)
    }

    pub fn plot_area(&self, viewport: Viewport) -> ChartResult<PlotArea> {
        let invalid = ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        };
        if !viewport.is_valid() {
            return Err(invalid);
        }

        let x_gutter = if self.config.show_x_axis_labels {
            self.config.x_label_gutter_px
        } else {
            0.0
        };
        let area = PlotArea {
            left: self.config.y_label_gutter_px,
            top: 0.0,
            width: f64::from(viewport.width) - self.config.y_label_gutter_px,
            height: f64::from(viewport.height) - x_gutter,
        };
        if area.width <= 0.0 || area.height <= 0.0 {
            return Err(invalid);
        }
        Ok(area)
    }

    /// Maps every sample into a `width_px` x `height_px` plot, in x order.
    pub fn project_polyline(&self, width_px: f64, height_px: f64) -> ChartResult<Vec<PixelPoint>> {
        project_polyline(&self.points, self.mapper(), width_px, height_px)
    }

    /// Y labels for a plot of `height_px`, already shifted up by the
    /// configured label adjustment. Empty for an empty chart.
    pub fn y_tick_labels(&self, height_px: f64) -> ChartResult<Vec<AxisTickLabel<P::Y>>> {
        axis_ticks::y_tick_labels(
            &self.scale,
            &self.config.y_axis_formatter,
            height_px,
            self.config.label_vertical_adjust_px,
        )
    }

    /// X labels for a plot of `width_px`. Empty for an empty chart.
    pub fn x_tick_labels(&self, width_px: f64) -> ChartResult<Vec<AxisTickLabel<P::X>>> {
        axis_ticks::x_tick_labels(&self.scale, &self.config.x_axis_formatter, width_px)
    }

    /// Builds the draw commands for one pass over `viewport`.
    ///
    /// An empty chart yields the two axis lines only. A non-empty chart whose
    /// data collapses to the origin on an axis fails with
    /// [`ChartError::DegenerateAxis`].
    pub fn build_render_frame(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        let area = self.plot_area(viewport)?;
        let config = &self.config;
        let frame = RenderFrame::new(viewport)
            .with_line(LinePrimitive::new(
                area.left,
                area.top,
                area.left,
                area.bottom(),
                config.axis_line_width_px,
                config.axis_color,
            ))
            .with_line(LinePrimitive::new(
                area.left,
                area.bottom(),
                area.right(),
                area.bottom(),
                config.axis_line_width_px,
                config.axis_color,
            ));

        if self.points.is_empty() {
            trace!("empty line chart, axes only");
            return Ok(frame);
        }

        let vertices = self
            .project_polyline(area.width, area.height)?
            .into_iter()
            .map(|point| PixelPoint::new(area.left + point.x, area.top + point.y))
            .collect();
        let mut frame = frame.with_polyline(PolylinePrimitive::new(
            vertices,
            config.line_width_px,
            config.point_color,
        ));

        for label in self.y_tick_labels(area.height)? {
            if label.text.is_empty() {
                continue;
            }
            frame = frame.with_text(TextPrimitive::new(
                label.text,
                area.left - LABEL_GAP_PX,
                area.top + label.offset_px,
                config.label_font_size_px,
                config.label_color,
                TextHAlign::Right,
            ));
        }

        if config.show_x_axis_labels {
            for label in self.x_tick_labels(area.width)? {
                if label.text.is_empty() {
                    continue;
                }
                frame = frame.with_text(TextPrimitive::new(
                    label.text,
                    area.left + label.offset_px,
                    area.bottom() + LABEL_GAP_PX,
                    config.label_font_size_px,
                    config.label_color,
                    TextHAlign::Center,
                ));
            }
        }

        trace!(
            vertices = self.points.len(),
            labels = frame.texts.len(),
            "line chart frame built"
        );
        Ok(frame)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R, viewport: Viewport) -> ChartResult<()> {
        let frame = self.build_render_frame(viewport)?;
        frame.validate()?;
        renderer.render(&frame)
    }
}

/// Copies caller samples, drops non-finite ones and stably sorts by x.
fn canonicalize_points<P: GraphablePoint>(data: &[P]) -> Vec<P> {
    let mut points: Vec<P> = data.iter().copied().filter(P::is_finite).collect();
    let filtered_count = data.len() - points.len();
    if filtered_count > 0 {
        warn!(
            filtered_count,
            point_count = points.len(),
            "dropped non-finite chart samples"
        );
    }
    points.sort_by(P::cmp_by_x);
    points
}
