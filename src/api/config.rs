use serde::{Deserialize, Serialize};

use crate::core::{Quantity, TickCounts};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::AxisFormatter;

/// Public line chart configuration.
///
/// Only the style fields (colors, tick counts, stroke widths, gutters,
/// label toggles) serialize to JSON. Series data is never part of the
/// config. Formatters are code and are skipped too: a restored config gets
/// the default one-decimal formatters back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, bound = "")]
pub struct LineChartConfig<X: Quantity = f64, Y: Quantity = f64> {
    pub point_color: Color,
    pub x_num_ticks: usize,
    pub y_num_ticks: usize,
    pub line_width_px: f64,
    pub axis_color: Color,
    pub axis_line_width_px: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Width reserved left of the plot for y-axis labels.
    pub y_label_gutter_px: f64,
    /// Height reserved below the plot for x-axis labels.
    pub x_label_gutter_px: f64,
    /// Upward shift applied to y labels so the text centers on its tick.
    pub label_vertical_adjust_px: f64,
    pub show_x_axis_labels: bool,
    #[serde(skip)]
    pub x_axis_formatter: AxisFormatter<X>,
    #[serde(skip)]
    pub y_axis_formatter: AxisFormatter<Y>,
}

impl<X: Quantity, Y: Quantity> Default for LineChartConfig<X, Y> {
    fn default() -> Self {
        Self {
            point_color: Color::BLUE,
            x_num_ticks: 5,
            y_num_ticks: 5,
            line_width_px: 2.0,
            axis_color: Color::BLACK,
            axis_line_width_px: 1.0,
            label_color: Color::SECONDARY_GRAY,
            label_font_size_px: 12.0,
            y_label_gutter_px: 40.0,
            x_label_gutter_px: 20.0,
            label_vertical_adjust_px: 8.0,
            show_x_axis_labels: true,
            x_axis_formatter: AxisFormatter::default(),
            y_axis_formatter: AxisFormatter::default(),
        }
    }
}

impl<X: Quantity, Y: Quantity> LineChartConfig<X, Y> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config with explicit axis label formatters.
    #[must_use]
    pub fn with_formatters(
        x_axis_formatter: AxisFormatter<X>,
        y_axis_formatter: AxisFormatter<Y>,
    ) -> Self {
        Self {
            x_axis_formatter,
            y_axis_formatter,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_point_color(mut self, color: Color) -> Self {
        self.point_color = color;
        self
    }

    #[must_use]
    pub fn with_x_num_ticks(mut self, count: usize) -> Self {
        self.x_num_ticks = count;
        self
    }

    #[must_use]
    pub fn with_y_num_ticks(mut self, count: usize) -> Self {
        self.y_num_ticks = count;
        self
    }

    #[must_use]
    pub fn with_line_width_px(mut self, width: f64) -> Self {
        self.line_width_px = width;
        self
    }

    #[must_use]
    pub fn with_label_gutters(mut self, y_label_gutter_px: f64, x_label_gutter_px: f64) -> Self {
        self.y_label_gutter_px = y_label_gutter_px;
        self.x_label_gutter_px = x_label_gutter_px;
        self
    }

    #[must_use]
    pub fn with_show_x_axis_labels(mut self, show: bool) -> Self {
        self.show_x_axis_labels = show;
        self
    }

    #[must_use]
    pub fn with_x_axis_formatter(mut self, formatter: AxisFormatter<X>) -> Self {
        self.x_axis_formatter = formatter;
        self
    }

    #[must_use]
    pub fn with_y_axis_formatter(mut self, formatter: AxisFormatter<Y>) -> Self {
        self.y_axis_formatter = formatter;
        self
    }

    #[must_use]
    pub fn tick_counts(&self) -> TickCounts {
        TickCounts::new(self.x_num_ticks, self.y_num_ticks)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.tick_counts().validate()?;

        for (name, width) in [
            ("line width", self.line_width_px),
            ("axis line width", self.axis_line_width_px),
            ("label font size", self.label_font_size_px),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        for (name, length) in [
            ("y label gutter", self.y_label_gutter_px),
            ("x label gutter", self.x_label_gutter_px),
            ("label vertical adjust", self.label_vertical_adjust_px),
        ] {
            if !length.is_finite() || length < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        self.point_color.validate()?;
        self.axis_color.validate()?;
        self.label_color.validate()
    }

    /// Serializes the style fields to pretty JSON. Neither data nor
    /// formatters are included.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
