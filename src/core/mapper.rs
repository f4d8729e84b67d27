use crate::core::{Axis, GraphablePoint, PixelPoint, Quantity, ScaleState};
use crate::error::{ChartError, ChartResult};

/// Domain-to-pixel transform over a computed [`ScaleState`].
///
/// X grows to the right. Y is inverted because pixel rows grow downward
/// while domain values grow upward: `max_y` lands near the top edge.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper<'a, P: GraphablePoint> {
    scale: &'a ScaleState<P>,
}

impl<'a, P: GraphablePoint> CoordinateMapper<'a, P> {
    #[must_use]
    pub fn new(scale: &'a ScaleState<P>) -> Self {
        Self { scale }
    }

    /// `(value - min_x + padding_x) * width / (max_x - min_x + 2 * padding_x)`
    pub fn map_x(&self, value: P::X, width_px: f64) -> ChartResult<f64> {
        validate_extent(width_px)?;
        let (start, span) = self.x_window()?;
        Ok((value.to_f64() - start) * (width_px / span))
    }

    /// `(max_y - value + padding_y) * height / (max_y - min_y + 2 * padding_y)`
    pub fn map_y(&self, value: P::Y, height_px: f64) -> ChartResult<f64> {
        validate_extent(height_px)?;
        let (end, span) = self.y_window()?;
        Ok((end - value.to_f64()) * (height_px / span))
    }

    pub fn map_point(&self, point: &P, width_px: f64, height_px: f64) -> ChartResult<PixelPoint> {
        Ok(PixelPoint::new(
            self.map_x(point.x(), width_px)?,
            self.map_y(point.y(), height_px)?,
        ))
    }

    /// Inverse of [`Self::map_x`], in domain units as `f64`.
    pub fn unmap_x(&self, pixel: f64, width_px: f64) -> ChartResult<f64> {
        validate_extent(width_px)?;
        validate_pixel(pixel)?;
        let (start, span) = self.x_window()?;
        Ok(start + pixel * span / width_px)
    }

    /// Inverse of [`Self::map_y`], in domain units as `f64`.
    pub fn unmap_y(&self, pixel: f64, height_px: f64) -> ChartResult<f64> {
        validate_extent(height_px)?;
        validate_pixel(pixel)?;
        let (end, span) = self.y_window()?;
        Ok(end - pixel * span / height_px)
    }

    /// Left edge of the padded x window and its width.
    fn x_window(&self) -> ChartResult<(f64, f64)> {
        let min = self.scale.min_point().x().to_f64();
        let max = self.scale.max_point().x().to_f64();
        let padding = self.scale.padding_x().to_f64();
        let span = padded_span(min, max, padding, Axis::X)?;
        Ok((min - padding, span))
    }

    /// Top edge of the padded y window and its height.
    fn y_window(&self) -> ChartResult<(f64, f64)> {
        let min = self.scale.min_point().y().to_f64();
        let max = self.scale.max_point().y().to_f64();
        let padding = self.scale.padding_y().to_f64();
        let span = padded_span(min, max, padding, Axis::Y)?;
        Ok((max + padding, span))
    }
}

fn padded_span(min: f64, max: f64, padding: f64, axis: Axis) -> ChartResult<f64> {
    let span = (max - min) + 2.0 * padding;
    if span == 0.0 || !span.is_finite() {
        return Err(ChartError::DegenerateAxis { axis });
    }
    Ok(span)
}

fn validate_extent(extent_px: f64) -> ChartResult<()> {
    if !extent_px.is_finite() || extent_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "viewport extent must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_pixel(pixel: f64) -> ChartResult<()> {
    if !pixel.is_finite() {
        return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
    }
    Ok(())
}
