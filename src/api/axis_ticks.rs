use crate::core::{CoordinateMapper, GraphablePoint, Quantity, ScaleState};
use crate::error::ChartResult;

use super::AxisFormatter;

/// One formatted axis graduation.
///
/// `offset_px` is measured along the axis inside the plot area: from the
/// left edge for x labels, from the top edge for y labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTickLabel<T> {
    pub value: T,
    pub text: String,
    pub offset_px: f64,
}

/// Y labels run top-down: `max_y - index * tick_y` for each tick index.
///
/// Label values are evaluated in `f64` so wide integer or decimal bounds
/// cannot overflow the quantity's own arithmetic.
pub(super) fn y_tick_labels<P: GraphablePoint>(
    scale: &ScaleState<P>,
    formatter: &AxisFormatter<P::Y>,
    height_px: f64,
    vertical_adjust_px: f64,
) -> ChartResult<Vec<AxisTickLabel<P::Y>>> {
    if scale.is_empty() {
        return Ok(Vec::new());
    }

    let mapper = CoordinateMapper::new(scale);
    let max_y = scale.max_point().y().to_f64();
    let tick_y = scale.tick_y().to_f64();
    (0..scale.tick_counts().y)
        .map(|index| {
            let value = P::Y::from_f64(max_y - tick_y * index as f64);
            Ok(AxisTickLabel {
                value,
                text: formatter.format(value),
                offset_px: mapper.map_y(value, height_px)? - vertical_adjust_px,
            })
        })
        .collect()
}

/// X labels run left to right: `min_x + index * tick_x`.
pub(super) fn x_tick_labels<P: GraphablePoint>(
    scale: &ScaleState<P>,
    formatter: &AxisFormatter<P::X>,
    width_px: f64,
) -> ChartResult<Vec<AxisTickLabel<P::X>>> {
    if scale.is_empty() {
        return Ok(Vec::new());
    }

    let mapper = CoordinateMapper::new(scale);
    let min_x = scale.min_point().x().to_f64();
    let tick_x = scale.tick_x().to_f64();
    (0..scale.tick_counts().x)
        .map(|index| {
            let value = P::X::from_f64(min_x + tick_x * index as f64);
            Ok(AxisTickLabel {
                value,
                text: formatter.format(value),
                offset_px: mapper.map_x(value, width_px)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::y_tick_labels;
    use crate::api::AxisFormatter;
    use crate::core::{DataPoint, ScaleState, TickCounts};

    #[test]
    fn y_labels_descend_from_max() {
        let points = [DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 40.0)];
        let scale = ScaleState::compute(&points, TickCounts::new(2, 5)).expect("scale");
        let labels =
            y_tick_labels(&scale, &AxisFormatter::decimal(0), 100.0, 0.0).expect("labels");

        let texts: Vec<&str> = labels.iter().map(|label| label.text.as_str()).collect();
        assert_eq!(texts, vec!["40", "30", "20", "10", "0"]);
        assert!(labels.windows(2).all(|pair| pair[0].offset_px < pair[1].offset_px));
    }
}
