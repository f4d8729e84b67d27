use approx::assert_abs_diff_eq;
use chrono::{TimeZone, Utc};
use line_chart::core::{Axis, DataPoint, GraphablePoint, ScaleState, TickCounts, Viewport};
use line_chart::{ChartError, LineChart, LineChartConfig};
use rust_decimal::Decimal;

fn scenario_a() -> Vec<DataPoint> {
    vec![
        DataPoint::new(0.0, 5.0),
        DataPoint::new(1.0, 15.0),
        DataPoint::new(2.0, 20.0),
        DataPoint::new(3.0, 27.0),
    ]
}

#[test]
fn bounds_ticks_and_padding_follow_the_data_range() {
    let state = ScaleState::compute(&scenario_a(), TickCounts::new(5, 6)).expect("scale");

    assert_eq!(state.min_point(), DataPoint::new(0.0, 5.0));
    assert_eq!(state.max_point(), DataPoint::new(3.0, 27.0));
    assert_abs_diff_eq!(state.range_x(), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(state.range_y(), 22.0, epsilon = 1e-12);
    assert_abs_diff_eq!(state.tick_x(), 0.75, epsilon = 1e-12);
    assert_abs_diff_eq!(state.tick_y(), 4.4, epsilon = 1e-12);
    assert_abs_diff_eq!(state.padding_x(), 0.3, epsilon = 1e-12);
    assert_abs_diff_eq!(state.padding_y(), 2.2, epsilon = 1e-12);
    assert!(!state.is_empty());
}

#[test]
fn min_and_max_are_bounding_box_corners_not_samples() {
    let points = vec![DataPoint::new(0.0, 10.0), DataPoint::new(4.0, -2.0)];
    let state = ScaleState::compute(&points, TickCounts::default()).expect("scale");

    assert_eq!(state.min_point(), DataPoint::new(0.0, -2.0));
    assert_eq!(state.max_point(), DataPoint::new(4.0, 10.0));
}

#[test]
fn input_order_does_not_change_the_result() {
    let mut reversed = scenario_a();
    reversed.reverse();

    let forward = ScaleState::compute(&scenario_a(), TickCounts::default()).expect("scale");
    let backward = ScaleState::compute(&reversed, TickCounts::default()).expect("scale");
    assert_eq!(forward.min_point(), backward.min_point());
    assert_eq!(forward.max_point(), backward.max_point());
    assert_eq!(forward.padding_x(), backward.padding_x());
    assert_eq!(forward.padding_y(), backward.padding_y());
}

#[test]
fn single_point_pads_by_ten_percent_of_its_coordinates() {
    let state =
        ScaleState::compute(&[DataPoint::new(10.0, 0.0)], TickCounts::default()).expect("scale");

    assert_eq!(state.range_x(), 0.0);
    assert_eq!(state.range_y(), 0.0);
    assert_eq!(state.tick_x(), 0.0);
    assert_eq!(state.tick_y(), 0.0);
    assert_abs_diff_eq!(state.padding_x(), 1.0, epsilon = 1e-12);
    assert_eq!(state.padding_y(), 0.0);
}

#[test]
fn empty_collection_degenerates_to_origin() {
    let state = ScaleState::<DataPoint>::compute(&[], TickCounts::default()).expect("scale");

    assert!(state.is_empty());
    assert_eq!(state.min_point(), DataPoint::zero());
    assert_eq!(state.max_point(), DataPoint::zero());
    assert_eq!(state.tick_x(), 0.0);
    assert_eq!(state.tick_y(), 0.0);
    assert_eq!(state.padding_x(), 0.0);
    assert_eq!(state.padding_y(), 0.0);
}

#[test]
fn a_single_tick_is_a_precondition_error() {
    let err = ScaleState::compute(&scenario_a(), TickCounts::new(1, 5)).expect_err("x ticks");
    assert!(matches!(
        err,
        ChartError::InvalidTickCount {
            axis: Axis::X,
            count: 1
        }
    ));

    let err = ScaleState::compute(&scenario_a(), TickCounts::new(5, 1)).expect_err("y ticks");
    assert!(matches!(
        err,
        ChartError::InvalidTickCount {
            axis: Axis::Y,
            count: 1
        }
    ));
}

#[test]
fn empty_collection_still_validates_tick_counts() {
    let result = ScaleState::<DataPoint>::compute(&[], TickCounts::new(0, 5));
    assert!(result.is_err());
}

#[test]
fn integer_quantities_truncate_derived_values() {
    let points: Vec<DataPoint<i32, i32>> = vec![DataPoint::new(0, 0), DataPoint::new(10, 100)];
    let state = ScaleState::compute(&points, TickCounts::new(5, 3)).expect("scale");

    assert_eq!(state.tick_x(), 2);
    assert_eq!(state.tick_y(), 50);
    assert_eq!(state.padding_x(), 1);
    assert_eq!(state.padding_y(), 10);
}

#[test]
fn decimal_values_on_a_time_axis() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 40).unwrap();
    let points = vec![
        DataPoint::from_time_price(start, Decimal::new(1000, 2)),
        DataPoint::from_time_price(end, Decimal::new(2000, 2)),
    ];
    let state = ScaleState::compute(&points, TickCounts::default()).expect("scale");

    assert_abs_diff_eq!(state.range_x(), 40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(state.range_y(), 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(state.tick_x(), 10.0, epsilon = 1e-9);
    assert_eq!(state.padding_y(), Decimal::new(1, 0));
}

#[test]
fn full_i32_range_computes_without_overflow() {
    let points: Vec<DataPoint<i32, i32>> =
        vec![DataPoint::new(i32::MIN, 0), DataPoint::new(i32::MAX, 1)];
    let state = ScaleState::compute(&points, TickCounts::default()).expect("scale");

    assert_eq!(state.min_point(), DataPoint::new(i32::MIN, 0));
    assert_eq!(state.max_point(), DataPoint::new(i32::MAX, 1));
    assert_abs_diff_eq!(state.range_x(), 4_294_967_295.0, epsilon = 1e-3);
    assert_eq!(state.tick_x(), 1_073_741_823);
    assert_eq!(state.padding_x(), 429_496_729);
}

#[test]
fn full_decimal_range_builds_a_chart_without_overflow() {
    let points: Vec<DataPoint<f64, Decimal>> = vec![
        DataPoint::new(0.0, Decimal::MIN),
        DataPoint::new(1.0, Decimal::MAX),
    ];
    let chart = LineChart::new(&points, LineChartConfig::new()).expect("chart");

    assert!(chart.scale().range_y() > 1.5e29);
    assert!(chart.scale().padding_y() > Decimal::ZERO);
    let frame = chart
        .build_render_frame(Viewport::new(400, 300))
        .expect("frame");
    assert_eq!(frame.polylines[0].points.len(), 2);
}
