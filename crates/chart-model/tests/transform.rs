// File: crates/chart-model/tests/transform.rs
// Purpose: Value <-> device mapping laws, orientation handling and the reference two-axis scenario.

use chart_model::series::SeriesType;
use chart_model::{
    device_to_value, value_to_device, AxisGroup, Orientation, PlotConfig, Point, Range, Rect, RectEdge, ScaleKind,
    Series, SeriesCollection, ValueAxis, XYPlot,
};

const EDGES: [RectEdge; 4] = [RectEdge::Top, RectEdge::Bottom, RectEdge::Left, RectEdge::Right];

fn area() -> Rect {
    Rect::from_ltrb(0.0, 0.0, 200.0, 100.0)
}

#[test]
fn round_trip_on_every_edge() {
    for inverted in [false, true] {
        let axis = ValueAxis::with_range("v", -3.0, 17.0).unwrap();
        axis.set_inverted(inverted);
        for edge in EDGES {
            for v in [-3.0, 0.0, 4.25, 17.0, 30.0] {
                let d = value_to_device(&axis, v, &area(), edge);
                let back = device_to_value(d, &area(), edge, &axis);
                assert!((back - v).abs() < 1e-9, "{edge:?} inverted={inverted}: {v} -> {d} -> {back}");
            }
        }
    }
}

#[test]
fn inversion_mirrors_device_coordinates() {
    let plain = ValueAxis::with_range("v", 0.0, 10.0).unwrap();
    let flipped = ValueAxis::with_range("v", 0.0, 10.0).unwrap();
    flipped.set_inverted(true);
    let r = area();
    for v in [0.0, 2.5, 10.0] {
        let a = plain.value_to_device(v, &r, RectEdge::Bottom);
        let b = flipped.value_to_device(v, &r, RectEdge::Bottom);
        assert!((a + b - (r.left + r.right)).abs() < 1e-9);
        let a = plain.value_to_device(v, &r, RectEdge::Left);
        let b = flipped.value_to_device(v, &r, RectEdge::Left);
        assert!((a + b - (r.top + r.bottom)).abs() < 1e-9);
    }
}

#[test]
fn vertical_edges_put_the_minimum_at_the_bottom() {
    let axis = ValueAxis::with_range("v", 0.0, 100.0).unwrap();
    assert_eq!(axis.value_to_device(0.0, &area(), RectEdge::Left), 100.0);
    assert_eq!(axis.value_to_device(100.0, &area(), RectEdge::Right), 0.0);
    assert_eq!(axis.value_to_device(0.0, &area(), RectEdge::Top), 0.0);
    // no clamping
    assert_eq!(axis.value_to_device(150.0, &area(), RectEdge::Bottom), 300.0);
}

#[test]
fn log_axis_interpolates_in_decades() {
    let axis = ValueAxis::with_range("v", 1.0, 1000.0).unwrap();
    axis.set_scale(ScaleKind::Log10).unwrap();
    let r = Rect::from_ltwh(0.0, 0.0, 300.0, 100.0);
    assert!((axis.value_to_device(10.0, &r, RectEdge::Bottom) - 100.0).abs() < 1e-9);
    assert!((axis.device_to_value(200.0, &r, RectEdge::Bottom) - 100.0).abs() < 1e-9);
}

#[test]
fn reference_scenario() {
    let domain = ValueAxis::new("domain").shared();
    let range = ValueAxis::new("range").shared();
    let data = SeriesCollection::from_series(vec![Series::with_data(
        SeriesType::Line,
        vec![(2.0, 10.0), (5.0, 90.0), (8.0, 40.0)],
    )])
    .shared();
    let plot = XYPlot::with_components(PlotConfig::default(), domain.clone(), range.clone(), data, None);

    assert_eq!(plot.data_range(&domain), Some(Range::new(2.0, 8.0).unwrap()));
    assert_eq!(plot.data_range(&range), Some(Range::new(10.0, 90.0).unwrap()));

    domain.set_range_bounds(0.0, 10.0).unwrap();
    range.set_range_bounds(0.0, 100.0).unwrap();
    let rect = area();
    assert_eq!(plot.axis_edge(AxisGroup::Domain, 0), RectEdge::Bottom);
    assert_eq!(plot.axis_edge(AxisGroup::Range, 0), RectEdge::Left);
    assert_eq!(plot.value_to_device(AxisGroup::Domain, 0, 5.0, &rect), Some(100.0));
    assert_eq!(plot.value_to_device(AxisGroup::Range, 0, 25.0, &rect), Some(75.0));
    assert_eq!(plot.value_to_device(AxisGroup::Range, 3, 25.0, &rect), None);
    assert_eq!(plot.data_to_device(0, 5.0, 25.0, &rect), Some(Point::new(100.0, 75.0)));
}

#[test]
fn horizontal_orientation_swaps_roles() {
    let domain = ValueAxis::with_range("d", 0.0, 10.0).unwrap().shared();
    let range = ValueAxis::with_range("r", 0.0, 100.0).unwrap().shared();
    let plot = XYPlot::with_config(PlotConfig::default().with_orientation(Orientation::Horizontal));
    plot.set_axis(AxisGroup::Domain, 0, Some(domain));
    plot.set_axis(AxisGroup::Range, 0, Some(range));
    let rect = area();
    assert_eq!(plot.axis_edge(AxisGroup::Domain, 0), RectEdge::Left);
    assert_eq!(plot.axis_edge(AxisGroup::Range, 0), RectEdge::Bottom);

    let p = plot.data_to_device(0, 5.0, 50.0, &rect).unwrap();
    assert_eq!(p, Point::new(100.0, 50.0));
    let (x, y) = plot.device_to_data(0, Point::new(100.0, 50.0), &rect).unwrap();
    assert!((x - 5.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);
}
