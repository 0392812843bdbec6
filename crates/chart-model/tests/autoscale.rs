// File: crates/chart-model/tests/autoscale.rs
// Purpose: Auto ranging over mixed series types, and re-ranging when data changes.

use std::rc::Rc;

use chart_model::series::{Candle, SeriesType};
use chart_model::{AutoRangeConfig, AxisGroup, Range, Series, SeriesCollection, ValueAxis, XYPlot};

fn mixed() -> Rc<SeriesCollection> {
    SeriesCollection::from_series(vec![
        Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (5.0, 3.0)]),
        Series::from_candles(vec![
            Candle { t: 2.0, o: 2.0, h: 6.0, l: 1.5, c: 4.0 },
            Candle { t: 3.0, o: 4.0, h: 5.5, l: 2.0, c: 2.5 },
        ]),
    ])
    .shared()
}

#[test]
fn autoscale_mixed_series() {
    let x = ValueAxis::new("x").shared();
    let y = ValueAxis::new("y").shared();
    let plot = XYPlot::new();
    plot.set_axis(AxisGroup::Domain, 0, Some(x.clone()));
    plot.set_axis(AxisGroup::Range, 0, Some(y.clone()));
    plot.set_dataset(0, Some(mixed()));

    // X spans 0..5 from the line vs 2..3 from candles, plus 5% margins
    assert!((x.lower_bound() - -0.25).abs() < 1e-9);
    assert!((x.upper_bound() - 5.25).abs() < 1e-9);

    // Y uses candle lows/highs: 1.0..6.0 widened by 5% of 5.0
    assert!((y.lower_bound() - 0.75).abs() < 1e-9);
    assert!((y.upper_bound() - 6.25).abs() < 1e-9);
}

#[test]
fn dataset_changes_rerange_auto_axes_only() {
    let data = mixed();
    let x = ValueAxis::new("x").shared();
    let y = ValueAxis::with_range("y", 0.0, 10.0).unwrap().shared();
    let plot = XYPlot::new();
    plot.set_axis(AxisGroup::Domain, 0, Some(x.clone()));
    plot.set_axis(AxisGroup::Range, 0, Some(y.clone()));
    plot.set_dataset(0, Some(data.clone()));

    data.push_point(0, 25.0, 100.0);
    assert!(x.upper_bound() > 25.0);
    assert_eq!(y.range(), Range::new(0.0, 10.0).unwrap());
    assert!(!plot.needs_configure());

    y.set_auto_range(true);
    assert!(y.upper_bound() > 100.0);
}

#[test]
fn no_data_falls_back_to_the_default_range() {
    let y = ValueAxis::new("y").shared();
    y.set_auto_range_config(AutoRangeConfig { default_range: Range::new(-1.0, 1.0).unwrap(), ..AutoRangeConfig::default() });
    let plot = XYPlot::new();
    plot.set_axis(AxisGroup::Range, 0, Some(y.clone()));
    assert_eq!(y.range(), Range::new(-1.0, 1.0).unwrap());

    plot.set_dataset(0, Some(SeriesCollection::new().shared()));
    assert_eq!(y.range(), Range::new(-1.0, 1.0).unwrap());
}

#[test]
fn include_zero_and_fixed_length() {
    let y = ValueAxis::new("y").shared();
    y.set_auto_range_config(AutoRangeConfig { include_zero: true, lower_margin: 0.0, upper_margin: 0.0, ..AutoRangeConfig::default() });
    let x = ValueAxis::new("x").shared();
    x.set_auto_range_config(AutoRangeConfig { fixed_length: Some(2.0), ..AutoRangeConfig::default() });
    let plot = XYPlot::new();
    plot.set_axis(AxisGroup::Domain, 0, Some(x.clone()));
    plot.set_axis(AxisGroup::Range, 0, Some(y.clone()));
    plot.set_dataset(
        0,
        Some(SeriesCollection::from_series(vec![Series::with_data(SeriesType::Line, vec![(1.0, 4.0), (9.0, 8.0)])]).shared()),
    );
    assert_eq!(y.range(), Range::new(0.0, 8.0).unwrap());
    assert_eq!(x.range(), Range::new(7.0, 9.0).unwrap());
}
