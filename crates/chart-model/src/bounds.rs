// File: crates/chart-model/src/bounds.rs
// Summary: Dataset extent scans (plain, visibility-filtered and stacked) used for auto ranging.

use crate::dataset::XYDataset;
use crate::range::Range;

#[derive(Clone, Copy)]
struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    const EMPTY: Extent = Extent { min: f64::INFINITY, max: f64::NEG_INFINITY };

    #[inline]
    fn include(&mut self, lo: f64, hi: f64) {
        if !lo.is_nan() { self.min = self.min.min(lo); }
        if !hi.is_nan() { self.max = self.max.max(hi); }
    }

    fn into_range(self) -> Option<Range> {
        Range::new(self.min, self.max).ok().filter(|r| r.is_finite())
    }
}

/// X extent of every item, `None` if the dataset has no non-NaN x value.
pub fn find_domain_bounds(dataset: &dyn XYDataset) -> Option<Range> {
    find_domain_bounds_where(dataset, |_| true)
}

/// X extent over the series accepted by `include`.
pub fn find_domain_bounds_where(dataset: &dyn XYDataset, include: impl Fn(usize) -> bool) -> Option<Range> {
    let mut ext = Extent::EMPTY;
    for s in (0..dataset.series_count()).filter(|s| include(*s)) {
        for i in 0..dataset.item_count(s) {
            let x = dataset.x_value(s, i);
            ext.include(x, x);
        }
    }
    ext.into_range()
}

/// Y extent of every item, using each item's low/high interval.
pub fn find_range_bounds(dataset: &dyn XYDataset) -> Option<Range> {
    find_range_bounds_where(dataset, |_| true)
}

pub fn find_range_bounds_where(dataset: &dyn XYDataset, include: impl Fn(usize) -> bool) -> Option<Range> {
    let mut ext = Extent::EMPTY;
    for s in (0..dataset.series_count()).filter(|s| include(*s)) {
        for i in 0..dataset.item_count(s) {
            ext.include(dataset.y_low(s, i), dataset.y_high(s, i));
        }
    }
    ext.into_range()
}

/// Y extent when the accepted series are stacked item by item on a zero base:
/// positive values stack upward, negative values downward. Always contains zero
/// once any item exists.
pub fn find_stacked_range_bounds(dataset: &dyn XYDataset, include: impl Fn(usize) -> bool) -> Option<Range> {
    let series: Vec<usize> = (0..dataset.series_count()).filter(|s| include(*s)).collect();
    let items = series.iter().map(|s| dataset.item_count(*s)).max().unwrap_or(0);
    if items == 0 {
        return None;
    }
    let mut ext = Extent { min: 0.0, max: 0.0 };
    for i in 0..items {
        let (mut pos, mut neg) = (0.0f64, 0.0f64);
        for &s in &series {
            let y = dataset.y_value(s, i);
            if y > 0.0 {
                pos += y;
            } else if y < 0.0 {
                neg += y;
            }
        }
        ext.include(neg, pos);
    }
    ext.into_range()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{Candle, Series, SeriesCollection, SeriesType};

    #[test]
    fn autoscale_mixed_series() {
        let ds = SeriesCollection::from_series(vec![
            Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (5.0, 3.0)]),
            Series::from_candles(vec![
                Candle { t: 2.0, o: 2.0, h: 6.0, l: 1.5, c: 4.0 },
                Candle { t: 3.0, o: 4.0, h: 5.5, l: 2.0, c: 2.5 },
            ]),
        ]);
        assert_eq!(find_domain_bounds(&ds), Some(Range::new(0.0, 5.0).unwrap()));
        assert_eq!(find_range_bounds(&ds), Some(Range::new(1.0, 6.0).unwrap()));
        // only the candles
        assert_eq!(find_range_bounds_where(&ds, |s| s == 1), Some(Range::new(1.5, 6.0).unwrap()));
    }

    #[test]
    fn nan_items_and_empty_datasets_yield_none() {
        let ds = SeriesCollection::from_series(vec![Series::with_data(SeriesType::Line, vec![(f64::NAN, f64::NAN)])]);
        assert_eq!(find_domain_bounds(&ds), None);
        assert_eq!(find_range_bounds(&SeriesCollection::new()), None);
    }

    #[test]
    fn stacked_bounds_sum_per_item() {
        let ds = SeriesCollection::from_series(vec![
            Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (1.0, 2.0), (2.0, -1.0)]),
            Series::with_data(SeriesType::Line, vec![(0.0, 3.0), (1.0, 4.0), (2.0, -2.0)]),
        ]);
        assert_eq!(find_stacked_range_bounds(&ds, |_| true), Some(Range::new(-3.0, 6.0).unwrap()));
        assert_eq!(find_stacked_range_bounds(&ds, |s| s == 0), Some(Range::new(-1.0, 2.0).unwrap()));
        assert_eq!(find_stacked_range_bounds(&ds, |_| false), None);
    }
}
