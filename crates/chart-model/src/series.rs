// File: crates/chart-model/src/series.rs
// Summary: Series model (line, candlestick, bar, histogram, baseline) and an XY dataset over it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dataset::{DatasetChange, XYDataset};
use crate::event::Listeners;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Candlestick,
    Bar,         // OHLC bar (no filled body)
    Histogram,   // (x, y) bars from baseline (0.0)
    Baseline,    // area relative to baseline value (default 0.0)
}

impl SeriesType {
    pub const fn is_ohlc(self) -> bool {
        matches!(self, SeriesType::Candlestick | SeriesType::Bar)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    pub t: f64,  // time/index (displayed on X)
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
}

impl Candle {
    /// Try to construct a candle enforcing OHLC invariants:
    /// l <= min(o,c) and h >= max(o,c), and l <= h.
    pub fn try_new(t: f64, o: f64, h: f64, l: f64, c: f64) -> Result<Self, &'static str> {
        let lo = o.min(c);
        let hi = o.max(c);
        if l > lo { return Err("low above min(open,close)"); }
        if h < hi { return Err("high below max(open,close)"); }
        if l > h { return Err("low above high"); }
        Ok(Self { t, o, h, l, c })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,     // used by Line/Histogram/Baseline
    pub data_ohlc: Vec<Candle>,       // used by Candlestick/Bar
    pub baseline: Option<f64>,        // used by Baseline/Histogram (origin)
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self { name: String::new(), series_type, data_xy: Vec::new(), data_ohlc: Vec::new(), baseline: None }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    pub fn from_candles(candles: Vec<Candle>) -> Self {
        Self::from_candles_as(SeriesType::Candlestick, candles)
    }

    pub fn from_candles_as(series_type: SeriesType, candles: Vec<Candle>) -> Self {
        Self { data_ohlc: candles, ..Self::new(series_type) }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Get baseline value or default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 { self.baseline.unwrap_or(0.0) }

    pub fn len(&self) -> usize {
        if self.series_type.is_ohlc() { self.data_ohlc.len() } else { self.data_xy.len() }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn x(&self, item: usize) -> f64 {
        if self.series_type.is_ohlc() {
            self.data_ohlc.get(item).map_or(f64::NAN, |c| c.t)
        } else {
            self.data_xy.get(item).map_or(f64::NAN, |p| p.0)
        }
    }

    fn y(&self, item: usize) -> f64 {
        if self.series_type.is_ohlc() {
            self.data_ohlc.get(item).map_or(f64::NAN, |c| c.c)
        } else {
            self.data_xy.get(item).map_or(f64::NAN, |p| p.1)
        }
    }

    // A set baseline is part of the vertical extent of every XY item.
    fn y_low(&self, item: usize) -> f64 {
        if self.series_type.is_ohlc() {
            return self.data_ohlc.get(item).map_or(f64::NAN, |c| c.l);
        }
        let y = self.y(item);
        match self.baseline {
            Some(b) if !y.is_nan() => y.min(b),
            _ => y,
        }
    }

    fn y_high(&self, item: usize) -> f64 {
        if self.series_type.is_ohlc() {
            return self.data_ohlc.get(item).map_or(f64::NAN, |c| c.h);
        }
        let y = self.y(item);
        match self.baseline {
            Some(b) if !y.is_nan() => y.max(b),
            _ => y,
        }
    }
}

/// Mutable collection of [`Series`] that publishes every change.
///
/// Mutators release the interior borrow before notifying, so listeners may read
/// the collection.
#[derive(Debug, Default)]
pub struct SeriesCollection {
    series: RefCell<Vec<Series>>,
    listeners: Listeners<DatasetChange>,
}

impl SeriesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_series(series: Vec<Series>) -> Self {
        Self { series: RefCell::new(series), listeners: Listeners::new() }
    }

    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    pub fn add_series(&self, series: Series) -> usize {
        let index = {
            let mut all = self.series.borrow_mut();
            all.push(series);
            all.len() - 1
        };
        self.listeners.emit(&DatasetChange::SeriesAdded(index));
        index
    }

    pub fn remove_series(&self, index: usize) -> Option<Series> {
        let removed = {
            let mut all = self.series.borrow_mut();
            (index < all.len()).then(|| all.remove(index))
        };
        if removed.is_some() {
            self.listeners.emit(&DatasetChange::SeriesRemoved(index));
        }
        removed
    }

    /// Replace the series at `index`; returns the previous one.
    pub fn replace_series(&self, index: usize, series: Series) -> Option<Series> {
        let old = {
            let mut all = self.series.borrow_mut();
            all.get_mut(index).map(|slot| std::mem::replace(slot, series))
        };
        if old.is_some() {
            self.listeners.emit(&DatasetChange::SeriesChanged(index));
        }
        old
    }

    /// Append an `(x, y)` point to an XY series. Returns `false` for OHLC or missing series.
    pub fn push_point(&self, index: usize, x: f64, y: f64) -> bool {
        let pushed = {
            let mut all = self.series.borrow_mut();
            match all.get_mut(index) {
                Some(s) if !s.series_type.is_ohlc() => {
                    s.data_xy.push((x, y));
                    true
                }
                _ => false,
            }
        };
        if pushed {
            self.listeners.emit(&DatasetChange::SeriesChanged(index));
        }
        pushed
    }

    pub fn clear(&self) {
        self.series.borrow_mut().clear();
        self.listeners.emit(&DatasetChange::Cleared);
    }

    pub fn with_series<R>(&self, index: usize, f: impl FnOnce(&Series) -> R) -> Option<R> {
        self.series.borrow().get(index).map(f)
    }

    fn read(&self, series: usize, f: impl FnOnce(&Series) -> f64) -> f64 {
        self.series.borrow().get(series).map_or(f64::NAN, f)
    }
}

impl XYDataset for SeriesCollection {
    fn series_count(&self) -> usize {
        self.series.borrow().len()
    }

    fn item_count(&self, series: usize) -> usize {
        self.series.borrow().get(series).map_or(0, Series::len)
    }

    fn x_value(&self, series: usize, item: usize) -> f64 {
        self.read(series, |s| s.x(item))
    }

    fn y_value(&self, series: usize, item: usize) -> f64 {
        self.read(series, |s| s.y(item))
    }

    fn y_low(&self, series: usize, item: usize) -> f64 {
        self.read(series, |s| s.y_low(item))
    }

    fn y_high(&self, series: usize, item: usize) -> f64 {
        self.read(series, |s| s.y_high(item))
    }

    fn changes(&self) -> &Listeners<DatasetChange> {
        &self.listeners
    }
}
