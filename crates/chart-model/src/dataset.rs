// File: crates/chart-model/src/dataset.rs
// Summary: XY dataset trait consumed by the model, plus its change events.

use std::rc::Rc;

use crate::event::Listeners;

/// Shared dataset handle; identity is the `Rc` allocation.
pub type DatasetRef = Rc<dyn XYDataset>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetChange {
    SeriesAdded(usize),
    SeriesRemoved(usize),
    SeriesChanged(usize),
    Cleared,
}

/// Read access to series of `(x, y)` items.
///
/// Out-of-range indices must yield `NaN`, which every bounds scan skips.
pub trait XYDataset {
    fn series_count(&self) -> usize;
    fn item_count(&self, series: usize) -> usize;
    fn x_value(&self, series: usize, item: usize) -> f64;
    fn y_value(&self, series: usize, item: usize) -> f64;

    /// Lowest y the item occupies (e.g. a candle's low). Defaults to `y_value`.
    fn y_low(&self, series: usize, item: usize) -> f64 {
        self.y_value(series, item)
    }

    fn y_high(&self, series: usize, item: usize) -> f64 {
        self.y_value(series, item)
    }

    fn changes(&self) -> &Listeners<DatasetChange>;
}
