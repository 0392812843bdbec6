// File: crates/chart-model/src/axis.rs
// Summary: Shared value axis: visible range, inversion, scale kind and auto-range policy.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{PlotError, Result};
use crate::event::Listeners;
use crate::geometry::Rect;
use crate::location::RectEdge;
use crate::range::Range;
use crate::scale::{self, ScaleKind};

/// Axes are shared between plots and the code that draws them; identity is the
/// `Rc` allocation.
pub type AxisRef = Rc<ValueAxis>;

/// How an axis derives its range from the data extent when auto-ranging.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoRangeConfig {
    /// Fraction of the data length added below the data.
    pub lower_margin: f64,
    /// Fraction of the data length added above the data.
    pub upper_margin: f64,
    /// Narrower data extents are widened symmetrically to this length.
    /// Measured in decades on `Log10` axes.
    pub minimum_size: f64,
    /// Force zero into the range (linear axes only).
    pub include_zero: bool,
    /// Show only the trailing window of this length, ending at the data maximum.
    /// Measured in decades on `Log10` axes, so `Some(2.0)` shows `[max / 100, max]`.
    pub fixed_length: Option<f64>,
    /// Used when no dataset contributes.
    pub default_range: Range,
}

impl Default for AutoRangeConfig {
    fn default() -> Self {
        Self {
            lower_margin: 0.05,
            upper_margin: 0.05,
            minimum_size: 1e-8,
            include_zero: false,
            fixed_length: None,
            default_range: Range::new_unchecked(0.0, 1.0),
        }
    }
}

impl AutoRangeConfig {
    /// Range an axis with this policy shows for `data`.
    pub fn apply(&self, scale: ScaleKind, data: Option<Range>) -> Range {
        let fallback = scale.sanitize(self.default_range);
        let Some(data) = data.filter(|r| r.is_finite()).map(|r| scale.sanitize(r)) else {
            return fallback;
        };
        let mut lower = scale.forward(data.lower());
        let mut upper = scale.forward(data.upper());
        if self.include_zero && scale == ScaleKind::Linear {
            lower = lower.min(0.0);
            upper = upper.max(0.0);
        }
        let length = upper - lower;
        match self.fixed_length.filter(|f| *f > 0.0) {
            Some(fixed) => lower = upper - fixed,
            None => {
                if length < self.minimum_size {
                    let grow = (self.minimum_size - length) / 2.0;
                    lower -= grow;
                    upper += grow;
                    if lower == upper {
                        let adjust = lower.abs() / 10.0;
                        lower -= adjust;
                        upper += adjust;
                    }
                }
                upper += self.upper_margin * length;
                lower -= self.lower_margin * length;
            }
        }
        Range::new(scale.inverse(lower), scale.inverse(upper))
            .ok()
            .filter(|r| scale.accepts(*r))
            .unwrap_or(fallback)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisChange {
    Range(Range),
    Inverted(bool),
    AutoRange(bool),
    Scale(ScaleKind),
    Label,
}

/// A named, orientable value scale. All mutators take `&self` so an axis can be
/// shared by reference; every effective change is published on [`ValueAxis::changes`].
#[derive(Debug)]
pub struct ValueAxis {
    label: RefCell<String>,
    range: Cell<Range>,
    inverted: Cell<bool>,
    auto_range: Cell<bool>,
    scale: Cell<ScaleKind>,
    auto_config: Cell<AutoRangeConfig>,
    listeners: Listeners<AxisChange>,
}

impl ValueAxis {
    /// Auto-ranging linear axis showing the default range until data arrives.
    pub fn new(label: impl Into<String>) -> Self {
        let config = AutoRangeConfig::default();
        Self {
            label: RefCell::new(label.into()),
            range: Cell::new(config.default_range),
            inverted: Cell::new(false),
            auto_range: Cell::new(true),
            scale: Cell::new(ScaleKind::Linear),
            auto_config: Cell::new(config),
            listeners: Listeners::new(),
        }
    }

    /// Axis pinned to `[lower, upper]` (auto range off).
    pub fn with_range(label: impl Into<String>, lower: f64, upper: f64) -> Result<Self> {
        let axis = Self::new(label);
        axis.set_range(Range::new(lower, upper)?)?;
        Ok(axis)
    }

    pub fn log10(label: impl Into<String>) -> Self {
        let axis = Self::new(label);
        axis.scale.set(ScaleKind::Log10);
        axis.range.set(ScaleKind::Log10.sanitize(Range::new_unchecked(1.0, 10.0)));
        axis
    }

    pub fn shared(self) -> AxisRef {
        Rc::new(self)
    }

    pub fn changes(&self) -> &Listeners<AxisChange> {
        &self.listeners
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        *self.label.borrow_mut() = label.into();
        self.listeners.emit(&AxisChange::Label);
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range.get()
    }
    #[inline]
    pub fn lower_bound(&self) -> f64 {
        self.range.get().lower()
    }
    #[inline]
    pub fn upper_bound(&self) -> f64 {
        self.range.get().upper()
    }

    /// Check that this axis could display `range`.
    pub fn validate_range(&self, range: Range) -> Result<()> {
        if self.scale.get().accepts(range) {
            Ok(())
        } else {
            Err(PlotError::InvalidRange { lower: range.lower(), upper: range.upper() })
        }
    }

    /// Set the visible range explicitly; turns auto range off.
    pub fn set_range(&self, range: Range) -> Result<()> {
        self.validate_range(range)?;
        if self.auto_range.replace(false) {
            self.listeners.emit(&AxisChange::AutoRange(false));
        }
        self.apply_range(range);
        Ok(())
    }

    pub fn set_range_bounds(&self, lower: f64, upper: f64) -> Result<()> {
        self.set_range(Range::new(lower, upper)?)
    }

    fn apply_range(&self, range: Range) {
        if self.range.replace(range) != range {
            self.listeners.emit(&AxisChange::Range(range));
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted.get()
    }

    pub fn set_inverted(&self, inverted: bool) {
        if self.inverted.replace(inverted) != inverted {
            self.listeners.emit(&AxisChange::Inverted(inverted));
        }
    }

    pub fn is_auto_range(&self) -> bool {
        self.auto_range.get()
    }

    /// Toggle auto ranging. Recomputing the range needs the owning plot's data,
    /// see `XYPlot::configure_axes`.
    pub fn set_auto_range(&self, auto: bool) {
        if self.auto_range.replace(auto) != auto {
            self.listeners.emit(&AxisChange::AutoRange(auto));
        }
    }

    pub fn scale(&self) -> ScaleKind {
        self.scale.get()
    }

    /// Switch scale kind; fails if the current range cannot be shown on `kind`.
    pub fn set_scale(&self, kind: ScaleKind) -> Result<()> {
        let range = self.range.get();
        if !kind.accepts(range) {
            return Err(PlotError::InvalidRange { lower: range.lower(), upper: range.upper() });
        }
        if self.scale.replace(kind) != kind {
            self.listeners.emit(&AxisChange::Scale(kind));
        }
        Ok(())
    }

    pub fn auto_range_config(&self) -> AutoRangeConfig {
        self.auto_config.get()
    }

    pub fn set_auto_range_config(&self, config: AutoRangeConfig) {
        self.auto_config.set(config);
    }

    /// Recompute the range from `data` if auto ranging is on. Leaves auto range on.
    pub fn auto_adjust_range(&self, data: Option<Range>) {
        if !self.auto_range.get() {
            return;
        }
        let range = self.auto_config.get().apply(self.scale.get(), data);
        tracing::trace!(label = %self.label.borrow(), %range, "auto-adjusted axis range");
        self.apply_range(range);
    }

    pub fn value_to_device(&self, value: f64, area: &Rect, edge: RectEdge) -> f64 {
        scale::value_to_device(self, value, area, edge)
    }

    pub fn device_to_value(&self, coord: f64, area: &Rect, edge: RectEdge) -> f64 {
        scale::device_to_value(coord, area, edge, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn explicit_range_turns_auto_off() {
        let axis = ValueAxis::new("Price");
        assert!(axis.is_auto_range());
        axis.set_range_bounds(0.0, 100.0).unwrap();
        assert!(!axis.is_auto_range());
        axis.auto_adjust_range(Some(Range::new(5.0, 6.0).unwrap()));
        assert_eq!(axis.range(), Range::new(0.0, 100.0).unwrap());
    }

    #[test]
    fn rejects_empty_range() {
        let axis = ValueAxis::new("X");
        assert!(matches!(axis.set_range_bounds(3.0, 3.0), Err(PlotError::InvalidRange { .. })));
        assert!(axis.is_auto_range());
    }

    #[test]
    fn log_fixed_length_counts_decades() {
        let axis = ValueAxis::log10("Volume");
        axis.set_auto_range_config(AutoRangeConfig { fixed_length: Some(2.0), ..AutoRangeConfig::default() });
        axis.auto_adjust_range(Some(Range::new(1.0, 1000.0).unwrap()));
        let r = axis.range();
        assert!((r.lower() - 10.0).abs() < 1e-9, "{r}");
        assert!((r.upper() - 1000.0).abs() < 1e-9, "{r}");
    }

    #[test]
    fn auto_range_adds_margins() {
        let axis = ValueAxis::new("X");
        axis.auto_adjust_range(Some(Range::new(0.0, 10.0).unwrap()));
        assert_eq!(axis.range(), Range::new(-0.5, 10.5).unwrap());
        axis.auto_adjust_range(None);
        assert_eq!(axis.range(), Range::new(0.0, 1.0).unwrap());
    }

    #[test]
    fn auto_range_widens_single_value() {
        let axis = ValueAxis::new("X");
        axis.set_auto_range_config(AutoRangeConfig { minimum_size: 2.0, ..Default::default() });
        axis.auto_adjust_range(Some(Range::point(5.0).unwrap()));
        assert_eq!(axis.range(), Range::new(4.0, 6.0).unwrap());
    }

    #[test]
    fn auto_range_include_zero_and_fixed_length() {
        let axis = ValueAxis::new("Y");
        axis.set_auto_range_config(AutoRangeConfig {
            include_zero: true,
            lower_margin: 0.0,
            upper_margin: 0.0,
            ..Default::default()
        });
        axis.auto_adjust_range(Some(Range::new(10.0, 20.0).unwrap()));
        assert_eq!(axis.range(), Range::new(0.0, 20.0).unwrap());

        axis.set_auto_range_config(AutoRangeConfig { fixed_length: Some(5.0), ..Default::default() });
        axis.auto_adjust_range(Some(Range::new(10.0, 20.0).unwrap()));
        assert_eq!(axis.range(), Range::new(15.0, 20.0).unwrap());
    }

    #[test]
    fn log_axis_rejects_non_positive_range() {
        let axis = ValueAxis::log10("Volume");
        assert!(axis.set_range_bounds(-1.0, 10.0).is_err());
        axis.set_range_bounds(1.0, 1000.0).unwrap();
        let linear = ValueAxis::with_range("X", -1.0, 1.0).unwrap();
        assert!(linear.set_scale(ScaleKind::Log10).is_err());
    }

    #[test]
    fn only_effective_changes_are_published() {
        let axis = ValueAxis::with_range("X", 0.0, 1.0).unwrap();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        axis.changes().subscribe(move |_| h.set(h.get() + 1));
        axis.set_range_bounds(0.0, 1.0).unwrap();
        axis.set_inverted(false);
        assert_eq!(hits.get(), 0);
        axis.set_inverted(true);
        axis.set_range_bounds(0.0, 2.0).unwrap();
        assert_eq!(hits.get(), 2);
    }
}
