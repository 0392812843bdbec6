// File: crates/chart-model/src/range.rs
// Summary: Closed data-space interval with union and resize helpers.

use crate::error::{PlotError, Result};

/// Closed interval `[lower, upper]` in data space.
/// Contract: `lower <= upper` and neither bound is NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(PlotError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Build from two values in either order.
    pub fn spanning(a: f64, b: f64) -> Result<Self> {
        Self::new(a.min(b), a.max(b))
    }

    /// Degenerate range holding a single value.
    pub fn point(value: f64) -> Result<Self> {
        Self::new(value, value)
    }

    pub(crate) const fn new_unchecked(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub const fn lower(&self) -> f64 { self.lower }
    #[inline]
    pub const fn upper(&self) -> f64 { self.upper }
    #[inline]
    pub fn length(&self) -> f64 { self.upper - self.lower }
    #[inline]
    pub fn central_value(&self) -> f64 { self.lower / 2.0 + self.upper / 2.0 }

    pub fn is_finite(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Closest value inside the range.
    pub fn constrain(&self, value: f64) -> f64 {
        crate::geometry::clamp(value, self.lower, self.upper)
    }

    /// Union of two optional ranges; `None` is the identity element.
    pub fn combine(a: Option<Range>, b: Option<Range>) -> Option<Range> {
        match (a, b) {
            (None, b) => b,
            (a, None) => a,
            (Some(a), Some(b)) => Some(a.union(&b)),
        }
    }

    pub fn union(&self, other: &Range) -> Range {
        Range::new_unchecked(self.lower.min(other.lower), self.upper.max(other.upper))
    }

    pub fn expand_to_include(&self, value: f64) -> Range {
        if value.is_nan() {
            return *self;
        }
        Range::new_unchecked(self.lower.min(value), self.upper.max(value))
    }

    pub fn shift(&self, delta: f64) -> Range {
        Range::new_unchecked(self.lower + delta, self.upper + delta)
    }

    /// Grow each side by a fraction of the current length.
    pub fn expand(&self, lower_margin: f64, upper_margin: f64) -> Range {
        let len = self.length();
        let lower = self.lower - len * lower_margin;
        let upper = self.upper + len * upper_margin;
        if lower > upper {
            let mid = lower / 2.0 + upper / 2.0;
            return Range::new_unchecked(mid, mid);
        }
        Range::new_unchecked(lower, upper)
    }

    /// Rescale the distances from `anchor` to each bound by `factor`, keeping the
    /// anchor at the same relative position.
    pub fn scaled_about(&self, anchor: f64, factor: f64) -> Result<Range> {
        let left = anchor - self.lower;
        let right = self.upper - anchor;
        Range::new(anchor - left * factor, anchor + right * factor)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
