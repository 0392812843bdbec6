// File: crates/chart-model/src/scale.rs
// Summary: Scale kinds and the data <-> device coordinate transform along a rectangle edge.

use crate::axis::ValueAxis;
use crate::geometry::Rect;
use crate::location::RectEdge;
use crate::range::Range;

/// Smallest value a log axis accepts as its lower bound.
pub const LOG_EPSILON: f64 = 1e-12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

impl ScaleKind {
    /// Data value to scale space, where interpolation is linear.
    #[inline]
    pub fn forward(self, value: f64) -> f64 {
        match self {
            ScaleKind::Linear => value,
            ScaleKind::Log10 => value.log10(),
        }
    }

    #[inline]
    pub fn inverse(self, scaled: f64) -> f64 {
        match self {
            ScaleKind::Linear => scaled,
            ScaleKind::Log10 => 10f64.powf(scaled),
        }
    }

    /// Whether an axis of this kind can display `range`.
    pub fn accepts(self, range: Range) -> bool {
        let usable = range.is_finite() && range.length() > 0.0;
        match self {
            ScaleKind::Linear => usable,
            ScaleKind::Log10 => usable && range.lower() > 0.0,
        }
    }

    /// Coerce a data extent into something this scale can show.
    pub(crate) fn sanitize(self, range: Range) -> Range {
        match self {
            ScaleKind::Linear => range,
            ScaleKind::Log10 => {
                let lower = if range.lower() <= LOG_EPSILON { LOG_EPSILON } else { range.lower() };
                let upper = if range.upper() <= lower { lower * 10.0 } else { range.upper() };
                Range::new_unchecked(lower, upper)
            }
        }
    }
}

/// Device span `(start, end)` along `edge`: x grows left to right for TOP/BOTTOM,
/// and for LEFT/RIGHT the data minimum sits at the bottom of the area.
#[inline]
fn device_span(area: &Rect, edge: RectEdge) -> (f64, f64) {
    if edge.is_top_or_bottom() {
        (area.left, area.right)
    } else {
        (area.bottom, area.top)
    }
}

/// Map `value` on a scale described by `range`, `scale` and `inverted` to a device
/// coordinate along `edge` of `area`. Values outside the range extrapolate.
pub fn map_to_device(
    range: Range,
    scale: ScaleKind,
    inverted: bool,
    value: f64,
    area: &Rect,
    edge: RectEdge,
) -> f64 {
    let min = scale.forward(range.lower());
    let max = scale.forward(range.upper());
    let t = (scale.forward(value) - min) / (max - min);
    let (d0, d1) = device_span(area, edge);
    if inverted {
        d1 - t * (d1 - d0)
    } else {
        d0 + t * (d1 - d0)
    }
}

/// Exact inverse of [`map_to_device`].
pub fn map_to_value(
    range: Range,
    scale: ScaleKind,
    inverted: bool,
    coord: f64,
    area: &Rect,
    edge: RectEdge,
) -> f64 {
    let min = scale.forward(range.lower());
    let max = scale.forward(range.upper());
    let (d0, d1) = device_span(area, edge);
    let t = (coord - d0) / (d1 - d0);
    let scaled = if inverted { max - t * (max - min) } else { min + t * (max - min) };
    scale.inverse(scaled)
}

/// Device coordinate of `value` on `axis`, drawn against `edge` of `area`.
#[inline]
pub fn value_to_device(axis: &ValueAxis, value: f64, area: &Rect, edge: RectEdge) -> f64 {
    map_to_device(axis.range(), axis.scale(), axis.is_inverted(), value, area, edge)
}

#[inline]
pub fn device_to_value(coord: f64, area: &Rect, edge: RectEdge, axis: &ValueAxis) -> f64 {
    map_to_value(axis.range(), axis.scale(), axis.is_inverted(), coord, area, edge)
}
