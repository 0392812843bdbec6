// File: crates/chart-model/src/viewport.rs
// Summary: Pan and zoom of axis ranges: pure axis operations, plot capabilities and gesture helpers.

use crate::axis::{AxisRef, ValueAxis};
use crate::config::ViewportConfig;
use crate::error::{PlotError, Result};
use crate::geometry::{clamp, Point, Rect};
use crate::location::{AxisGroup, Orientation, RectEdge};
use crate::plot::{Plot, XYPlot};
use crate::range::Range;

/// Device point a zoom is centred on, with the data area it refers to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomAnchor {
    pub point: Point,
    pub area: Rect,
}

impl ZoomAnchor {
    pub const fn new(point: Point, area: Rect) -> Self {
        Self { point, area }
    }
}

/// Map the current range of `axis` through `f` in scale space and check the
/// result. Bounds that `f` leaves in place keep their exact data value.
fn remap(axis: &ValueAxis, f: impl FnOnce(f64, f64) -> (f64, f64)) -> Result<Range> {
    let scale = axis.scale();
    let current = axis.range();
    let (from_lo, from_hi) = (scale.forward(current.lower()), scale.forward(current.upper()));
    let (lo, hi) = f(from_lo, from_hi);
    let back = |moved: f64, from: f64, original: f64| if moved == from { original } else { scale.inverse(moved) };
    let range = Range::new(back(lo, from_lo, current.lower()), back(hi, from_hi, current.upper()))?;
    axis.validate_range(range)?;
    Ok(range)
}

/// Nothing is applied unless every axis accepted its new range.
fn apply_all<'a>(updates: impl IntoIterator<Item = (&'a ValueAxis, Result<Range>)>) -> Result<()> {
    let planned = updates
        .into_iter()
        .map(|(axis, range)| range.map(|r| (axis, r)))
        .collect::<Result<Vec<_>>>()?;
    for (axis, range) in planned {
        axis.set_range(range)?;
    }
    Ok(())
}

/// Shift each axis by `percent` of its span; inverted axes move the other way.
pub fn pan(axes: &[AxisRef], percent: f64) -> Result<()> {
    if !percent.is_finite() {
        return Err(PlotError::invalid(format!("pan percent {percent} is not finite")));
    }
    apply_all(axes.iter().map(|axis| {
        let delta = if axis.is_inverted() { -percent } else { percent };
        let range = remap(axis, |lo, hi| {
            let shift = (hi - lo) * delta;
            (lo + shift, hi + shift)
        });
        (&**axis, range)
    }))
}

/// Scale each axis span by `factor` (< 1 zooms in), around its centre or around
/// the value under `anchor`. Domain axes read the anchor's x under
/// `Orientation::Vertical` and its y under `Horizontal`; range axes the other one.
pub fn zoom_by_factor(
    axes: &[(AxisRef, RectEdge)],
    group: AxisGroup,
    orientation: Orientation,
    factor: f64,
    anchor: Option<&ZoomAnchor>,
) -> Result<()> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(PlotError::invalid(format!("zoom factor {factor} must be positive")));
    }
    let along_x = group.runs_horizontally(orientation);
    apply_all(axes.iter().map(|(axis, edge)| {
        let scale = axis.scale();
        let centre = anchor.map(|a| {
            let coord = if along_x { a.point.x } else { a.point.y };
            scale.forward(axis.device_to_value(coord, &a.area, *edge))
        });
        let range = remap(axis, |lo, hi| {
            let c = centre.unwrap_or(lo / 2.0 + hi / 2.0);
            (c - (c - lo) * factor, c + (hi - c) * factor)
        });
        (&**axis, range)
    }))
}

/// Show the `[lower, upper]` fraction of each axis' current range; `(0, 1)`
/// leaves it unchanged. Inverted axes take the fractions from the other end.
pub fn zoom_to_percent_window(axes: &[AxisRef], lower: f64, upper: f64) -> Result<()> {
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(PlotError::invalid(format!("zoom window [{lower}, {upper}] is empty")));
    }
    apply_all(axes.iter().map(|axis| {
        let inverted = axis.is_inverted();
        let range = remap(axis, |lo, hi| {
            let len = hi - lo;
            if inverted {
                (lo + len * (1.0 - upper), hi - len * lower)
            } else {
                (lo + len * lower, hi - len * (1.0 - upper))
            }
        });
        (&**axis, range)
    }))
}

/// Plots whose axes can be shifted.
pub trait Pannable: Plot {
    fn is_domain_pannable(&self) -> bool;
    fn is_range_pannable(&self) -> bool;
    /// No-op when domain panning is disabled.
    fn pan_domain_axes(&self, percent: f64) -> Result<()>;
    fn pan_range_axes(&self, percent: f64) -> Result<()>;
}

/// Plots whose axes can be zoomed.
pub trait Zoomable: Plot {
    fn is_domain_zoomable(&self) -> bool;
    fn is_range_zoomable(&self) -> bool;
    /// `factor <= 0` restores auto ranging instead.
    fn zoom_domain_axes(&self, factor: f64, anchor: Option<&ZoomAnchor>) -> Result<()>;
    fn zoom_range_axes(&self, factor: f64, anchor: Option<&ZoomAnchor>) -> Result<()>;
    fn zoom_domain_window(&self, lower: f64, upper: f64) -> Result<()>;
    fn zoom_range_window(&self, lower: f64, upper: f64) -> Result<()>;
    fn restore_auto_domain_bounds(&self);
    fn restore_auto_range_bounds(&self);
}

impl XYPlot {
    fn local_axes(&self, group: AxisGroup) -> Vec<AxisRef> {
        self.axes(group).into_iter().map(|(_, axis)| axis).collect()
    }

    fn pan_group(&self, group: AxisGroup, percent: f64) -> Result<()> {
        let _batch = self.batch();
        tracing::debug!(?group, percent, "pan");
        pan(&self.local_axes(group), percent)
    }

    fn zoom_group(&self, group: AxisGroup, factor: f64, anchor: Option<&ZoomAnchor>) -> Result<()> {
        if factor <= 0.0 {
            self.restore_auto_bounds(group);
            return Ok(());
        }
        let _batch = self.batch();
        tracing::debug!(?group, factor, anchored = anchor.is_some(), "zoom");
        zoom_by_factor(&self.axes_with_edges(group), group, self.orientation(), factor, anchor)
    }

    fn zoom_group_window(&self, group: AxisGroup, lower: f64, upper: f64) -> Result<()> {
        let _batch = self.batch();
        tracing::debug!(?group, lower, upper, "zoom to window");
        zoom_to_percent_window(&self.local_axes(group), lower, upper)
    }

    /// Turn auto ranging back on for every axis of `group` and re-derive the ranges.
    pub fn restore_auto_bounds(&self, group: AxisGroup) {
        let _batch = self.batch();
        for axis in self.local_axes(group) {
            axis.set_auto_range(true);
        }
        self.configure_group(group);
    }
}

impl Pannable for XYPlot {
    fn is_domain_pannable(&self) -> bool {
        self.config().domain_pannable
    }

    fn is_range_pannable(&self) -> bool {
        self.config().range_pannable
    }

    fn pan_domain_axes(&self, percent: f64) -> Result<()> {
        if !self.is_domain_pannable() {
            return Ok(());
        }
        self.pan_group(AxisGroup::Domain, percent)
    }

    fn pan_range_axes(&self, percent: f64) -> Result<()> {
        if !self.is_range_pannable() {
            return Ok(());
        }
        self.pan_group(AxisGroup::Range, percent)
    }
}

impl Zoomable for XYPlot {
    fn is_domain_zoomable(&self) -> bool {
        self.config().domain_zoomable
    }

    fn is_range_zoomable(&self) -> bool {
        self.config().range_zoomable
    }

    fn zoom_domain_axes(&self, factor: f64, anchor: Option<&ZoomAnchor>) -> Result<()> {
        self.zoom_group(AxisGroup::Domain, factor, anchor)
    }

    fn zoom_range_axes(&self, factor: f64, anchor: Option<&ZoomAnchor>) -> Result<()> {
        self.zoom_group(AxisGroup::Range, factor, anchor)
    }

    fn zoom_domain_window(&self, lower: f64, upper: f64) -> Result<()> {
        self.zoom_group_window(AxisGroup::Domain, lower, upper)
    }

    fn zoom_range_window(&self, lower: f64, upper: f64) -> Result<()> {
        self.zoom_group_window(AxisGroup::Range, lower, upper)
    }

    fn restore_auto_domain_bounds(&self) {
        self.restore_auto_bounds(AxisGroup::Domain);
    }

    fn restore_auto_range_bounds(&self) {
        self.restore_auto_bounds(AxisGroup::Range);
    }
}

/// Turns pointer gestures into pan and zoom calls on whatever plot is shown.
/// Plots without the capability are left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewportController {
    config: ViewportConfig,
}

impl ViewportController {
    pub fn new(config: ViewportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    fn zoom(&self, plot: &dyn Plot, factor: f64, anchor: Option<&ZoomAnchor>, domain: bool, range: bool) -> Result<()> {
        let Some(z) = plot.as_zoomable() else {
            return Ok(());
        };
        let _batch = plot.batch();
        if domain && z.is_domain_zoomable() {
            z.zoom_domain_axes(factor, anchor)?;
        }
        if range && z.is_range_zoomable() {
            z.zoom_range_axes(factor, anchor)?;
        }
        Ok(())
    }

    pub fn zoom_in_domain(&self, plot: &dyn Plot, anchor: Option<&ZoomAnchor>) -> Result<()> {
        self.zoom(plot, self.config.zoom_in_factor, anchor, true, false)
    }

    pub fn zoom_out_domain(&self, plot: &dyn Plot, anchor: Option<&ZoomAnchor>) -> Result<()> {
        self.zoom(plot, self.config.zoom_out_factor, anchor, true, false)
    }

    pub fn zoom_in_range(&self, plot: &dyn Plot, anchor: Option<&ZoomAnchor>) -> Result<()> {
        self.zoom(plot, self.config.zoom_in_factor, anchor, false, true)
    }

    pub fn zoom_out_range(&self, plot: &dyn Plot, anchor: Option<&ZoomAnchor>) -> Result<()> {
        self.zoom(plot, self.config.zoom_out_factor, anchor, false, true)
    }

    pub fn zoom_in_both(&self, plot: &dyn Plot, anchor: Option<&ZoomAnchor>) -> Result<()> {
        self.zoom(plot, self.config.zoom_in_factor, anchor, true, true)
    }

    pub fn zoom_out_both(&self, plot: &dyn Plot, anchor: Option<&ZoomAnchor>) -> Result<()> {
        self.zoom(plot, self.config.zoom_out_factor, anchor, true, true)
    }

    /// Pan by a drag of `(dx, dy)` pixels over `area`: content follows the pointer.
    pub fn pan_by_pixels(&self, plot: &dyn Plot, dx: f64, dy: f64, area: &Rect) -> Result<()> {
        let Some(p) = plot.as_pannable() else {
            return Ok(());
        };
        if area.is_empty() {
            return Ok(());
        }
        let w = -dx / area.width();
        let h = dy / area.height();
        let _batch = plot.batch();
        match plot.orientation() {
            Orientation::Vertical => {
                p.pan_domain_axes(w)?;
                p.pan_range_axes(h)
            }
            Orientation::Horizontal => {
                p.pan_domain_axes(h)?;
                p.pan_range_axes(w)
            }
        }
    }

    /// Zoom to the part of `area` covered by a rubber-band `selection`. The
    /// selection is clipped to the area; an empty overlap does nothing.
    pub fn zoom_to_selection(&self, plot: &dyn Plot, selection: &Rect, area: &Rect) -> Result<()> {
        let Some(z) = plot.as_zoomable() else {
            return Ok(());
        };
        let Some(sel) = selection.intersection(area) else {
            return Ok(());
        };
        let h_lower = clamp((sel.left - area.left) / area.width(), 0.0, 1.0);
        let h_upper = clamp((sel.right - area.left) / area.width(), 0.0, 1.0);
        let v_lower = clamp((area.bottom - sel.bottom) / area.height(), 0.0, 1.0);
        let v_upper = clamp((area.bottom - sel.top) / area.height(), 0.0, 1.0);
        let ((d_lo, d_hi), (r_lo, r_hi)) = match plot.orientation() {
            Orientation::Vertical => ((h_lower, h_upper), (v_lower, v_upper)),
            Orientation::Horizontal => ((v_lower, v_upper), (h_lower, h_upper)),
        };
        let _batch = plot.batch();
        if z.is_domain_zoomable() {
            z.zoom_domain_window(d_lo, d_hi)?;
        }
        if z.is_range_zoomable() {
            z.zoom_range_window(r_lo, r_hi)?;
        }
        Ok(())
    }

    pub fn restore_auto_bounds(&self, plot: &dyn Plot) {
        if let Some(z) = plot.as_zoomable() {
            let _batch = plot.batch();
            z.restore_auto_domain_bounds();
            z.restore_auto_range_bounds();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleKind;

    fn axis(lo: f64, hi: f64) -> AxisRef {
        ValueAxis::with_range("v", lo, hi).unwrap().shared()
    }

    fn close(a: Range, lo: f64, hi: f64) -> bool {
        (a.lower() - lo).abs() < 1e-9 && (a.upper() - hi).abs() < 1e-9
    }

    #[test]
    fn pan_moves_inverted_axes_the_other_way() {
        let plain = axis(0.0, 10.0);
        let flipped = axis(0.0, 10.0);
        flipped.set_inverted(true);
        pan(&[plain.clone(), flipped.clone()], 0.1).unwrap();
        assert!(close(plain.range(), 1.0, 11.0));
        assert!(close(flipped.range(), -1.0, 9.0));
    }

    #[test]
    fn anchored_zoom_keeps_the_anchor_value_in_place() {
        let a = axis(0.0, 100.0);
        let area = Rect::from_ltwh(0.0, 0.0, 200.0, 100.0);
        let anchor = ZoomAnchor::new(Point::new(50.0, 0.0), area);
        let before = a.device_to_value(50.0, &area, RectEdge::Bottom);
        zoom_by_factor(&[(a.clone(), RectEdge::Bottom)], AxisGroup::Domain, Orientation::Vertical, 0.5, Some(&anchor)).unwrap();
        assert!(close(a.range(), 12.5, 62.5));
        assert!((a.device_to_value(50.0, &area, RectEdge::Bottom) - before).abs() < 1e-9);
    }

    #[test]
    fn centre_zoom_on_log_axis_works_in_decades() {
        let a = axis(1.0, 10_000.0);
        a.set_scale(ScaleKind::Log10).unwrap();
        zoom_by_factor(&[(a.clone(), RectEdge::Left)], AxisGroup::Range, Orientation::Vertical, 0.5, None).unwrap();
        assert!(close(a.range(), 10.0, 1000.0));
    }

    #[test]
    fn bad_factor_or_window_touches_nothing() {
        let a = axis(0.0, 10.0);
        assert!(zoom_by_factor(&[(a.clone(), RectEdge::Bottom)], AxisGroup::Domain, Orientation::Vertical, 0.0, None).is_err());
        assert!(zoom_to_percent_window(&[a.clone()], 0.6, 0.4).is_err());
        assert!(zoom_to_percent_window(&[a.clone()], f64::NAN, 0.4).is_err());
        assert_eq!(a.range(), Range::new(0.0, 10.0).unwrap());
    }

    #[test]
    fn window_on_inverted_axis_is_mirrored() {
        let a = axis(0.0, 10.0);
        a.set_inverted(true);
        zoom_to_percent_window(&[a.clone()], 0.0, 0.2).unwrap();
        assert!(close(a.range(), 8.0, 10.0));
    }

    #[test]
    fn failed_validation_is_all_or_nothing() {
        let small = axis(0.0, 10.0);
        let huge = axis(-1e308, 1e308);
        let axes = [(small.clone(), RectEdge::Bottom), (huge.clone(), RectEdge::Top)];
        let err = zoom_by_factor(&axes, AxisGroup::Domain, Orientation::Vertical, 4.0, None).unwrap_err();
        assert!(matches!(err, PlotError::InvalidRange { .. }));
        assert_eq!(small.range(), Range::new(0.0, 10.0).unwrap());
        assert!(!small.is_auto_range());
    }
}
