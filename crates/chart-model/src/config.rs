// File: crates/chart-model/src/config.rs
// Summary: Plot and viewport configuration passed to constructors.

use crate::location::{AxisLocation, Orientation};

/// Construction-time settings of an [`XYPlot`](crate::plot::XYPlot).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotConfig {
    pub orientation: Orientation,
    /// Location of domain axis 0.
    pub domain_axis_location: AxisLocation,
    /// Location of range axis 0.
    pub range_axis_location: AxisLocation,
    pub domain_pannable: bool,
    pub range_pannable: bool,
    pub domain_zoomable: bool,
    pub range_zoomable: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            domain_axis_location: AxisLocation::BottomOrLeft,
            range_axis_location: AxisLocation::BottomOrLeft,
            domain_pannable: false,
            range_pannable: false,
            domain_zoomable: true,
            range_zoomable: true,
        }
    }
}

impl PlotConfig {
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable panning for both groups.
    pub fn pannable(mut self) -> Self {
        self.domain_pannable = true;
        self.range_pannable = true;
        self
    }
}

/// Zoom factors used by the gesture helpers of
/// [`ViewportController`](crate::viewport::ViewportController).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportConfig {
    /// Contract: in (0, 1).
    pub zoom_in_factor: f64,
    /// Contract: > 1.
    pub zoom_out_factor: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { zoom_in_factor: 0.5, zoom_out_factor: 2.0 }
    }
}
