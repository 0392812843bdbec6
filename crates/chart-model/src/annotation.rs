// File: crates/chart-model/src/annotation.rs
// Summary: Annotation trait with an opt-in data-bounds capability, plus box and line annotations.

use std::rc::Rc;

use crate::error::Result;
use crate::range::Range;

pub type AnnotationRef = Rc<dyn XYAnnotation>;

/// Extent an annotation occupies in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationBounds {
    pub x_range: Range,
    pub y_range: Range,
    /// Only annotations that opt in are folded into auto ranging.
    pub include_in_data_bounds: bool,
}

/// Something drawn over the plot in data coordinates. Drawing itself lives with
/// the caller; the model only cares whether it contributes to data bounds.
pub trait XYAnnotation {
    fn id(&self) -> &'static str;

    /// Declared extent for annotations that can take part in auto ranging.
    fn bounds_info(&self) -> Option<AnnotationBounds> {
        None
    }
}

/// Rectangle in data space. Counted by auto ranging unless built with
/// `with_data_bounds(false)`; the choice is fixed once the box is shared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxAnnotation {
    x_range: Range,
    y_range: Range,
    include_in_data_bounds: bool,
}

impl BoxAnnotation {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self> {
        Ok(Self {
            x_range: Range::spanning(x0, x1)?,
            y_range: Range::spanning(y0, y1)?,
            include_in_data_bounds: true,
        })
    }

    pub fn with_data_bounds(mut self, include: bool) -> Self {
        self.include_in_data_bounds = include;
        self
    }

    pub fn includes_in_data_bounds(&self) -> bool {
        self.include_in_data_bounds
    }

    pub fn x_range(&self) -> Range { self.x_range }
    pub fn y_range(&self) -> Range { self.y_range }
}

impl XYAnnotation for BoxAnnotation {
    fn id(&self) -> &'static str { "box" }

    fn bounds_info(&self) -> Option<AnnotationBounds> {
        Some(AnnotationBounds {
            x_range: self.x_range,
            y_range: self.y_range,
            include_in_data_bounds: self.include_in_data_bounds,
        })
    }
}

/// Segment between two data points; never affects auto ranging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineAnnotation {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineAnnotation {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl XYAnnotation for LineAnnotation {
    fn id(&self) -> &'static str { "line" }
}
