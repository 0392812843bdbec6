// File: crates/chart-model/src/renderer.rs
// Summary: Renderer trait (bounds finding, annotations) with line and stacked implementations.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::annotation::AnnotationRef;
use crate::bounds;
use crate::dataset::XYDataset;
use crate::event::Listeners;
use crate::range::Range;

pub type RendererRef = Rc<dyn XYItemRenderer>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererChange {
    SeriesVisibility { series: usize, visible: bool },
    Annotations,
}

/// Draws a dataset; for the model it decides how much of the data must be visible.
pub trait XYItemRenderer {
    fn id(&self) -> &'static str;

    fn find_domain_bounds(&self, dataset: &dyn XYDataset) -> Option<Range> {
        bounds::find_domain_bounds(dataset)
    }

    fn find_range_bounds(&self, dataset: &dyn XYDataset) -> Option<Range> {
        bounds::find_range_bounds(dataset)
    }

    /// Annotations drawn with this renderer's datasets.
    fn annotations(&self) -> Vec<AnnotationRef> {
        Vec::new()
    }

    fn changes(&self) -> &Listeners<RendererChange>;
}

/// Per-series visibility and renderer-level annotations shared by the renderers below.
#[derive(Default)]
struct RendererState {
    hidden: RefCell<BTreeSet<usize>>,
    annotations: RefCell<Vec<AnnotationRef>>,
    listeners: Listeners<RendererChange>,
}

impl RendererState {
    fn is_visible(&self, series: usize) -> bool {
        !self.hidden.borrow().contains(&series)
    }

    fn set_visible(&self, series: usize, visible: bool) {
        let changed = {
            let mut hidden = self.hidden.borrow_mut();
            if visible { hidden.remove(&series) } else { hidden.insert(series) }
        };
        if changed {
            self.listeners.emit(&RendererChange::SeriesVisibility { series, visible });
        }
    }

    fn add_annotation(&self, annotation: AnnotationRef) {
        self.annotations.borrow_mut().push(annotation);
        self.listeners.emit(&RendererChange::Annotations);
    }

    fn remove_annotation(&self, annotation: &AnnotationRef) -> bool {
        let removed = {
            let mut all = self.annotations.borrow_mut();
            let before = all.len();
            all.retain(|a| !Rc::ptr_eq(a, annotation));
            all.len() != before
        };
        if removed {
            self.listeners.emit(&RendererChange::Annotations);
        }
        removed
    }
}

/// Connects items with lines. Hidden series are left out of the bounds.
#[derive(Default)]
pub struct LineRenderer {
    state: RendererState,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> RendererRef {
        Rc::new(self)
    }

    pub fn is_series_visible(&self, series: usize) -> bool {
        self.state.is_visible(series)
    }

    pub fn set_series_visible(&self, series: usize, visible: bool) {
        self.state.set_visible(series, visible);
    }

    pub fn add_annotation(&self, annotation: AnnotationRef) {
        self.state.add_annotation(annotation);
    }

    pub fn remove_annotation(&self, annotation: &AnnotationRef) -> bool {
        self.state.remove_annotation(annotation)
    }
}

impl XYItemRenderer for LineRenderer {
    fn id(&self) -> &'static str { "line" }

    fn find_domain_bounds(&self, dataset: &dyn XYDataset) -> Option<Range> {
        bounds::find_domain_bounds_where(dataset, |s| self.state.is_visible(s))
    }

    fn find_range_bounds(&self, dataset: &dyn XYDataset) -> Option<Range> {
        bounds::find_range_bounds_where(dataset, |s| self.state.is_visible(s))
    }

    fn annotations(&self) -> Vec<AnnotationRef> {
        self.state.annotations.borrow().clone()
    }

    fn changes(&self) -> &Listeners<RendererChange> {
        &self.state.listeners
    }
}

/// Stacks the visible series item by item, so the range extent is the stacked
/// totals rather than the individual values.
#[derive(Default)]
pub struct StackedRenderer {
    state: RendererState,
}

impl StackedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> RendererRef {
        Rc::new(self)
    }

    pub fn set_series_visible(&self, series: usize, visible: bool) {
        self.state.set_visible(series, visible);
    }

    pub fn add_annotation(&self, annotation: AnnotationRef) {
        self.state.add_annotation(annotation);
    }
}

impl XYItemRenderer for StackedRenderer {
    fn id(&self) -> &'static str { "stacked" }

    fn find_domain_bounds(&self, dataset: &dyn XYDataset) -> Option<Range> {
        bounds::find_domain_bounds_where(dataset, |s| self.state.is_visible(s))
    }

    fn find_range_bounds(&self, dataset: &dyn XYDataset) -> Option<Range> {
        bounds::find_stacked_range_bounds(dataset, |s| self.state.is_visible(s))
    }

    fn annotations(&self) -> Vec<AnnotationRef> {
        self.state.annotations.borrow().clone()
    }

    fn changes(&self) -> &Listeners<RendererChange> {
        &self.state.listeners
    }
}
