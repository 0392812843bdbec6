// File: crates/chart-model/src/plot.rs
// Summary: XYPlot composes axes, datasets, renderers, annotations and markers under one notifier.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::aggregate::RangeAggregator;
use crate::annotation::AnnotationRef;
use crate::axis::{AxisChange, AxisRef};
use crate::binding::DatasetBinding;
use crate::config::PlotConfig;
use crate::dataset::DatasetRef;
use crate::error::{PlotError, Result};
use crate::event::{Listeners, SubscriptionId};
use crate::geometry::{Point, Rect};
use crate::location::{AxisGroup, AxisLocation, Orientation, RectEdge};
use crate::marker::{Layer, Marker, MarkerStore};
use crate::range::Range;
use crate::registry::AxisRegistry;
use crate::renderer::RendererRef;
use crate::viewport::{Pannable, Zoomable};

/// Longest parent chain followed by axis lookups.
pub const MAX_PARENT_DEPTH: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotEvent {
    AxisChanged { group: AxisGroup, index: usize },
    DatasetChanged { index: usize },
    RendererChanged { index: usize },
    AnnotationsChanged,
    MarkersChanged,
    /// Several kinds of change at once, or one with no finer event.
    General,
}

/// Common surface of plots; capabilities are reached through typed accessors.
pub trait Plot {
    fn plot_type(&self) -> &'static str;
    fn orientation(&self) -> Orientation;

    /// Hold plot notifications until the guard drops.
    fn batch(&self) -> BatchGuard;

    fn as_zoomable(&self) -> Option<&dyn Zoomable> {
        None
    }

    fn as_pannable(&self) -> Option<&dyn Pannable> {
        None
    }
}

#[derive(Debug, Default)]
pub(crate) struct PlotNotifier {
    listeners: Listeners<PlotEvent>,
    depth: Cell<usize>,
    pending: Cell<Option<PlotEvent>>,
    muted: Cell<usize>,
    stale: Cell<bool>,
}

impl PlotNotifier {
    fn notify(&self, event: PlotEvent) {
        if self.muted.get() > 0 {
            return;
        }
        if self.depth.get() == 0 {
            self.listeners.emit(&event);
            return;
        }
        let merged = match self.pending.get() {
            None => event,
            Some(prev) if prev == event => prev,
            Some(_) => PlotEvent::General,
        };
        self.pending.set(Some(merged));
    }

    fn batch(self: &Rc<Self>) -> BatchGuard {
        self.depth.set(self.depth.get() + 1);
        BatchGuard { notifier: Rc::clone(self) }
    }

    fn mute(self: &Rc<Self>) -> MuteGuard {
        self.muted.set(self.muted.get() + 1);
        MuteGuard { notifier: Rc::clone(self) }
    }
}

/// Suppresses plot notifications while alive. Guards nest; when the outermost
/// one drops it re-emits the suppressed event if all of them were the same, a
/// single [`PlotEvent::General`] otherwise, and nothing if the batch was quiet.
#[must_use = "notifications resume as soon as the guard is dropped"]
pub struct BatchGuard {
    notifier: Rc<PlotNotifier>,
}

impl Drop for BatchGuard {
    fn drop(&mut self) {
        let n = &self.notifier;
        let depth = n.depth.get().saturating_sub(1);
        n.depth.set(depth);
        if depth == 0 {
            if let Some(event) = n.pending.take() {
                n.listeners.emit(&event);
            }
        }
    }
}

/// Drops plot notifications raised as a side effect of re-ranging.
struct MuteGuard {
    notifier: Rc<PlotNotifier>,
}

impl Drop for MuteGuard {
    fn drop(&mut self) {
        let n = &self.notifier;
        n.muted.set(n.muted.get().saturating_sub(1));
    }
}

struct PlotState {
    config: PlotConfig,
    domain_axes: AxisRegistry,
    range_axes: AxisRegistry,
    binding: DatasetBinding,
    annotations: Vec<AnnotationRef>,
    domain_markers: MarkerStore,
    range_markers: MarkerStore,
    parent: Option<Weak<RefCell<PlotState>>>,
}

impl PlotState {
    fn registry(&self, group: AxisGroup) -> &AxisRegistry {
        match group {
            AxisGroup::Domain => &self.domain_axes,
            AxisGroup::Range => &self.range_axes,
        }
    }

    fn registry_mut(&mut self, group: AxisGroup) -> &mut AxisRegistry {
        match group {
            AxisGroup::Domain => &mut self.domain_axes,
            AxisGroup::Range => &mut self.range_axes,
        }
    }

    fn markers(&self, group: AxisGroup) -> &MarkerStore {
        match group {
            AxisGroup::Domain => &self.domain_markers,
            AxisGroup::Range => &self.range_markers,
        }
    }

    fn markers_mut(&mut self, group: AxisGroup) -> &mut MarkerStore {
        match group {
            AxisGroup::Domain => &mut self.domain_markers,
            AxisGroup::Range => &mut self.range_markers,
        }
    }

    fn aggregator(&self) -> RangeAggregator<'_> {
        RangeAggregator::new(&self.binding, &self.annotations)
    }

    /// Evaluate `f` on this plot, then on each ancestor, until it yields.
    fn search_chain<T>(&self, f: impl Fn(&PlotState) -> Option<T>) -> Option<T> {
        if let Some(found) = f(self) {
            return Some(found);
        }
        let mut next = self.parent.as_ref().and_then(Weak::upgrade);
        for _ in 0..MAX_PARENT_DEPTH {
            let Some(plot) = next else {
                return None;
            };
            let Ok(state) = plot.try_borrow() else {
                return None;
            };
            if let Some(found) = f(&state) {
                return Some(found);
            }
            next = state.parent.as_ref().and_then(Weak::upgrade);
        }
        if next.is_some() {
            tracing::warn!(max = MAX_PARENT_DEPTH, "parent chain too deep, lookup stopped");
        }
        None
    }

    fn find_axis(&self, group: AxisGroup, index: usize) -> Option<AxisRef> {
        self.search_chain(|s| s.registry(group).get(index))
    }

    fn find_axis_index(&self, group: AxisGroup, axis: &AxisRef) -> Option<usize> {
        self.search_chain(|s| s.registry(group).index_of(axis))
    }
}

/// Re-derive the range of every auto-ranged axis in `groups` and report whether
/// any range moved. Axis events raised on the way are not re-published. If the
/// state is busy the plot is marked stale instead; see [`XYPlot::configure_axes`].
fn configure(state: &RefCell<PlotState>, notifier: &Rc<PlotNotifier>, groups: &[AxisGroup]) -> bool {
    let _mute = notifier.mute();
    let Ok(state) = state.try_borrow() else {
        tracing::debug!("plot state busy, axis configuration deferred");
        notifier.stale.set(true);
        return false;
    };
    let aggregator = state.aggregator();
    let mut moved = false;
    for &group in groups {
        for (index, axis) in state.registry(group).axes() {
            if axis.is_auto_range() {
                let before = axis.range();
                axis.auto_adjust_range(aggregator.data_range(group, index));
                moved |= axis.range() != before;
            }
        }
    }
    if groups.len() == AxisGroup::BOTH.len() {
        notifier.stale.set(false);
    }
    moved
}

/// Plot of XY datasets against any number of domain and range axes.
///
/// Every component is shared (`Rc`) and may be mutated from outside; the plot
/// listens to each one and re-publishes the change as a [`PlotEvent`].
pub struct XYPlot {
    state: Rc<RefCell<PlotState>>,
    notifier: Rc<PlotNotifier>,
}

impl Default for XYPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl XYPlot {
    pub fn new() -> Self {
        Self::with_config(PlotConfig::default())
    }

    pub fn with_config(config: PlotConfig) -> Self {
        let state = PlotState {
            config,
            domain_axes: AxisRegistry::new(AxisGroup::Domain, config.domain_axis_location),
            range_axes: AxisRegistry::new(AxisGroup::Range, config.range_axis_location),
            binding: DatasetBinding::new(),
            annotations: Vec::new(),
            domain_markers: MarkerStore::new(),
            range_markers: MarkerStore::new(),
            parent: None,
        };
        Self { state: Rc::new(RefCell::new(state)), notifier: Rc::new(PlotNotifier::default()) }
    }

    /// Plot with one domain axis, one range axis, a dataset and its renderer at index 0.
    pub fn with_components(
        config: PlotConfig,
        domain: AxisRef,
        range: AxisRef,
        dataset: DatasetRef,
        renderer: Option<RendererRef>,
    ) -> Self {
        let plot = Self::with_config(config);
        {
            let _batch = plot.notifier.batch();
            plot.set_axis(AxisGroup::Domain, 0, Some(domain));
            plot.set_axis(AxisGroup::Range, 0, Some(range));
            plot.set_renderer(0, renderer);
            plot.set_dataset(0, Some(dataset));
        }
        plot
    }

    pub fn config(&self) -> PlotConfig {
        self.state.borrow().config
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        let changed = {
            let mut state = self.state.borrow_mut();
            std::mem::replace(&mut state.config.orientation, orientation) != orientation
        };
        if changed {
            self.notifier.notify(PlotEvent::General);
        }
    }

    pub fn set_domain_pannable(&self, pannable: bool) {
        self.state.borrow_mut().config.domain_pannable = pannable;
    }

    pub fn set_range_pannable(&self, pannable: bool) {
        self.state.borrow_mut().config.range_pannable = pannable;
    }

    pub fn set_domain_zoomable(&self, zoomable: bool) {
        self.state.borrow_mut().config.domain_zoomable = zoomable;
    }

    pub fn set_range_zoomable(&self, zoomable: bool) {
        self.state.borrow_mut().config.range_zoomable = zoomable;
    }

    // ---- notification ----

    pub fn subscribe(&self, callback: impl Fn(&PlotEvent) + 'static) -> SubscriptionId {
        self.notifier.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.listeners.unsubscribe(id)
    }

    /// `true` when a dataset changed while the plot could not re-range its axes.
    pub fn needs_configure(&self) -> bool {
        self.notifier.stale.get()
    }

    /// Re-derive every auto-ranged axis from the current data. Sends
    /// [`PlotEvent::General`] if any range moved.
    pub fn configure_axes(&self) {
        if configure(&self.state, &self.notifier, &AxisGroup::BOTH) {
            self.notifier.notify(PlotEvent::General);
        }
    }

    pub(crate) fn configure_group(&self, group: AxisGroup) {
        if configure(&self.state, &self.notifier, &[group]) {
            self.notifier.notify(PlotEvent::General);
        }
    }

    /// Re-range after a component edit that publishes its own event.
    fn rerange(&self) {
        configure(&self.state, &self.notifier, &AxisGroup::BOTH);
    }

    fn subscribe_axis(&self, group: AxisGroup, index: usize, axis: &AxisRef) -> SubscriptionId {
        let notifier = Rc::clone(&self.notifier);
        let state = Rc::downgrade(&self.state);
        axis.changes().subscribe(move |change| {
            if *change == AxisChange::AutoRange(true) {
                if let Some(state) = state.upgrade() {
                    configure(&state, &notifier, &[group]);
                }
            }
            notifier.notify(PlotEvent::AxisChanged { group, index });
        })
    }

    fn subscribe_dataset(&self, index: usize, dataset: &DatasetRef) -> SubscriptionId {
        let notifier = Rc::clone(&self.notifier);
        let state = Rc::downgrade(&self.state);
        dataset.changes().subscribe(move |change| {
            tracing::trace!(index, ?change, "dataset changed");
            if let Some(state) = state.upgrade() {
                configure(&state, &notifier, &AxisGroup::BOTH);
            }
            notifier.notify(PlotEvent::DatasetChanged { index });
        })
    }

    fn subscribe_renderer(&self, index: usize, renderer: &RendererRef) -> SubscriptionId {
        let notifier = Rc::clone(&self.notifier);
        let state = Rc::downgrade(&self.state);
        renderer.changes().subscribe(move |_| {
            if let Some(state) = state.upgrade() {
                configure(&state, &notifier, &AxisGroup::BOTH);
            }
            notifier.notify(PlotEvent::RendererChanged { index });
        })
    }

    // ---- axes ----

    /// Put `axis` at `index` of `group`, or empty the slot with `None`. Emptying
    /// a slot also removes the index from every dataset mapping.
    pub fn set_axis(&self, group: AxisGroup, index: usize, axis: Option<AxisRef>) {
        let _batch = self.notifier.batch();
        let old = {
            let mut state = self.state.borrow_mut();
            match axis {
                Some(axis) => {
                    let sub = self.subscribe_axis(group, index, &axis);
                    state.registry_mut(group).insert(index, axis, sub)
                }
                None => {
                    let old = state.registry_mut(group).remove(index);
                    if old.is_some() {
                        state.binding.forget_axis(group, index);
                    }
                    old
                }
            }
        };
        if let Some((old, sub)) = old {
            old.changes().unsubscribe(sub);
        }
        tracing::debug!(?group, index, "axis slot updated");
        self.rerange();
        self.notifier.notify(PlotEvent::AxisChanged { group, index });
    }

    /// Axis at `index`, falling back to the parent chain.
    pub fn axis(&self, group: AxisGroup, index: usize) -> Option<AxisRef> {
        self.state.borrow().find_axis(group, index)
    }

    /// Local axes in ascending index order.
    pub fn axes(&self, group: AxisGroup) -> Vec<(usize, AxisRef)> {
        self.state.borrow().registry(group).axes()
    }

    pub fn axis_count(&self, group: AxisGroup) -> usize {
        self.state.borrow().registry(group).len()
    }

    /// Remove every axis of `group` together with the group's dataset mappings.
    pub fn clear_axes(&self, group: AxisGroup) {
        let _batch = self.notifier.batch();
        let removed = {
            let mut state = self.state.borrow_mut();
            state.binding.forget_all_axes(group);
            state.registry_mut(group).drain()
        };
        for (axis, sub) in &removed {
            axis.changes().unsubscribe(*sub);
        }
        tracing::debug!(?group, count = removed.len(), "axes cleared");
        self.notifier.notify(PlotEvent::General);
    }

    pub fn domain_axis(&self) -> Option<AxisRef> {
        self.axis(AxisGroup::Domain, 0)
    }

    pub fn range_axis(&self) -> Option<AxisRef> {
        self.axis(AxisGroup::Range, 0)
    }

    pub fn set_domain_axis(&self, axis: Option<AxisRef>) {
        self.set_axis(AxisGroup::Domain, 0, axis);
    }

    pub fn set_range_axis(&self, axis: Option<AxisRef>) {
        self.set_axis(AxisGroup::Range, 0, axis);
    }

    /// Local index of `axis`, else its index in the parent chain.
    pub fn axis_index(&self, group: AxisGroup, axis: &AxisRef) -> Option<usize> {
        self.state.borrow().find_axis_index(group, axis)
    }

    pub fn axis_location(&self, group: AxisGroup, index: usize) -> AxisLocation {
        self.state.borrow().registry(group).location(index)
    }

    pub fn set_axis_location(&self, group: AxisGroup, index: usize, location: Option<AxisLocation>) -> Result<()> {
        self.state.borrow_mut().registry_mut(group).set_location(index, location)?;
        self.notifier.notify(PlotEvent::AxisChanged { group, index });
        Ok(())
    }

    pub fn axis_edge(&self, group: AxisGroup, index: usize) -> RectEdge {
        let state = self.state.borrow();
        state.registry(group).resolve_edge(index, state.config.orientation)
    }

    pub(crate) fn axes_with_edges(&self, group: AxisGroup) -> Vec<(AxisRef, RectEdge)> {
        let state = self.state.borrow();
        let registry = state.registry(group);
        registry
            .axes()
            .into_iter()
            .map(|(index, axis)| (axis, registry.resolve_edge(index, state.config.orientation)))
            .collect()
    }

    // ---- datasets and renderers ----

    /// Put `dataset` at `index`, or empty the slot with `None`. Emptying a slot
    /// drops the dataset's axis mappings and markers.
    pub fn set_dataset(&self, index: usize, dataset: Option<DatasetRef>) {
        let _batch = self.notifier.batch();
        let (old, markers_dropped) = {
            let mut state = self.state.borrow_mut();
            match dataset {
                Some(dataset) => {
                    let sub = self.subscribe_dataset(index, &dataset);
                    (state.binding.insert_dataset(index, dataset, sub), false)
                }
                None => {
                    let old = state.binding.remove_dataset(index);
                    let domain = state.domain_markers.clear_index(index);
                    let range = state.range_markers.clear_index(index);
                    (old, domain || range)
                }
            }
        };
        if let Some((old, sub)) = old {
            old.changes().unsubscribe(sub);
        }
        if markers_dropped {
            self.notifier.notify(PlotEvent::MarkersChanged);
        }
        tracing::debug!(index, "dataset slot updated");
        self.rerange();
        self.notifier.notify(PlotEvent::DatasetChanged { index });
    }

    pub fn dataset(&self, index: usize) -> Option<DatasetRef> {
        self.state.borrow().binding.dataset(index)
    }

    pub fn datasets(&self) -> Vec<(usize, DatasetRef)> {
        self.state.borrow().binding.datasets()
    }

    pub fn dataset_count(&self) -> usize {
        self.state.borrow().binding.dataset_count()
    }

    pub fn index_of_dataset(&self, dataset: &DatasetRef) -> Option<usize> {
        self.state.borrow().binding.index_of_dataset(dataset)
    }

    pub fn set_renderer(&self, index: usize, renderer: Option<RendererRef>) {
        let _batch = self.notifier.batch();
        let old = {
            let mut state = self.state.borrow_mut();
            match renderer {
                Some(renderer) => {
                    let sub = self.subscribe_renderer(index, &renderer);
                    state.binding.insert_renderer(index, renderer, sub)
                }
                None => state.binding.remove_renderer(index),
            }
        };
        if let Some((old, sub)) = old {
            old.changes().unsubscribe(sub);
        }
        tracing::debug!(index, "renderer slot updated");
        self.rerange();
        self.notifier.notify(PlotEvent::RendererChanged { index });
    }

    pub fn renderer(&self, index: usize) -> Option<RendererRef> {
        self.state.borrow().binding.renderer(index)
    }

    pub fn renderer_count(&self) -> usize {
        self.state.borrow().binding.renderer_count()
    }

    /// Own renderer of the dataset, else renderer 0.
    pub fn renderer_for_dataset(&self, dataset_index: usize) -> Option<RendererRef> {
        self.state.borrow().binding.renderer_for_dataset(dataset_index)
    }

    pub fn index_of_renderer(&self, renderer: &RendererRef) -> Option<usize> {
        self.state.borrow().binding.index_of_renderer(renderer)
    }

    // ---- mappings ----

    /// Draw dataset `dataset_index` against the listed axes of `group`; the first
    /// one is used for coordinate conversion. `None` restores the implicit `[0]`.
    pub fn map_dataset_to_axes(&self, group: AxisGroup, dataset_index: usize, axis_indices: Option<&[usize]>) -> Result<()> {
        self.state.borrow_mut().binding.map_to_axes(group, dataset_index, axis_indices)?;
        tracing::debug!(?group, dataset_index, ?axis_indices, "dataset mapped");
        self.rerange();
        self.notifier.notify(PlotEvent::DatasetChanged { index: dataset_index });
        Ok(())
    }

    pub fn map_dataset_to_axis(&self, group: AxisGroup, dataset_index: usize, axis_index: usize) -> Result<()> {
        self.map_dataset_to_axes(group, dataset_index, Some(&[axis_index]))
    }

    pub fn axis_indices_for_dataset(&self, group: AxisGroup, dataset_index: usize) -> Vec<usize> {
        self.state.borrow().binding.axis_indices(group, dataset_index).to_vec()
    }

    /// Axis the dataset's coordinates are converted with.
    pub fn axis_for_dataset(&self, group: AxisGroup, dataset_index: usize) -> Option<AxisRef> {
        let state = self.state.borrow();
        let index = state.binding.primary_axis_index(group, dataset_index);
        state.find_axis(group, index)
    }

    pub fn datasets_mapped_to_axis(&self, group: AxisGroup, axis_index: usize) -> Vec<(usize, DatasetRef)> {
        self.state.borrow().binding.datasets_mapped_to_axis(group, axis_index)
    }

    // ---- ranges and coordinates ----

    /// Data extent `axis` has to show: the datasets mapped to its index (domain
    /// group searched first), plus opted-in annotations for index 0. `None` if
    /// the axis is unknown to this plot or nothing contributes.
    pub fn data_range(&self, axis: &AxisRef) -> Option<Range> {
        let state = self.state.borrow();
        let (group, index) = AxisGroup::BOTH
            .into_iter()
            .find_map(|g| state.find_axis_index(g, axis).map(|i| (g, i)))?;
        state.aggregator().data_range(group, index)
    }

    pub fn value_to_device(&self, group: AxisGroup, index: usize, value: f64, area: &Rect) -> Option<f64> {
        let axis = self.axis(group, index)?;
        Some(axis.value_to_device(value, area, self.axis_edge(group, index)))
    }

    pub fn device_to_value(&self, group: AxisGroup, index: usize, coord: f64, area: &Rect) -> Option<f64> {
        let axis = self.axis(group, index)?;
        Some(axis.device_to_value(coord, area, self.axis_edge(group, index)))
    }

    /// Device point of the item `(x, y)` of dataset `dataset_index`, honouring orientation.
    pub fn data_to_device(&self, dataset_index: usize, x: f64, y: f64, area: &Rect) -> Option<Point> {
        let (domain, range) = self.dataset_axis_indices(dataset_index);
        let dx = self.value_to_device(AxisGroup::Domain, domain, x, area)?;
        let ry = self.value_to_device(AxisGroup::Range, range, y, area)?;
        Some(match self.orientation() {
            Orientation::Vertical => Point::new(dx, ry),
            Orientation::Horizontal => Point::new(ry, dx),
        })
    }

    /// Data `(x, y)` under `point` on the axes of dataset `dataset_index`.
    pub fn device_to_data(&self, dataset_index: usize, point: Point, area: &Rect) -> Option<(f64, f64)> {
        let (domain, range) = self.dataset_axis_indices(dataset_index);
        let (dc, rc) = match self.orientation() {
            Orientation::Vertical => (point.x, point.y),
            Orientation::Horizontal => (point.y, point.x),
        };
        let x = self.device_to_value(AxisGroup::Domain, domain, dc, area)?;
        let y = self.device_to_value(AxisGroup::Range, range, rc, area)?;
        Some((x, y))
    }

    fn dataset_axis_indices(&self, dataset_index: usize) -> (usize, usize) {
        let state = self.state.borrow();
        (
            state.binding.primary_axis_index(AxisGroup::Domain, dataset_index),
            state.binding.primary_axis_index(AxisGroup::Range, dataset_index),
        )
    }

    // ---- annotations ----

    pub fn add_annotation(&self, annotation: AnnotationRef) {
        self.state.borrow_mut().annotations.push(annotation);
        self.annotations_changed();
    }

    pub fn remove_annotation(&self, annotation: &AnnotationRef) -> bool {
        let removed = {
            let mut state = self.state.borrow_mut();
            let before = state.annotations.len();
            state.annotations.retain(|a| !Rc::ptr_eq(a, annotation));
            state.annotations.len() != before
        };
        if removed {
            self.annotations_changed();
        }
        removed
    }

    pub fn clear_annotations(&self) {
        let had = {
            let mut state = self.state.borrow_mut();
            let had = !state.annotations.is_empty();
            state.annotations.clear();
            had
        };
        if had {
            self.annotations_changed();
        }
    }

    pub fn annotations(&self) -> Vec<AnnotationRef> {
        self.state.borrow().annotations.clone()
    }

    fn annotations_changed(&self) {
        self.rerange();
        self.notifier.notify(PlotEvent::AnnotationsChanged);
    }

    // ---- markers ----

    /// Attach `marker` to the `group` axes used by dataset `index`.
    pub fn add_marker(&self, group: AxisGroup, index: usize, marker: Marker, layer: Layer) {
        self.state.borrow_mut().markers_mut(group).add(index, layer, marker);
        self.notifier.notify(PlotEvent::MarkersChanged);
    }

    pub fn remove_marker(&self, group: AxisGroup, index: usize, marker: &Marker, layer: Layer) -> bool {
        let removed = self.state.borrow_mut().markers_mut(group).remove(index, layer, marker);
        if removed {
            self.notifier.notify(PlotEvent::MarkersChanged);
        }
        removed
    }

    pub fn markers(&self, group: AxisGroup, index: usize, layer: Layer) -> Vec<Marker> {
        self.state.borrow().markers(group).markers(index, layer).to_vec()
    }

    /// Drop every marker of `group`.
    pub fn clear_markers(&self, group: AxisGroup) {
        if self.state.borrow_mut().markers_mut(group).clear_all() {
            self.notifier.notify(PlotEvent::MarkersChanged);
        }
    }

    // ---- parent ----

    /// Link this plot under `parent` for axis lookups, or unlink with `None`.
    /// Rejects links that would close a loop or exceed [`MAX_PARENT_DEPTH`].
    pub fn set_parent(&self, parent: Option<&XYPlot>) -> Result<()> {
        let Some(parent) = parent else {
            self.state.borrow_mut().parent = None;
            return Ok(());
        };
        let mut cursor = Some(Rc::clone(&parent.state));
        let mut depth = 0;
        while let Some(plot) = cursor {
            if Rc::ptr_eq(&plot, &self.state) {
                return Err(PlotError::invalid("parent chain would contain the plot itself"));
            }
            depth += 1;
            if depth > MAX_PARENT_DEPTH {
                return Err(PlotError::invalid(format!("parent chain longer than {MAX_PARENT_DEPTH}")));
            }
            cursor = plot.try_borrow().ok().and_then(|s| s.parent.as_ref().and_then(Weak::upgrade));
        }
        self.state.borrow_mut().parent = Some(Rc::downgrade(&parent.state));
        tracing::debug!(depth, "parent plot set");
        Ok(())
    }

    pub fn has_parent(&self) -> bool {
        self.state.borrow().parent.as_ref().is_some_and(|p| p.strong_count() > 0)
    }
}

impl Plot for XYPlot {
    fn plot_type(&self) -> &'static str {
        "XY"
    }

    fn orientation(&self) -> Orientation {
        self.state.borrow().config.orientation
    }

    fn batch(&self) -> BatchGuard {
        self.notifier.batch()
    }

    fn as_zoomable(&self) -> Option<&dyn Zoomable> {
        Some(self)
    }

    fn as_pannable(&self) -> Option<&dyn Pannable> {
        Some(self)
    }
}

impl Drop for XYPlot {
    fn drop(&mut self) {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            return;
        };
        for group in AxisGroup::BOTH {
            for (axis, sub) in state.registry_mut(group).drain() {
                axis.changes().unsubscribe(sub);
            }
        }
        let (datasets, renderers) = state.binding.drain_subscriptions();
        for (dataset, sub) in datasets {
            dataset.changes().unsubscribe(sub);
        }
        for (renderer, sub) in renderers {
            renderer.changes().unsubscribe(sub);
        }
    }
}
