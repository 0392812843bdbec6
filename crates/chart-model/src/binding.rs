// File: crates/chart-model/src/binding.rs
// Summary: Indexed datasets and renderers, and the dataset -> axis index mappings.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::dataset::DatasetRef;
use crate::error::{PlotError, Result};
use crate::event::SubscriptionId;
use crate::location::AxisGroup;
use crate::renderer::RendererRef;

/// Datasets mapped nowhere explicitly use this list.
const PRIMARY_ONLY: &[usize] = &[0];

struct Slot<T> {
    item: T,
    subscription: SubscriptionId,
}

/// Dataset and renderer slots plus per-group axis mappings.
///
/// A stored mapping list is never empty and never holds the same index twice.
#[derive(Default)]
pub struct DatasetBinding {
    datasets: BTreeMap<usize, Slot<DatasetRef>>,
    renderers: BTreeMap<usize, Slot<RendererRef>>,
    domain_map: BTreeMap<usize, Vec<usize>>,
    range_map: BTreeMap<usize, Vec<usize>>,
}

/// Reject empty lists and repeated indices.
pub fn validate_axis_indices(indices: &[usize]) -> Result<()> {
    if indices.is_empty() {
        return Err(PlotError::invalid("axis index list is empty"));
    }
    let mut seen = BTreeSet::new();
    for &i in indices {
        if !seen.insert(i) {
            return Err(PlotError::invalid(format!("axis index {i} listed twice")));
        }
    }
    Ok(())
}

impl DatasetBinding {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, group: AxisGroup) -> &BTreeMap<usize, Vec<usize>> {
        match group {
            AxisGroup::Domain => &self.domain_map,
            AxisGroup::Range => &self.range_map,
        }
    }

    fn map_mut(&mut self, group: AxisGroup) -> &mut BTreeMap<usize, Vec<usize>> {
        match group {
            AxisGroup::Domain => &mut self.domain_map,
            AxisGroup::Range => &mut self.range_map,
        }
    }

    pub fn dataset(&self, index: usize) -> Option<DatasetRef> {
        self.datasets.get(&index).map(|s| Rc::clone(&s.item))
    }

    pub(crate) fn insert_dataset(
        &mut self,
        index: usize,
        dataset: DatasetRef,
        subscription: SubscriptionId,
    ) -> Option<(DatasetRef, SubscriptionId)> {
        self.datasets
            .insert(index, Slot { item: dataset, subscription })
            .map(|old| (old.item, old.subscription))
    }

    /// Empties the dataset slot. Mappings of `index` are dropped with it.
    pub(crate) fn remove_dataset(&mut self, index: usize) -> Option<(DatasetRef, SubscriptionId)> {
        self.domain_map.remove(&index);
        self.range_map.remove(&index);
        let old = self.datasets.remove(&index)?;
        Some((old.item, old.subscription))
    }

    pub fn renderer(&self, index: usize) -> Option<RendererRef> {
        self.renderers.get(&index).map(|s| Rc::clone(&s.item))
    }

    pub(crate) fn insert_renderer(
        &mut self,
        index: usize,
        renderer: RendererRef,
        subscription: SubscriptionId,
    ) -> Option<(RendererRef, SubscriptionId)> {
        self.renderers
            .insert(index, Slot { item: renderer, subscription })
            .map(|old| (old.item, old.subscription))
    }

    pub(crate) fn remove_renderer(&mut self, index: usize) -> Option<(RendererRef, SubscriptionId)> {
        self.renderers.remove(&index).map(|old| (old.item, old.subscription))
    }

    /// Own renderer of `dataset_index`, else the renderer at index 0.
    pub fn renderer_for_dataset(&self, dataset_index: usize) -> Option<RendererRef> {
        self.renderer(dataset_index).or_else(|| self.renderer(0))
    }

    /// Replace (`Some`) or clear (`None`) the axis list of `dataset_index`.
    /// Nothing changes if the list is rejected.
    pub fn map_to_axes(&mut self, group: AxisGroup, dataset_index: usize, indices: Option<&[usize]>) -> Result<()> {
        match indices {
            Some(list) => {
                validate_axis_indices(list)?;
                self.map_mut(group).insert(dataset_index, list.to_vec());
            }
            None => {
                self.map_mut(group).remove(&dataset_index);
            }
        }
        Ok(())
    }

    /// Axis indices `dataset_index` is drawn against; `[0]` when unmapped.
    pub fn axis_indices(&self, group: AxisGroup, dataset_index: usize) -> &[usize] {
        self.map(group).get(&dataset_index).map(Vec::as_slice).unwrap_or(PRIMARY_ONLY)
    }

    /// First mapped axis, the one used for coordinate conversion.
    pub fn primary_axis_index(&self, group: AxisGroup, dataset_index: usize) -> usize {
        self.axis_indices(group, dataset_index).first().copied().unwrap_or(0)
    }

    /// Datasets whose list contains `axis_index`, ascending by dataset index.
    pub fn datasets_mapped_to_axis(&self, group: AxisGroup, axis_index: usize) -> Vec<(usize, DatasetRef)> {
        self.datasets
            .iter()
            .filter(|(i, _)| self.axis_indices(group, **i).contains(&axis_index))
            .map(|(i, s)| (*i, Rc::clone(&s.item)))
            .collect()
    }

    /// Removes `axis_index` from every list of `group`; lists left empty are dropped
    /// and fall back to the primary axis.
    pub(crate) fn forget_axis(&mut self, group: AxisGroup, axis_index: usize) {
        let map = self.map_mut(group);
        for list in map.values_mut() {
            list.retain(|i| *i != axis_index);
        }
        map.retain(|_, list| !list.is_empty());
    }

    pub(crate) fn forget_all_axes(&mut self, group: AxisGroup) {
        self.map_mut(group).clear();
    }

    pub fn index_of_dataset(&self, dataset: &DatasetRef) -> Option<usize> {
        self.datasets.iter().find(|(_, s)| Rc::ptr_eq(&s.item, dataset)).map(|(i, _)| *i)
    }

    pub fn index_of_renderer(&self, renderer: &RendererRef) -> Option<usize> {
        self.renderers.iter().find(|(_, s)| Rc::ptr_eq(&s.item, renderer)).map(|(i, _)| *i)
    }

    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }

    pub fn datasets(&self) -> Vec<(usize, DatasetRef)> {
        self.datasets.iter().map(|(i, s)| (*i, Rc::clone(&s.item))).collect()
    }

    pub fn renderers(&self) -> Vec<(usize, RendererRef)> {
        self.renderers.iter().map(|(i, s)| (*i, Rc::clone(&s.item))).collect()
    }

    pub(crate) fn drain_subscriptions(&mut self) -> (Vec<(DatasetRef, SubscriptionId)>, Vec<(RendererRef, SubscriptionId)>) {
        let ds = std::mem::take(&mut self.datasets).into_values().map(|s| (s.item, s.subscription)).collect();
        let rs = std::mem::take(&mut self.renderers).into_values().map(|s| (s.item, s.subscription)).collect();
        (ds, rs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::XYDataset;
    use crate::event::Listeners;
    use crate::renderer::LineRenderer;
    use crate::series::SeriesCollection;

    fn sub() -> SubscriptionId {
        Listeners::<()>::new().subscribe(|_| {})
    }

    fn dataset() -> DatasetRef {
        SeriesCollection::new().shared()
    }

    #[test]
    fn mapping_lists_are_validated_all_or_nothing() {
        let mut b = DatasetBinding::new();
        b.map_to_axes(AxisGroup::Range, 0, Some(&[1, 2])).unwrap();
        assert!(matches!(b.map_to_axes(AxisGroup::Range, 0, Some(&[])), Err(PlotError::InvalidArgument(_))));
        assert!(b.map_to_axes(AxisGroup::Range, 0, Some(&[3, 3])).is_err());
        assert_eq!(b.axis_indices(AxisGroup::Range, 0), &[1, 2]);
        assert_eq!(b.primary_axis_index(AxisGroup::Range, 0), 1);
        assert_eq!(b.axis_indices(AxisGroup::Domain, 0), &[0]);
        b.map_to_axes(AxisGroup::Range, 0, None).unwrap();
        assert_eq!(b.axis_indices(AxisGroup::Range, 0), &[0]);
    }

    #[test]
    fn emptying_a_vacant_slot_still_drops_its_mappings() {
        let mut b = DatasetBinding::new();
        b.map_to_axes(AxisGroup::Range, 2, Some(&[1])).unwrap();
        b.map_to_axes(AxisGroup::Domain, 2, Some(&[3])).unwrap();
        assert!(b.remove_dataset(2).is_none());
        assert_eq!(b.axis_indices(AxisGroup::Range, 2), &[0]);
        assert_eq!(b.axis_indices(AxisGroup::Domain, 2), &[0]);
    }

    #[test]
    fn mapped_datasets_come_back_in_index_order() {
        let mut b = DatasetBinding::new();
        let (d0, d3, d5) = (dataset(), dataset(), dataset());
        b.insert_dataset(5, Rc::clone(&d5), sub());
        b.insert_dataset(0, Rc::clone(&d0), sub());
        b.insert_dataset(3, Rc::clone(&d3), sub());
        b.map_to_axes(AxisGroup::Range, 3, Some(&[1])).unwrap();
        b.map_to_axes(AxisGroup::Range, 5, Some(&[1, 0])).unwrap();
        let on_zero: Vec<usize> = b.datasets_mapped_to_axis(AxisGroup::Range, 0).into_iter().map(|(i, _)| i).collect();
        let on_one: Vec<usize> = b.datasets_mapped_to_axis(AxisGroup::Range, 1).into_iter().map(|(i, _)| i).collect();
        assert_eq!(on_zero, vec![0, 5]);
        assert_eq!(on_one, vec![3, 5]);
        assert_eq!(b.index_of_dataset(&d3), Some(3));
        assert_eq!(d3.series_count(), 0);
    }

    #[test]
    fn forgetting_an_axis_drops_emptied_lists() {
        let mut b = DatasetBinding::new();
        b.map_to_axes(AxisGroup::Domain, 0, Some(&[2])).unwrap();
        b.map_to_axes(AxisGroup::Domain, 1, Some(&[2, 1])).unwrap();
        b.forget_axis(AxisGroup::Domain, 2);
        assert_eq!(b.axis_indices(AxisGroup::Domain, 0), &[0]);
        assert_eq!(b.axis_indices(AxisGroup::Domain, 1), &[1]);
    }

    #[test]
    fn renderer_falls_back_to_primary() {
        let mut b = DatasetBinding::new();
        assert!(b.renderer_for_dataset(4).is_none());
        let r: RendererRef = LineRenderer::new().shared();
        b.insert_renderer(0, Rc::clone(&r), sub());
        assert!(Rc::ptr_eq(&b.renderer_for_dataset(4).unwrap(), &r));
        assert_eq!(b.index_of_renderer(&r), Some(0));
        assert!(b.remove_dataset(9).is_none());
    }
}
