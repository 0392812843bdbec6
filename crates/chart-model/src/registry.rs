// File: crates/chart-model/src/registry.rs
// Summary: Indexed axes of one group with their stored locations.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::axis::AxisRef;
use crate::error::{PlotError, Result};
use crate::event::SubscriptionId;
use crate::location::{AxisGroup, AxisLocation, Orientation, RectEdge};

#[derive(Clone)]
struct AxisSlot {
    axis: AxisRef,
    subscription: SubscriptionId,
}

/// Axes of one [`AxisGroup`], keyed by index. Slots may be sparse.
///
/// Index 0 always has a location; any other index without one sits opposite
/// index 0.
pub struct AxisRegistry {
    group: AxisGroup,
    slots: BTreeMap<usize, AxisSlot>,
    locations: BTreeMap<usize, AxisLocation>,
}

impl AxisRegistry {
    pub fn new(group: AxisGroup, primary_location: AxisLocation) -> Self {
        let mut locations = BTreeMap::new();
        locations.insert(0, primary_location);
        Self { group, slots: BTreeMap::new(), locations }
    }

    pub fn group(&self) -> AxisGroup {
        self.group
    }

    pub fn get(&self, index: usize) -> Option<AxisRef> {
        self.slots.get(&index).map(|s| Rc::clone(&s.axis))
    }

    /// Stores `axis` at `index`, returning the previous occupant with the
    /// subscription the caller must cancel.
    pub(crate) fn insert(
        &mut self,
        index: usize,
        axis: AxisRef,
        subscription: SubscriptionId,
    ) -> Option<(AxisRef, SubscriptionId)> {
        self.slots
            .insert(index, AxisSlot { axis, subscription })
            .map(|old| (old.axis, old.subscription))
    }

    /// Empties `index`. The stored location goes with it, except for index 0.
    pub(crate) fn remove(&mut self, index: usize) -> Option<(AxisRef, SubscriptionId)> {
        let old = self.slots.remove(&index)?;
        if index > 0 {
            self.locations.remove(&index);
        }
        Some((old.axis, old.subscription))
    }

    /// Empties every slot; stored secondary locations are dropped.
    pub(crate) fn drain(&mut self) -> Vec<(AxisRef, SubscriptionId)> {
        self.locations.retain(|i, _| *i == 0);
        std::mem::take(&mut self.slots)
            .into_values()
            .map(|s| (s.axis, s.subscription))
            .collect()
    }

    pub fn primary_location(&self) -> AxisLocation {
        self.locations.get(&0).copied().unwrap_or(AxisLocation::BottomOrLeft)
    }

    pub fn location(&self, index: usize) -> AxisLocation {
        match self.locations.get(&index) {
            Some(loc) => *loc,
            None => self.primary_location().opposite(),
        }
    }

    /// Store or clear the location of `index`. The primary location can be
    /// changed but never cleared.
    pub fn set_location(&mut self, index: usize, location: Option<AxisLocation>) -> Result<()> {
        match (index, location) {
            (0, None) => Err(PlotError::invalid(format!("{:?} axis 0 must keep a location", self.group))),
            (_, Some(loc)) => {
                self.locations.insert(index, loc);
                Ok(())
            }
            (_, None) => {
                self.locations.remove(&index);
                Ok(())
            }
        }
    }

    pub fn resolve_edge(&self, index: usize, orientation: Orientation) -> RectEdge {
        self.group.resolve_edge(self.location(index), orientation)
    }

    /// Local index of `axis` by identity.
    pub fn index_of(&self, axis: &AxisRef) -> Option<usize> {
        self.slots
            .iter()
            .find(|(_, slot)| Rc::ptr_eq(&slot.axis, axis))
            .map(|(i, _)| *i)
    }

    /// Occupied slots in ascending index order.
    pub fn axes(&self) -> Vec<(usize, AxisRef)> {
        self.slots.iter().map(|(i, s)| (*i, Rc::clone(&s.axis))).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::ValueAxis;

    fn sub() -> SubscriptionId {
        crate::event::Listeners::<()>::new().subscribe(|_| {})
    }

    #[test]
    fn secondary_axes_default_opposite_primary() {
        let mut reg = AxisRegistry::new(AxisGroup::Range, AxisLocation::BottomOrLeft);
        assert_eq!(reg.location(1), AxisLocation::TopOrRight);
        assert_eq!(reg.resolve_edge(0, Orientation::Vertical), RectEdge::Left);
        assert_eq!(reg.resolve_edge(1, Orientation::Vertical), RectEdge::Right);
        reg.set_location(1, Some(AxisLocation::TopOrLeft)).unwrap();
        assert_eq!(reg.location(1), AxisLocation::TopOrLeft);
        reg.set_location(1, None).unwrap();
        assert_eq!(reg.location(1), AxisLocation::TopOrRight);
    }

    #[test]
    fn primary_location_cannot_be_cleared() {
        let mut reg = AxisRegistry::new(AxisGroup::Domain, AxisLocation::TopOrLeft);
        assert!(matches!(reg.set_location(0, None), Err(PlotError::InvalidArgument(_))));
        assert_eq!(reg.location(0), AxisLocation::TopOrLeft);
    }

    #[test]
    fn identity_lookup_and_removal() {
        let mut reg = AxisRegistry::new(AxisGroup::Domain, AxisLocation::BottomOrLeft);
        let a = ValueAxis::new("a").shared();
        let twin = ValueAxis::new("a").shared();
        assert!(reg.insert(2, Rc::clone(&a), sub()).is_none());
        reg.set_location(2, Some(AxisLocation::BottomOrRight)).unwrap();
        assert_eq!(reg.index_of(&a), Some(2));
        assert_eq!(reg.index_of(&twin), None);
        assert!(reg.remove(2).is_some());
        assert_eq!(reg.location(2), AxisLocation::TopOrRight);
        assert!(reg.is_empty());
    }
}
