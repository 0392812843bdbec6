// File: crates/chart-model/src/event.rs
// Summary: Handle-based change listeners shared by axes, datasets, renderers and plots.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Returned by [`Listeners::subscribe`]; pass it back to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<E> = Rc<dyn Fn(&E)>;

/// Synchronous listener registry.
///
/// Callbacks are snapshotted before dispatch, so a callback may subscribe or
/// unsubscribe without invalidating the pass in progress. Dispatch is not
/// reentrancy-guarded beyond that.
pub struct Listeners<E> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(SubscriptionId, Callback<E>)>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self { next_id: Cell::new(0), entries: RefCell::new(Vec::new()) }
    }
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns `false` if `id` was not (or no longer) registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(sid, _)| *sid != id);
        entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Callback<E>> =
            self.entries.borrow().iter().map(|(_, cb)| Rc::clone(cb)).collect();
        for cb in snapshot {
            cb(event);
        }
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsubscribe_stops_delivery() {
        let hits = Rc::new(Cell::new(0));
        let listeners: Listeners<u32> = Listeners::new();
        let h = Rc::clone(&hits);
        let id = listeners.subscribe(move |v| h.set(h.get() + *v));
        listeners.emit(&2);
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.emit(&5);
        assert_eq!(hits.get(), 2);
        assert!(listeners.is_empty());
    }

    #[test]
    fn callback_may_unsubscribe_itself() {
        let listeners: Rc<Listeners<()>> = Rc::new(Listeners::new());
        let hits = Rc::new(Cell::new(0));
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
        let (l, h, s) = (Rc::clone(&listeners), Rc::clone(&hits), Rc::clone(&slot));
        let id = listeners.subscribe(move |_| {
            h.set(h.get() + 1);
            if let Some(id) = s.get() {
                l.unsubscribe(id);
            }
        });
        slot.set(Some(id));
        listeners.emit(&());
        listeners.emit(&());
        assert_eq!(hits.get(), 1);
    }
}
