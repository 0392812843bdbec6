// File: crates/chart-model/src/marker.rs
// Summary: Value and interval markers kept per dataset index and drawing layer.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::range::Range;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerKind {
    /// A single value, drawn as a line across the plot.
    Value(f64),
    /// A band between two values.
    Interval(Range),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub kind: MarkerKind,
    pub label: Option<String>,
}

impl Marker {
    pub fn value(value: f64) -> Self {
        Self { kind: MarkerKind::Value(value), label: None }
    }

    pub fn interval(start: f64, end: f64) -> Result<Self> {
        Ok(Self { kind: MarkerKind::Interval(Range::spanning(start, end)?), label: None })
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn extent(&self) -> Range {
        match self.kind {
            MarkerKind::Value(v) => Range::new_unchecked(v, v),
            MarkerKind::Interval(r) => r,
        }
    }
}

/// Drawn before or after the data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    #[default]
    Foreground,
    Background,
}

/// Markers for one axis group, keyed by the dataset index they belong to.
#[derive(Clone, Debug, Default)]
pub struct MarkerStore {
    entries: BTreeMap<(usize, Layer), Vec<Marker>>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, index: usize, layer: Layer, marker: Marker) {
        self.entries.entry((index, layer)).or_default().push(marker);
    }

    /// Removes the first marker equal to `marker`.
    pub fn remove(&mut self, index: usize, layer: Layer, marker: &Marker) -> bool {
        let Some(list) = self.entries.get_mut(&(index, layer)) else {
            return false;
        };
        let Some(pos) = list.iter().position(|m| m == marker) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            self.entries.remove(&(index, layer));
        }
        true
    }

    pub fn markers(&self, index: usize, layer: Layer) -> &[Marker] {
        self.entries.get(&(index, layer)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drops every marker of `index` on both layers.
    pub fn clear_index(&mut self, index: usize) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(i, _), _| *i != index);
        self.entries.len() != before
    }

    pub fn clear_all(&mut self) -> bool {
        let had = !self.entries.is_empty();
        self.entries.clear();
        had
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
