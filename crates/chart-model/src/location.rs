// File: crates/chart-model/src/location.rs
// Summary: Axis groups, logical axis locations, plot orientation and their edge tables.

/// Which family of axes an index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisGroup {
    /// Independent variable.
    Domain,
    /// Dependent variable.
    Range,
}

impl AxisGroup {
    pub const BOTH: [AxisGroup; 2] = [AxisGroup::Domain, AxisGroup::Range];

    /// Concrete rectangle edge for an axis of this group at `location`.
    pub const fn resolve_edge(self, location: AxisLocation, orientation: Orientation) -> RectEdge {
        match self {
            AxisGroup::Domain => resolve_domain_edge(location, orientation),
            AxisGroup::Range => resolve_range_edge(location, orientation),
        }
    }

    /// Orientation-dependent choice of the device coordinate this group runs along.
    pub const fn runs_horizontally(self, orientation: Orientation) -> bool {
        matches!(
            (self, orientation),
            (AxisGroup::Domain, Orientation::Vertical) | (AxisGroup::Range, Orientation::Horizontal)
        )
    }
}

/// Logical placement; the concrete edge depends on orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisLocation {
    TopOrLeft,
    TopOrRight,
    BottomOrLeft,
    BottomOrRight,
}

impl AxisLocation {
    /// Default placement for secondary axes: TOP <-> BOTTOM and LEFT <-> RIGHT.
    pub const fn opposite(self) -> Self {
        match self {
            AxisLocation::TopOrLeft => AxisLocation::BottomOrRight,
            AxisLocation::TopOrRight => AxisLocation::BottomOrLeft,
            AxisLocation::BottomOrLeft => AxisLocation::TopOrRight,
            AxisLocation::BottomOrRight => AxisLocation::TopOrLeft,
        }
    }
}

/// Side of the plot rectangle an axis is drawn against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RectEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl RectEdge {
    pub const fn is_top_or_bottom(self) -> bool {
        matches!(self, RectEdge::Top | RectEdge::Bottom)
    }
    pub const fn is_left_or_right(self) -> bool {
        matches!(self, RectEdge::Left | RectEdge::Right)
    }
    pub const fn opposite(self) -> Self {
        match self {
            RectEdge::Top => RectEdge::Bottom,
            RectEdge::Bottom => RectEdge::Top,
            RectEdge::Left => RectEdge::Right,
            RectEdge::Right => RectEdge::Left,
        }
    }
}

/// `Vertical`: domain runs along x. `Horizontal`: domain runs along y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

pub const fn resolve_domain_edge(location: AxisLocation, orientation: Orientation) -> RectEdge {
    use AxisLocation::*;
    match (location, orientation) {
        (TopOrLeft, Orientation::Vertical) => RectEdge::Top,
        (TopOrLeft, Orientation::Horizontal) => RectEdge::Left,
        (TopOrRight, Orientation::Vertical) => RectEdge::Top,
        (TopOrRight, Orientation::Horizontal) => RectEdge::Right,
        (BottomOrLeft, Orientation::Vertical) => RectEdge::Bottom,
        (BottomOrLeft, Orientation::Horizontal) => RectEdge::Left,
        (BottomOrRight, Orientation::Vertical) => RectEdge::Bottom,
        (BottomOrRight, Orientation::Horizontal) => RectEdge::Right,
    }
}

pub const fn resolve_range_edge(location: AxisLocation, orientation: Orientation) -> RectEdge {
    use AxisLocation::*;
    match (location, orientation) {
        (TopOrLeft, Orientation::Vertical) => RectEdge::Left,
        (TopOrLeft, Orientation::Horizontal) => RectEdge::Top,
        (TopOrRight, Orientation::Vertical) => RectEdge::Right,
        (TopOrRight, Orientation::Horizontal) => RectEdge::Top,
        (BottomOrLeft, Orientation::Vertical) => RectEdge::Left,
        (BottomOrLeft, Orientation::Horizontal) => RectEdge::Bottom,
        (BottomOrRight, Orientation::Vertical) => RectEdge::Right,
        (BottomOrRight, Orientation::Horizontal) => RectEdge::Bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AxisLocation; 4] = [
        AxisLocation::TopOrLeft,
        AxisLocation::TopOrRight,
        AxisLocation::BottomOrLeft,
        AxisLocation::BottomOrRight,
    ];

    #[test]
    fn opposite_is_an_involution() {
        for loc in ALL {
            assert_ne!(loc.opposite(), loc);
            assert_eq!(loc.opposite().opposite(), loc);
        }
        assert_eq!(AxisLocation::BottomOrLeft.opposite(), AxisLocation::TopOrRight);
    }

    #[test]
    fn horizontal_domain_bottom_or_left_is_left_edge() {
        assert_eq!(
            resolve_domain_edge(AxisLocation::BottomOrLeft, Orientation::Horizontal),
            RectEdge::Left
        );
        assert_eq!(
            resolve_domain_edge(AxisLocation::BottomOrLeft, Orientation::Vertical),
            RectEdge::Bottom
        );
    }

    #[test]
    fn domain_and_range_edges_are_perpendicular() {
        for loc in ALL {
            for o in [Orientation::Vertical, Orientation::Horizontal] {
                let d = resolve_domain_edge(loc, o);
                let r = resolve_range_edge(loc, o);
                assert_ne!(d.is_top_or_bottom(), r.is_top_or_bottom(), "{loc:?} {o:?}");
            }
        }
    }

    #[test]
    fn opposite_location_lands_on_opposite_edge() {
        for loc in ALL {
            for o in [Orientation::Vertical, Orientation::Horizontal] {
                for g in AxisGroup::BOTH {
                    assert_eq!(g.resolve_edge(loc.opposite(), o), g.resolve_edge(loc, o).opposite());
                }
            }
        }
    }
}
