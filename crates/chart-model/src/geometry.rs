// File: crates/chart-model/src/geometry.rs
// Summary: Device-space rectangle and point helpers for the plot area.

/// Device-space point (pixels, y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Device-space rectangle. The plot area handed to every conversion call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center_x(&self) -> f64 { self.left + self.width() * 0.5 }
    pub fn center_y(&self) -> f64 { self.top + self.height() * 0.5 }

    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Overlap of two rectangles, `None` when they do not intersect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let r = Rect::from_ltrb(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        if r.is_empty() { None } else { Some(r) }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_dimensions() {
        let r = Rect::from_ltwh(10.0, 20.0, 200.0, 100.0);
        assert_eq!(r.right, 210.0);
        assert_eq!(r.center_x(), 110.0);
        assert_eq!(r.center_y(), 70.0);
        assert!(r.contains(Point::new(10.0, 120.0)));
        assert!(!r.contains(Point::new(9.0, 50.0)));
    }

    #[test]
    fn intersection_of_disjoint_rects_is_none() {
        let a = Rect::from_ltrb(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_ltrb(20.0, 20.0, 30.0, 30.0);
        assert!(a.intersection(&b).is_none());
        let c = Rect::from_ltrb(5.0, 5.0, 15.0, 15.0);
        assert_eq!(a.intersection(&c), Some(Rect::from_ltrb(5.0, 5.0, 10.0, 10.0)));
    }
}
