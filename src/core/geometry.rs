//! Board-space geometry
//!
//! The board lives in a fixed 700x500 coordinate space (y grows downward).
//! The rendering collaborator maps its own cells onto this space and talks to
//! tokens and pile mats only through the capability traits below.

/// A point in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

/// Something with a mutable position on the board.
pub trait Positionable {
    fn position(&self) -> Point;
    fn set_position(&mut self, position: Point);
}

/// Axis-aligned bounding box collision.
///
/// Implementors expose a center and half extents; point and box tests are
/// provided.
pub trait Collidable {
    /// Bounding-box center
    fn center(&self) -> Point;

    /// Half width and half height of the bounding box
    fn half_extents(&self) -> (f32, f32);

    /// Does the bounding box contain this point?
    fn contains(&self, point: Point) -> bool {
        let c = self.center();
        let (hw, hh) = self.half_extents();
        (point.x - c.x).abs() <= hw && (point.y - c.y).abs() <= hh
    }

    /// Do two bounding boxes overlap?
    fn overlaps(&self, other: &impl Collidable) -> bool
    where
        Self: Sized,
    {
        let a = self.center();
        let b = other.center();
        let (aw, ah) = self.half_extents();
        let (bw, bh) = other.half_extents();
        (a.x - b.x).abs() <= aw + bw && (a.y - b.y).abs() <= ah + bh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Box {
        center: Point,
        half: (f32, f32),
    }

    impl Collidable for Box {
        fn center(&self) -> Point {
            self.center
        }

        fn half_extents(&self) -> (f32, f32) {
            self.half
        }
    }

    #[test]
    fn contains_checks_both_axes() {
        let b = Box {
            center: Point::new(100.0, 100.0),
            half: (10.0, 5.0),
        };

        assert!(b.contains(Point::new(100.0, 100.0)));
        assert!(b.contains(Point::new(110.0, 105.0)));
        assert!(!b.contains(Point::new(111.0, 100.0)));
        assert!(!b.contains(Point::new(100.0, 106.0)));
    }

    #[test]
    fn overlaps_is_symmetric() {
        let a = Box {
            center: Point::new(0.0, 0.0),
            half: (10.0, 10.0),
        };
        let b = Box {
            center: Point::new(15.0, 0.0),
            half: (10.0, 10.0),
        };
        let c = Box {
            center: Point::new(50.0, 0.0),
            half: (10.0, 10.0),
        };

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn distance_to_is_euclidean() {
        let origin = Point::new(0.0, 0.0);
        assert!((origin.distance_to(Point::new(3.0, 4.0)) - 5.0).abs() < f32::EPSILON);
    }
}
