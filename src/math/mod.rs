pub mod angle_2d;
pub mod bbox_2d;
pub mod intersect_2d;
pub mod polygon_2d;

pub use angle_2d::Direction;
pub use bbox_2d::BoundingBox;
pub use intersect_2d::{intersect_segments, Contact, SegmentIntersection};
pub use polygon_2d::PointClassification;

/// 2D point type used for floating-point curve evaluation.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type used for floating-point curve evaluation.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for the few floating-point comparisons that remain (parameter ordering).
pub const TOLERANCE: f64 = 1e-10;

/// An exact integer position in the plane.
///
/// Vertices of a cut graph are keyed by `Coordinate`, so two curves that are
/// split independently at "the same" place meet at bit-identical positions.
/// The derived ordering is lexicographic (`x`, then `y`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to a floating-point point.
    #[must_use]
    pub fn to_point(self) -> Point2 {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Rounds a floating-point point to the nearest coordinate.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_point_rounded(p: &Point2) -> Self {
        Self::new(p.x.round() as i32, p.y.round() as i32)
    }

    /// The vector from `self` to `other` in wide integers.
    #[must_use]
    pub fn delta(self, other: Coordinate) -> (i64, i64) {
        (
            i64::from(other.x) - i64::from(self.x),
            i64::from(other.y) - i64::from(self.y),
        )
    }

    /// The coordinate scaled by two, used to address segment midpoints exactly.
    #[must_use]
    pub fn doubled(self) -> (i64, i64) {
        (2 * i64::from(self.x), 2 * i64::from(self.y))
    }

    /// The coordinate as a wide integer pair.
    #[must_use]
    pub fn wide(self) -> (i64, i64) {
        (i64::from(self.x), i64::from(self.y))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Exact cross product of two integer vectors.
#[must_use]
pub fn cross(a: (i64, i64), b: (i64, i64)) -> i128 {
    i128::from(a.0) * i128::from(b.1) - i128::from(a.1) * i128::from(b.0)
}

/// Exact dot product of two integer vectors.
#[must_use]
pub fn dot(a: (i64, i64), b: (i64, i64)) -> i128 {
    i128::from(a.0) * i128::from(b.0) + i128::from(a.1) * i128::from(b.1)
}

/// Orientation of `c` relative to the directed line `a -> b`.
///
/// Positive when `c` is to the left, negative to the right, zero when collinear.
#[must_use]
pub fn orient(a: (i64, i64), b: (i64, i64), c: (i64, i64)) -> i128 {
    cross((b.0 - a.0, b.1 - a.1), (c.0 - a.0, c.1 - a.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_signs() {
        assert!(orient((0, 0), (10, 0), (5, 5)) > 0);
        assert!(orient((0, 0), (10, 0), (5, -5)) < 0);
        assert_eq!(orient((0, 0), (10, 0), (20, 0)), 0);
    }

    #[test]
    fn wide_products_do_not_overflow() {
        let a = (i64::from(i32::MAX) * 2, i64::from(i32::MIN) * 2);
        let b = (i64::from(i32::MIN) * 2, i64::from(i32::MAX) * 2);
        let expected = i128::from(a.0) * i128::from(b.1) - i128::from(a.1) * i128::from(b.0);
        assert_eq!(cross(a, b), expected);
    }

    #[test]
    fn rounding_to_coordinate() {
        let c = Coordinate::from_point_rounded(&Point2::new(2.5, -1.4));
        assert_eq!(c, Coordinate::new(3, -1));
    }

    #[test]
    fn lexicographic_order() {
        assert!(Coordinate::new(0, 5) < Coordinate::new(1, 0));
        assert!(Coordinate::new(1, 0) < Coordinate::new(1, 1));
    }
}
