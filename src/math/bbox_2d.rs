use super::Coordinate;

/// An inclusive, axis-aligned integer bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Coordinate,
    /// Maximum corner of the bounding box.
    pub max: Coordinate,
}

impl BoundingBox {
    /// A box containing exactly one coordinate.
    #[must_use]
    pub fn from_point(p: Coordinate) -> Self {
        Self { min: p, max: p }
    }

    /// The smallest box containing all of `points`, or `None` if there are none.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |bb, p| bb.including(p)))
    }

    /// Returns this box grown to include `p`.
    #[must_use]
    pub fn including(self, p: Coordinate) -> Self {
        Self {
            min: Coordinate::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Coordinate::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// The smallest box containing both boxes.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        self.including(other.min).including(other.max)
    }

    /// Whether the two boxes share at least one point (touching counts).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Whether `p` lies inside or on the border of the box.
    #[must_use]
    pub fn contains(&self, p: Coordinate) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Whether `other` lies entirely inside this box (borders may coincide).
    #[must_use]
    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    #[must_use]
    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x)
    }

    #[must_use]
    pub fn height(&self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn from_points_spans_all() {
        let bb = BoundingBox::from_points([c(3, -1), c(-2, 4), c(0, 0)]).unwrap();
        assert_eq!(bb.min, c(-2, -1));
        assert_eq!(bb.max, c(3, 4));
        assert_eq!(bb.width(), 5);
        assert_eq!(bb.height(), 5);
    }

    #[test]
    fn empty_has_no_box() {
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = BoundingBox::from_points([c(0, 0), c(10, 10)]).unwrap();
        let b = BoundingBox::from_points([c(10, 10), c(20, 20)]).unwrap();
        let far = BoundingBox::from_points([c(11, 0), c(20, 5)]).unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn containment() {
        let outer = BoundingBox::from_points([c(0, 0), c(200, 200)]).unwrap();
        let inner = BoundingBox::from_points([c(50, 50), c(150, 150)]).unwrap();
        assert!(outer.contains_box(&inner));
        assert!(!inner.contains_box(&outer));
        assert!(outer.contains_box(&outer));
    }
}
