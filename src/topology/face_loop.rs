use crate::error::TopologyError;
use crate::math::polygon_2d::{classify_point_in_polygon, point_in_polygon_f64, signed_area_doubled};
use crate::math::{BoundingBox, Coordinate, Point2, PointClassification, Vector2};

use super::edge::EdgeId;

/// A directed straight piece of a face loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSegment {
    /// The edge whose flattened segment this is.
    pub edge: EdgeId,
    /// Index into the edge's flattened segments.
    pub segment: usize,
    /// If `true`, the loop runs along the edge's own direction.
    pub forward: bool,
    pub start: Coordinate,
    pub end: Coordinate,
}

/// A closed boundary traced from a fully cut graph.
///
/// The doubled signed area is positive for counter-clockwise loops and
/// negative for clockwise ones. Children are loops of opposite winding that
/// lie inside this one.
#[derive(Debug, Clone)]
pub struct FaceLoop {
    segments: Vec<LoopSegment>,
    signed_area_doubled: i128,
    bounds: BoundingBox,
    children: Vec<FaceLoop>,
}

impl FaceLoop {
    /// Builds a loop from cyclic segments.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::LoopNotClosed` if the segments are empty or do
    /// not chain end to start, including from the last back to the first.
    pub fn new(segments: Vec<LoopSegment>) -> Result<Self, TopologyError> {
        let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
            return Err(TopologyError::LoopNotClosed);
        };
        if last.end != first.start || segments.windows(2).any(|w| w[0].end != w[1].start) {
            return Err(TopologyError::LoopNotClosed);
        }

        let coordinates: Vec<Coordinate> = segments.iter().map(|s| s.start).collect();
        let signed_area_doubled = signed_area_doubled(&coordinates);
        let bounds = coordinates
            .iter()
            .fold(BoundingBox::from_point(first.start), |bb, p| bb.including(*p));

        Ok(Self {
            segments,
            signed_area_doubled,
            bounds,
            children: Vec::new(),
        })
    }

    #[must_use]
    pub fn segments(&self) -> &[LoopSegment] {
        &self.segments
    }

    /// The loop's corners in order; the closing corner is not repeated.
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.segments.iter().map(|s| s.start).collect()
    }

    /// The distinct edges the loop runs along, in loop order.
    #[must_use]
    pub fn edges(&self) -> Vec<EdgeId> {
        let mut edges: Vec<EdgeId> = Vec::new();
        for s in &self.segments {
            if edges.last() != Some(&s.edge) {
                edges.push(s.edge);
            }
        }
        if edges.len() > 1 && edges.first() == edges.last() {
            edges.pop();
        }
        edges
    }

    /// Twice the signed area enclosed by the loop.
    #[must_use]
    pub fn signed_area_doubled(&self) -> i128 {
        self.signed_area_doubled
    }

    /// The unsigned enclosed area.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn area(&self) -> f64 {
        self.signed_area_doubled.unsigned_abs() as f64 / 2.0
    }

    /// Counter-clockwise loops have a non-negative signed area.
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area_doubled >= 0
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    #[must_use]
    pub fn children(&self) -> &[FaceLoop] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: FaceLoop) {
        self.children.push(child);
    }

    /// Exact classification of a grid point against this loop.
    #[must_use]
    pub fn classify(&self, p: Coordinate) -> PointClassification {
        if !self.bounds.contains(p) {
            return PointClassification::Outside;
        }
        classify_point_in_polygon(&self.coordinates(), p)
    }

    /// Whether an arbitrary point lies inside the loop (even-odd rule).
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        point_in_polygon_f64(&self.coordinates(), &Point2::new(x, y))
    }

    /// A point strictly inside the loop, found by stepping off a segment's
    /// midpoint towards the enclosed side.
    #[must_use]
    pub fn interior_point(&self) -> Option<Point2> {
        let coordinates = self.coordinates();
        let inward = if self.is_counter_clockwise() { 1.0 } else { -1.0 };

        for s in &self.segments {
            let a = s.start.to_point();
            let b = s.end.to_point();
            let along: Vector2 = b - a;
            let len = along.norm();
            if len == 0.0 {
                continue;
            }
            let normal = Vector2::new(-along.y, along.x) * (inward / len);
            let mid = nalgebra::center(&a, &b);

            let mut step = 0.5;
            for _ in 0..8 {
                let candidate = mid + normal * step;
                if point_in_polygon_f64(&coordinates, &candidate) {
                    return Some(candidate);
                }
                step *= 0.5;
            }
        }
        None
    }
}

/// The nested loops traced from a graph.
#[derive(Debug, Clone, Default)]
pub struct FaceTree {
    roots: Vec<FaceLoop>,
}

impl FaceTree {
    #[must_use]
    pub fn new(roots: Vec<FaceLoop>) -> Self {
        Self { roots }
    }

    /// Top-level loops, largest first.
    #[must_use]
    pub fn roots(&self) -> &[FaceLoop] {
        &self.roots
    }

    #[must_use]
    pub fn into_roots(self) -> Vec<FaceLoop> {
        self.roots
    }

    /// Total number of loops at every depth.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first, pre-order traversal yielding `(depth, loop)`.
    #[must_use]
    pub fn iter(&self) -> FaceTreeIter<'_> {
        FaceTreeIter {
            stack: self.roots.iter().rev().map(|l| (0, l)).collect(),
        }
    }
}

/// Iterator over a [`FaceTree`]; see [`FaceTree::iter`].
pub struct FaceTreeIter<'a> {
    stack: Vec<(usize, &'a FaceLoop)>,
}

impl<'a> Iterator for FaceTreeIter<'a> {
    type Item = (usize, &'a FaceLoop);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, face) = self.stack.pop()?;
        self.stack
            .extend(face.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, face))
    }
}
