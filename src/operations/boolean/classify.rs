use crate::math::polygon_2d::classify_against_segments;
use crate::math::{Coordinate, PointClassification};
use crate::topology::{CutGraph, EdgeData};

/// Point classification against the boundary of a graph, prepared once.
///
/// The graph's distinct flattened segments are treated as closed boundaries
/// under the even-odd rule. Points are handled in doubled coordinates so the
/// midpoint of any flattened segment can be tested exactly.
#[derive(Debug, Clone)]
pub struct Classifier {
    segments: Vec<((i64, i64), (i64, i64))>,
}

impl Classifier {
    #[must_use]
    pub fn new<P>(graph: &CutGraph<P>) -> Self {
        Self {
            segments: graph.boundary_doubled(),
        }
    }

    #[must_use]
    pub fn classify_point(&self, p: Coordinate) -> PointClassification {
        self.classify_doubled(p.doubled())
    }

    /// Classifies an edge by the midpoint of its middle flattened segment.
    ///
    /// Only meaningful once the edge has been cut against the classifier's
    /// graph: a cut edge is then entirely inside, outside or on the boundary.
    /// Returns `None` for an edge with no segment of non-zero length.
    #[must_use]
    pub fn classify_edge<P>(&self, edge: &EdgeData<P>) -> Option<PointClassification> {
        let solid: Vec<_> = edge.solid_segments().map(|(_, s)| s).collect();
        let s = solid.get(solid.len() / 2)?;
        let mid = (
            i64::from(s.start.x) + i64::from(s.end.x),
            i64::from(s.start.y) + i64::from(s.end.y),
        );
        Some(self.classify_doubled(mid))
    }

    fn classify_doubled(&self, p: (i64, i64)) -> PointClassification {
        classify_against_segments(self.segments.iter().copied(), p)
    }
}
