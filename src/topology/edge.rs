use crate::geometry::Curve;
use crate::math::BoundingBox;
use crate::tessellation::FlatSegment;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in a cut graph.
    pub struct EdgeId;
}

/// Data associated with a graph edge.
///
/// The payload is opaque to the graph: it is copied onto every piece when the
/// edge is split so callers can trace results back to their source objects.
#[derive(Debug, Clone)]
pub struct EdgeData<P> {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The curve defining this edge's shape.
    pub curve: Curve,
    /// Caller-supplied provenance.
    pub payload: P,
    /// The curve flattened with the graph's parameters; computed once on creation.
    pub segments: Vec<FlatSegment>,
    /// Bounding box of the curve's control polygon.
    pub bounds: BoundingBox,
}

impl<P> EdgeData<P> {
    /// Flattened segments that carry a direction.
    pub fn solid_segments(&self) -> impl Iterator<Item = (usize, &FlatSegment)> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_degenerate())
    }
}
