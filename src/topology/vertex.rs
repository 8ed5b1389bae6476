use crate::math::Coordinate;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in a cut graph.
    pub struct VertexId;
}

/// Data associated with a graph vertex.
///
/// A vertex is keyed by its exact coordinate and records the edges that
/// start and end at it. A vertex with no incident edges is removed.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The position of the vertex.
    pub at: Coordinate,
    /// Edges whose curve starts here.
    pub leaving: Vec<EdgeId>,
    /// Edges whose curve ends here.
    pub entering: Vec<EdgeId>,
}

impl VertexData {
    /// Creates a new vertex with no incident edges.
    #[must_use]
    pub fn new(at: Coordinate) -> Self {
        Self {
            at,
            leaving: Vec::new(),
            entering: Vec::new(),
        }
    }

    /// Whether no edge touches this vertex.
    #[must_use]
    pub fn is_orphan(&self) -> bool {
        self.leaving.is_empty() && self.entering.is_empty()
    }

    /// Number of edge ends incident to this vertex.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.leaving.len() + self.entering.len()
    }
}
