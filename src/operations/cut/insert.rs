use tracing::debug;

use crate::error::Result;
use crate::geometry::Curve;
use crate::topology::{CutGraph, EdgeId};

use super::rounds::cut_within;

/// Inserts a curve into a graph, cutting it and every edge it crosses.
///
/// Afterwards no edge of the graph crosses another except at shared vertices.
pub struct InsertEdge<P> {
    curve: Curve,
    payload: P,
}

impl<P: Clone> InsertEdge<P> {
    /// Creates a new `InsertEdge` operation.
    #[must_use]
    pub fn new(curve: Curve, payload: P) -> Self {
        Self { curve, payload }
    }

    /// Executes the insertion.
    ///
    /// Returns the edges the inserted curve ended up as, in curve order. A
    /// zero-length curve is not inserted and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if splitting an edge fails.
    pub fn execute(&self, graph: &mut CutGraph<P>) -> Result<Vec<EdgeId>> {
        let Some(id) = graph.add_edge(self.curve, self.payload.clone()) else {
            return Ok(Vec::new());
        };

        let splits = cut_within(graph, vec![id])?;
        let mut pieces = vec![id];
        for (old, new) in &splits {
            if let Some(pos) = pieces.iter().position(|e| e == old) {
                pieces.splice(pos..=pos, new.iter().copied());
            }
        }
        pieces.retain(|e| graph.contains_edge(*e));

        debug!(
            pieces = pieces.len(),
            splits = splits.len(),
            edges = graph.edge_count(),
            "inserted edge"
        );
        Ok(pieces)
    }
}
