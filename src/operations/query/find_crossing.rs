use crate::operations::cut::{edge_crossings, self_crossings};
use crate::topology::{CutGraph, EdgeId};

/// Finds a pair of edges that still need cutting.
///
/// A graph is fully cut when this returns `None`: every place where two
/// flattened edges meet is a vertex of both. An edge running into itself is
/// reported paired with itself.
#[derive(Debug, Default)]
pub struct FindCrossing;

impl FindCrossing {
    /// Creates a new `FindCrossing` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query, returning the first offending pair in edge order.
    #[must_use]
    pub fn execute<P>(&self, graph: &CutGraph<P>) -> Option<(EdgeId, EdgeId)> {
        let edges: Vec<_> = graph.edges().collect();
        for (i, (id_a, a)) in edges.iter().enumerate() {
            if !self_crossings(a).is_empty() {
                return Some((*id_a, *id_a));
            }
            for (id_b, b) in &edges[i + 1..] {
                let (on_a, on_b) = edge_crossings(a, b);
                if !on_a.is_empty() || !on_b.is_empty() {
                    return Some((*id_a, *id_b));
                }
            }
        }
        None
    }
}
