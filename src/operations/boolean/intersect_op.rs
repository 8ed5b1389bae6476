use crate::error::Result;
use crate::topology::CutGraph;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean intersection of two graphs.
pub struct Intersect<'a, P> {
    graph_a: &'a CutGraph<P>,
    graph_b: &'a CutGraph<P>,
}

impl<'a, P: Clone> Intersect<'a, P> {
    /// Creates a new `Intersect` operation.
    #[must_use]
    pub fn new(graph_a: &'a CutGraph<P>, graph_b: &'a CutGraph<P>) -> Self {
        Self { graph_a, graph_b }
    }

    /// Executes the intersection. Disjoint inputs give an empty graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<CutGraph<P>> {
        boolean_execute(self.graph_a, self.graph_b, BooleanOp::Intersect)
    }
}
