use crate::error::Result;
use crate::topology::CutGraph;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean union of two graphs.
pub struct Union<'a, P> {
    graph_a: &'a CutGraph<P>,
    graph_b: &'a CutGraph<P>,
}

impl<'a, P: Clone> Union<'a, P> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(graph_a: &'a CutGraph<P>, graph_b: &'a CutGraph<P>) -> Self {
        Self { graph_a, graph_b }
    }

    /// Executes the union, returning the boundary of the combined region.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<CutGraph<P>> {
        boolean_execute(self.graph_a, self.graph_b, BooleanOp::Union)
    }
}
