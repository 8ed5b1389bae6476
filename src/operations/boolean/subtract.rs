use crate::error::Result;
use crate::topology::CutGraph;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean subtraction of one graph from another.
pub struct Subtract<'a, P> {
    graph_a: &'a CutGraph<P>,
    graph_b: &'a CutGraph<P>,
}

impl<'a, P: Clone> Subtract<'a, P> {
    /// Creates a new `Subtract` operation (A - B).
    #[must_use]
    pub fn new(graph_a: &'a CutGraph<P>, graph_b: &'a CutGraph<P>) -> Self {
        Self { graph_a, graph_b }
    }

    /// Executes the subtraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<CutGraph<P>> {
        boolean_execute(self.graph_a, self.graph_b, BooleanOp::Subtract)
    }
}

/// Computes B - A for graphs given as (A, B).
pub struct ReverseSubtract<'a, P> {
    graph_a: &'a CutGraph<P>,
    graph_b: &'a CutGraph<P>,
}

impl<'a, P: Clone> ReverseSubtract<'a, P> {
    /// Creates a new `ReverseSubtract` operation (B - A).
    #[must_use]
    pub fn new(graph_a: &'a CutGraph<P>, graph_b: &'a CutGraph<P>) -> Self {
        Self { graph_a, graph_b }
    }

    /// Executes the subtraction.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<CutGraph<P>> {
        boolean_execute(self.graph_a, self.graph_b, BooleanOp::ReverseSubtract)
    }
}
