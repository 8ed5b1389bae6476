use tracing::debug;

use crate::error::Result;
use crate::topology::CutGraph;

use super::rounds::cut_within;

/// Cuts every edge of a graph against every other edge.
///
/// Useful for graphs built with the raw [`CutGraph::add_edge`]; afterwards the
/// graph is a proper cut graph.
#[derive(Debug, Default)]
pub struct CutSelf;

impl CutSelf {
    /// Creates a new `CutSelf` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the cut, returning how many edges were split.
    ///
    /// # Errors
    ///
    /// Returns an error if splitting an edge fails.
    pub fn execute<P: Clone>(&self, graph: &mut CutGraph<P>) -> Result<usize> {
        let pending = graph.edge_ids();
        let splits = cut_within(graph, pending)?;
        debug!(splits = splits.len(), edges = graph.edge_count(), "cut graph against itself");
        Ok(splits.len())
    }
}
