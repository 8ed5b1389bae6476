mod nest;
mod trace;

use tracing::debug;

use crate::error::Result;
use crate::topology::{CutGraph, FaceTree};

use nest::nest_loops;
use trace::trace_loops;

/// Builds the nested face loops of a fully cut graph.
///
/// Each bounded face is traced counter-clockwise; the outside of a connected
/// piece is traced clockwise and becomes the parent of the faces it surrounds,
/// except for a single face whose outside would only repeat it. Winding is the
/// sign of [`FaceLoop::signed_area_doubled`](crate::topology::FaceLoop::signed_area_doubled).
#[derive(Debug, Default)]
pub struct BuildFaces;

impl BuildFaces {
    /// Creates a new `BuildFaces` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the face building.
    ///
    /// The graph is expected to be fully cut; edges that still cross produce
    /// loops that overlap one another.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::LoopNotClosed` if a traced loop does not close.
    pub fn execute<P>(&self, graph: &CutGraph<P>) -> Result<FaceTree> {
        let loops = trace_loops(graph)?;
        let traced = loops.len();
        let tree = nest_loops(loops);
        debug!(loops = traced, roots = tree.roots().len(), "built faces");
        Ok(tree)
    }
}
