use tracing::debug;

use crate::error::Result;
use crate::topology::CutGraph;

use super::rounds::cut_between;

/// Cuts the edges of two graphs against each other.
///
/// Each graph is changed in place; crossings between edges of the same graph
/// are left alone. Afterwards every place where an edge of one graph meets an
/// edge of the other is a vertex in both.
#[derive(Debug, Default)]
pub struct CutAgainst;

impl CutAgainst {
    /// Creates a new `CutAgainst` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the cut, returning how many edges were split in `a` and in `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if splitting an edge fails.
    pub fn execute<P: Clone>(
        &self,
        a: &mut CutGraph<P>,
        b: &mut CutGraph<P>,
    ) -> Result<(usize, usize)> {
        let (splits_a, splits_b) = cut_between(a, b)?;
        debug!(
            splits_a = splits_a.len(),
            splits_b = splits_b.len(),
            "cut graphs against each other"
        );
        Ok((splits_a.len(), splits_b.len()))
    }
}
