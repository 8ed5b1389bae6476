use tracing::debug;

use crate::error::Result;
use crate::operations::cut::CutAgainst;
use crate::topology::CutGraph;

use super::classify::Classifier;
use super::select::{should_keep_edge, BooleanOp, EdgeSource, KeepDecision};

/// Executes a boolean operation on two graphs of closed boundaries.
///
/// Both inputs are cut against each other (on copies), every edge is
/// classified against the other graph, and the kept edges are added to a new
/// graph with `a`'s parameters. The result is already cut and keeps each
/// edge's payload. Edges of the subtracted graph are reversed, so a
/// difference of counter-clockwise inputs traces counter-clockwise.
///
/// # Errors
///
/// Returns an error if cutting fails.
pub fn boolean_execute<P: Clone>(
    a: &CutGraph<P>,
    b: &CutGraph<P>,
    op: BooleanOp,
) -> Result<CutGraph<P>> {
    let mut a = a.clone();
    let mut b = b.clone();

    let overlapping = match (a.bounding_box(), b.bounding_box()) {
        (Some(box_a), Some(box_b)) => box_a.overlaps(&box_b),
        _ => false,
    };
    if overlapping {
        CutAgainst::new().execute(&mut a, &mut b)?;
    }

    let against_a = Classifier::new(&a);
    let against_b = Classifier::new(&b);

    let mut result = CutGraph::with_params(*a.params());
    let mut discarded = 0;
    for (source, graph, other) in [
        (EdgeSource::A, &a, &against_b),
        (EdgeSource::B, &b, &against_a),
    ] {
        for (_, edge) in graph.edges() {
            let Some(classification) = other.classify_edge(edge) else {
                continue;
            };
            match should_keep_edge(source, classification, op) {
                KeepDecision::Keep => {
                    result.add_edge(edge.curve, edge.payload.clone());
                }
                KeepDecision::KeepFlipped => {
                    result.add_edge(edge.curve.reversed(), edge.payload.clone());
                }
                KeepDecision::Discard => discarded += 1,
            }
        }
    }

    debug!(?op, kept = result.edge_count(), discarded, "boolean combination");
    Ok(result)
}
