use tracing::trace;

use crate::error::Result;
use crate::geometry::CutPoint;
use crate::topology::{CutGraph, EdgeId};

/// Replaces an edge by the pieces produced by cutting its curve at `cuts`.
///
/// `cuts` must already be normalized (strictly increasing, inside `(0, 1)`).
/// Every piece carries a copy of the edge's payload. Returns the pieces in
/// curve order; with no cuts the edge is left alone and returned as is.
///
/// # Errors
///
/// Returns an error if the edge is not in the graph or the cuts are invalid.
/// The graph is unchanged on error.
pub fn split_edge<P: Clone>(
    graph: &mut CutGraph<P>,
    edge: EdgeId,
    cuts: &[CutPoint],
) -> Result<Vec<EdgeId>> {
    let curve = graph.edge(edge)?.curve;
    if cuts.is_empty() {
        return Ok(vec![edge]);
    }

    let pieces = curve.subdivide(cuts)?;
    let data = graph.remove_edge(edge)?;
    let ids: Vec<EdgeId> = pieces
        .into_iter()
        .filter_map(|piece| graph.add_edge(piece, data.payload.clone()))
        .collect();

    trace!(?edge, cuts = cuts.len(), pieces = ids.len(), "split edge");
    Ok(ids)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Curve;
    use crate::math::Coordinate;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn pieces_chain_and_keep_payload() {
        let mut graph = CutGraph::new();
        let curve = Curve::cubic(c(0, 0), c(100, 300), c(400, -200), c(500, 100));
        let id = graph.add_edge(curve, "stroke").unwrap();
        let cuts = [
            CutPoint::new(0.25, curve.evaluate_rounded(0.25)),
            CutPoint::new(0.6, curve.evaluate_rounded(0.6)),
        ];
        let pieces = split_edge(&mut graph, id, &cuts).unwrap();

        assert_eq!(pieces.len(), 3);
        assert!(!graph.contains_edge(id));
        let curves: Vec<Curve> = pieces.iter().map(|p| graph.edge(*p).unwrap().curve).collect();
        assert_eq!(curves[0].start(), c(0, 0));
        assert_eq!(curves[2].end(), c(500, 100));
        assert_eq!(curves[0].end(), curves[1].start());
        assert_eq!(curves[1].end(), curves[2].start());
        assert!(pieces.iter().all(|p| graph.edge(*p).unwrap().payload == "stroke"));
    }

    #[test]
    fn invalid_cuts_leave_graph_untouched() {
        let mut graph = CutGraph::new();
        let id = graph.add_edge(Curve::line(c(0, 0), c(10, 0)), ()).unwrap();
        let cuts = [CutPoint::new(0.6, c(6, 0)), CutPoint::new(0.4, c(4, 0))];
        assert!(split_edge(&mut graph, id, &cuts).is_err());
        assert!(graph.contains_edge(id));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn no_cuts_keeps_the_edge() {
        let mut graph = CutGraph::new();
        let id = graph.add_edge(Curve::line(c(0, 0), c(10, 0)), ()).unwrap();
        assert_eq!(split_edge(&mut graph, id, &[]).unwrap(), vec![id]);
    }
}
