//! Round-based cutting shared by the public cut operations.
//!
//! In each round every pending edge is tested against the edges it may cross,
//! all cut points are gathered first, and then every touched edge is split
//! once. The pieces become the next round's pending set, which catches the
//! rare crossings introduced by rounding cut points and re-flattening pieces.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::CutPoint;
use crate::topology::{CutGraph, EdgeId};

use super::crossings::{edge_crossings, normalize_cuts, self_crossings};
use super::split::split_edge;

/// Each split edge paired with its pieces in curve order, in the order the splits happened.
pub(crate) type Splits = Vec<(EdgeId, Vec<EdgeId>)>;

/// Cuts `pending` against itself and every edge of the same graph until nothing crosses.
pub(crate) fn cut_within<P: Clone>(
    graph: &mut CutGraph<P>,
    mut pending: Vec<EdgeId>,
) -> Result<Splits> {
    let limit = graph.params().max_cut_rounds;
    let mut splits = Splits::new();

    for round in 0..limit {
        pending.retain(|id| graph.contains_edge(*id));
        if pending.is_empty() {
            return Ok(splits);
        }
        let pending_set: HashSet<EdgeId> = pending.iter().copied().collect();

        let mut cuts: BTreeMap<EdgeId, Vec<CutPoint>> = BTreeMap::new();
        for &id in &pending {
            let edge = graph.edge(id)?;
            collect(&mut cuts, id, self_crossings(edge));
            for (other_id, other) in graph.edges() {
                if other_id == id || (other_id < id && pending_set.contains(&other_id)) {
                    continue;
                }
                let (on_edge, on_other) = edge_crossings(edge, other);
                collect(&mut cuts, id, on_edge);
                collect(&mut cuts, other_id, on_other);
            }
        }

        pending = apply_cuts(graph, cuts, &mut splits)?;
        debug!(round, pieces = pending.len(), "cut round");
    }

    pending.retain(|id| graph.contains_edge(*id));
    if !pending.is_empty() {
        warn!(limit, unchecked = pending.len(), "cut round limit reached");
    }
    Ok(splits)
}

/// Cuts the edges of two graphs against each other until no edge of one crosses the other.
pub(crate) fn cut_between<P: Clone>(
    a: &mut CutGraph<P>,
    b: &mut CutGraph<P>,
) -> Result<(Splits, Splits)> {
    let limit = a.params().max_cut_rounds.max(b.params().max_cut_rounds);
    let mut splits_a = Splits::new();
    let mut splits_b = Splits::new();
    let mut pending_a = a.edge_ids();
    let mut pending_b = b.edge_ids();

    for round in 0..limit {
        pending_a.retain(|id| a.contains_edge(*id));
        pending_b.retain(|id| b.contains_edge(*id));
        if pending_a.is_empty() && pending_b.is_empty() {
            return Ok((splits_a, splits_b));
        }
        let pending_set_a: HashSet<EdgeId> = pending_a.iter().copied().collect();

        let mut cuts_a: BTreeMap<EdgeId, Vec<CutPoint>> = BTreeMap::new();
        let mut cuts_b: BTreeMap<EdgeId, Vec<CutPoint>> = BTreeMap::new();
        for &id in &pending_a {
            let edge = a.edge(id)?;
            for (other_id, other) in b.edges() {
                let (on_edge, on_other) = edge_crossings(edge, other);
                collect(&mut cuts_a, id, on_edge);
                collect(&mut cuts_b, other_id, on_other);
            }
        }
        for &id in &pending_b {
            let edge = b.edge(id)?;
            for (other_id, other) in a.edges() {
                if pending_set_a.contains(&other_id) {
                    continue;
                }
                let (on_edge, on_other) = edge_crossings(edge, other);
                collect(&mut cuts_b, id, on_edge);
                collect(&mut cuts_a, other_id, on_other);
            }
        }

        pending_a = apply_cuts(a, cuts_a, &mut splits_a)?;
        pending_b = apply_cuts(b, cuts_b, &mut splits_b)?;
        debug!(
            round,
            pieces_a = pending_a.len(),
            pieces_b = pending_b.len(),
            "cut round"
        );
    }

    pending_a.retain(|id| a.contains_edge(*id));
    pending_b.retain(|id| b.contains_edge(*id));
    if !pending_a.is_empty() || !pending_b.is_empty() {
        warn!(
            limit,
            unchecked = pending_a.len() + pending_b.len(),
            "cut round limit reached"
        );
    }
    Ok((splits_a, splits_b))
}

fn collect(cuts: &mut BTreeMap<EdgeId, Vec<CutPoint>>, id: EdgeId, found: Vec<CutPoint>) {
    if !found.is_empty() {
        cuts.entry(id).or_default().extend(found);
    }
}

/// Splits every edge in `cuts` once and returns all the new pieces.
fn apply_cuts<P: Clone>(
    graph: &mut CutGraph<P>,
    cuts: BTreeMap<EdgeId, Vec<CutPoint>>,
    splits: &mut Splits,
) -> Result<Vec<EdgeId>> {
    let mut pieces_out = Vec::new();
    for (id, found) in cuts {
        let curve = graph.edge(id)?.curve;
        let found = normalize_cuts(&curve, found);
        if found.is_empty() {
            continue;
        }
        let pieces = split_edge(graph, id, &found)?;
        pieces_out.extend_from_slice(&pieces);
        splits.push((id, pieces));
    }
    Ok(pieces_out)
}
