use std::collections::HashSet;

use crate::math::{Coordinate, PointClassification};
use crate::topology::{FaceLoop, FaceTree};

/// Arranges loops into a tree by containment.
///
/// Loops are visited from largest to smallest enclosed area (counter-clockwise
/// first on ties). Each loop becomes a child of the smallest larger loop of
/// opposite winding that encloses it; loops without such a parent are roots.
pub(crate) fn nest_loops(loops: Vec<FaceLoop>) -> FaceTree {
    let mut order: Vec<usize> = (0..loops.len()).collect();
    order.sort_by(|&i, &j| {
        let (a, b) = (&loops[i], &loops[j]);
        b.signed_area_doubled()
            .unsigned_abs()
            .cmp(&a.signed_area_doubled().unsigned_abs())
            .then_with(|| b.is_counter_clockwise().cmp(&a.is_counter_clockwise()))
            .then(i.cmp(&j))
    });

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); order.len()];
    let mut roots = Vec::new();
    for (k, &i) in order.iter().enumerate() {
        let child = &loops[i];
        let parent = order[..k].iter().rposition(|&j| {
            let candidate = &loops[j];
            candidate.is_counter_clockwise() != child.is_counter_clockwise()
                && candidate.bounding_box().contains_box(&child.bounding_box())
                && encloses(candidate, child)
        });
        match parent {
            Some(p) => children[p].push(k),
            None => roots.push(k),
        }
    }

    let mut slots: Vec<Option<FaceLoop>> = {
        let mut by_index: Vec<Option<FaceLoop>> = loops.into_iter().map(Some).collect();
        order.iter().map(|&i| by_index[i].take()).collect()
    };
    let roots = roots
        .into_iter()
        .filter_map(|k| assemble(k, &mut slots, &children))
        .collect();
    FaceTree::new(roots)
}

fn assemble(
    k: usize,
    slots: &mut [Option<FaceLoop>],
    children: &[Vec<usize>],
) -> Option<FaceLoop> {
    let mut face = slots[k].take()?;
    for &c in &children[k] {
        if let Some(child) = assemble(c, slots, children) {
            face.push_child(child);
        }
    }
    Some(face)
}

/// Whether `child` lies inside `parent`.
///
/// The first boundary corner of `child` that is strictly inside or outside
/// decides. Tips of dangling edges walked on both sides are skipped. When every
/// corner is on `parent`'s boundary, a point just inside `child` is tested instead.
fn encloses(parent: &FaceLoop, child: &FaceLoop) -> bool {
    let walked: HashSet<(Coordinate, Coordinate)> =
        child.segments().iter().map(|s| (s.start, s.end)).collect();
    let corners = child
        .segments()
        .iter()
        .filter(|s| !walked.contains(&(s.end, s.start)))
        .map(|s| s.start);
    for p in corners {
        match parent.classify(p) {
            PointClassification::Inside => return true,
            PointClassification::Outside => return false,
            PointClassification::OnBoundary => {}
        }
    }
    child
        .interior_point()
        .is_some_and(|q| parent.contains(q.x, q.y))
}
