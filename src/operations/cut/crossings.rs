use crate::geometry::{Curve, CutPoint};
use crate::math::{intersect_segments, TOLERANCE};
use crate::tessellation::FlatSegment;
use crate::topology::EdgeData;

/// Every place where two edges meet away from their own end points.
///
/// Returns the cut points on `a` and on `b`, each sorted by parameter with
/// duplicates and end-point contacts removed. Besides proper crossings,
/// touches and collinear overlaps, a flattened vertex that both polylines pass
/// through is reported as well: both curves must be cut there.
#[must_use]
pub fn edge_crossings<P>(a: &EdgeData<P>, b: &EdgeData<P>) -> (Vec<CutPoint>, Vec<CutPoint>) {
    let mut on_a = Vec::new();
    let mut on_b = Vec::new();
    if !a.bounds.overlaps(&b.bounds) {
        return (on_a, on_b);
    }

    for (_, sa) in a.solid_segments() {
        let bounds_a = sa.bounding_box();
        for (_, sb) in b.solid_segments() {
            if !bounds_a.overlaps(&sb.bounding_box()) {
                continue;
            }
            for contact in intersect_segments(sa.start, sa.end, sb.start, sb.end).contacts() {
                on_a.push(CutPoint::new(sa.curve_t(contact.t), contact.at));
                on_b.push(CutPoint::new(sb.curve_t(contact.u), contact.at));
            }
            for (ta, pa) in [(sa.t0, sa.start), (sa.t1, sa.end)] {
                for (tb, pb) in [(sb.t0, sb.start), (sb.t1, sb.end)] {
                    if pa == pb {
                        on_a.push(CutPoint::new(ta, pa));
                        on_b.push(CutPoint::new(tb, pb));
                    }
                }
            }
        }
    }

    (normalize_cuts(&a.curve, on_a), normalize_cuts(&b.curve, on_b))
}

/// Every place where an edge runs into itself away from its own end points.
///
/// Non-adjacent flattened segments are compared like segments of two edges,
/// and both parameters of each contact are cut, so a loop becomes a piece of
/// its own starting and ending at the contact.
#[must_use]
pub fn self_crossings<P>(edge: &EdgeData<P>) -> Vec<CutPoint> {
    let solid: Vec<&FlatSegment> = edge.solid_segments().map(|(_, s)| s).collect();
    let mut cuts = Vec::new();
    for (i, sa) in solid.iter().enumerate() {
        let bounds_a = sa.bounding_box();
        for (j, sb) in solid.iter().enumerate().skip(i + 1) {
            if !bounds_a.overlaps(&sb.bounding_box()) {
                continue;
            }
            for contact in intersect_segments(sa.start, sa.end, sb.start, sb.end).contacts() {
                cuts.push(CutPoint::new(sa.curve_t(contact.t), contact.at));
                cuts.push(CutPoint::new(sb.curve_t(contact.u), contact.at));
            }
            // Neighbours share their joint.
            if j == i + 1 {
                continue;
            }
            for (ta, pa) in [(sa.t0, sa.start), (sa.t1, sa.end)] {
                for (tb, pb) in [(sb.t0, sb.start), (sb.t1, sb.end)] {
                    if pa == pb {
                        cuts.push(CutPoint::new(ta, pa));
                        cuts.push(CutPoint::new(tb, pb));
                    }
                }
            }
        }
    }
    normalize_cuts(&edge.curve, cuts)
}

/// Orders cut points along `curve` and drops the ones that would not produce
/// a proper piece: parameters outside `(0, 1)`, contacts at the curve's own
/// end points and parameters too close to the previous cut.
///
/// A coordinate repeated right after itself is kept only when the curve
/// leaves it in between, as it does around a self-crossing loop.
#[must_use]
pub fn normalize_cuts(curve: &Curve, mut cuts: Vec<CutPoint>) -> Vec<CutPoint> {
    let (start, end) = (curve.start(), curve.end());
    cuts.retain(|c| c.t > 0.0 && c.t < 1.0 && c.at != start && c.at != end);
    cuts.sort_by(|l, r| l.t.total_cmp(&r.t));

    let mut kept: Vec<CutPoint> = Vec::with_capacity(cuts.len());
    for cut in cuts {
        if let Some(last) = kept.last() {
            if cut.t - last.t <= TOLERANCE {
                continue;
            }
            if cut.at == last.at && curve.evaluate_rounded((last.t + cut.t) / 2.0) == cut.at {
                continue;
            }
        }
        kept.push(cut);
    }
    kept
}
