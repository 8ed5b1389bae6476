use super::{cross, dot, orient, Coordinate};

/// A point where two segments meet, with its parameter on each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Parameter on the first segment.
    pub t: f64,
    /// Parameter on the second segment.
    pub u: f64,
    pub at: Coordinate,
}

/// Result of intersecting two straight segments with integer endpoints.
///
/// `t` parameters refer to the first segment, `u` parameters to the second.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection {
    /// The segments share no point, or only a common endpoint.
    None,
    /// The interiors cross at one point. The coordinate is floored onto the integer grid.
    Crossing { t: f64, u: f64, at: Coordinate },
    /// An endpoint of one segment lies strictly inside the other.
    ///
    /// One of `t`/`u` is exactly `0.0` or `1.0`.
    Touch { t: f64, u: f64, at: Coordinate },
    /// The segments are collinear and share a non-degenerate range.
    ///
    /// Holds every endpoint of either segment that lies strictly inside the
    /// other, ordered along the first segment.
    Overlap { contacts: Vec<Contact> },
}

impl SegmentIntersection {
    /// Every point where the segments meet, excluding shared end points.
    #[must_use]
    pub fn contacts(&self) -> Vec<Contact> {
        match self {
            Self::None => Vec::new(),
            Self::Crossing { t, u, at } | Self::Touch { t, u, at } => vec![Contact {
                t: *t,
                u: *u,
                at: *at,
            }],
            Self::Overlap { contacts } => contacts.clone(),
        }
    }

    /// Contacts that fall strictly inside the first segment.
    #[must_use]
    pub fn hits_on_first(&self) -> Vec<Contact> {
        self.contacts()
            .into_iter()
            .filter(|c| c.t > 0.0 && c.t < 1.0)
            .collect()
    }

    /// Contacts that fall strictly inside the second segment.
    #[must_use]
    pub fn hits_on_second(&self) -> Vec<Contact> {
        self.contacts()
            .into_iter()
            .filter(|c| c.u > 0.0 && c.u < 1.0)
            .collect()
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Intersects segment `a0 -> a1` with segment `b0 -> b1` using exact integer predicates.
///
/// Endpoint touches are resolved before the general linear system so that a
/// vertex lying on another segment is reported at its exact coordinate.
#[must_use]
pub fn intersect_segments(
    a0: Coordinate,
    a1: Coordinate,
    b0: Coordinate,
    b1: Coordinate,
) -> SegmentIntersection {
    if !boxes_overlap(a0, a1, b0, b1) {
        return SegmentIntersection::None;
    }

    if a0 == a1 {
        return match param_strictly_inside(b0, b1, a0) {
            Some(u) => SegmentIntersection::Touch { t: 0.0, u, at: a0 },
            None => SegmentIntersection::None,
        };
    }
    if b0 == b1 {
        return match param_strictly_inside(a0, a1, b0) {
            Some(t) => SegmentIntersection::Touch { t, u: 0.0, at: b0 },
            None => SegmentIntersection::None,
        };
    }

    let da = a0.delta(a1);
    let db = b0.delta(b1);
    let denom = cross(da, db);

    if denom == 0 {
        if orient(a0.wide(), a1.wide(), b0.wide()) != 0 {
            return SegmentIntersection::None;
        }
        return collinear_overlap(a0, a1, b0, b1);
    }

    // Endpoint touches: exact, checked before solving the system.
    for (p, u) in [(b0, 0.0), (b1, 1.0)] {
        if let Some(t) = param_strictly_inside(a0, a1, p) {
            return SegmentIntersection::Touch { t, u, at: p };
        }
    }
    for (p, t) in [(a0, 0.0), (a1, 1.0)] {
        if let Some(u) = param_strictly_inside(b0, b1, p) {
            return SegmentIntersection::Touch { t, u, at: p };
        }
    }

    let offset = a0.delta(b0);
    let (mut num_t, mut num_u, mut denom) = (cross(offset, db), cross(offset, da), denom);
    if denom < 0 {
        num_t = -num_t;
        num_u = -num_u;
        denom = -denom;
    }
    if num_t <= 0 || num_t >= denom || num_u <= 0 || num_u >= denom {
        return SegmentIntersection::None;
    }

    let at = floor_point_on(a0, da, num_t, denom);
    #[allow(clippy::cast_precision_loss)]
    let (t, u) = (num_t as f64 / denom as f64, num_u as f64 / denom as f64);
    SegmentIntersection::Crossing { t, u, at }
}

/// Whether `p` lies on the open segment `s0 -> s1`; returns its parameter if so.
#[must_use]
pub fn param_strictly_inside(s0: Coordinate, s1: Coordinate, p: Coordinate) -> Option<f64> {
    let d = s0.delta(s1);
    let rel = s0.delta(p);
    if cross(d, rel) != 0 {
        return None;
    }
    let along = dot(d, rel);
    let len_sq = dot(d, d);
    if along <= 0 || along >= len_sq {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    Some(along as f64 / len_sq as f64)
}

/// Whether `p` lies on the closed segment `s0 -> s1`, in wide integer space.
#[must_use]
pub fn point_on_segment(s0: (i64, i64), s1: (i64, i64), p: (i64, i64)) -> bool {
    if orient(s0, s1, p) != 0 {
        return false;
    }
    p.0 >= s0.0.min(s1.0) && p.0 <= s0.0.max(s1.0) && p.1 >= s0.1.min(s1.1) && p.1 <= s0.1.max(s1.1)
}

fn collinear_overlap(
    a0: Coordinate,
    a1: Coordinate,
    b0: Coordinate,
    b1: Coordinate,
) -> SegmentIntersection {
    let mut contacts = Vec::new();
    for (p, u) in [(b0, 0.0), (b1, 1.0)] {
        if let Some(t) = param_strictly_inside(a0, a1, p) {
            contacts.push(Contact { t, u, at: p });
        }
    }
    for (p, t) in [(a0, 0.0), (a1, 1.0)] {
        if let Some(u) = param_strictly_inside(b0, b1, p) {
            contacts.push(Contact { t, u, at: p });
        }
    }

    if contacts.is_empty() {
        // Disjoint, touching end to end, or identical.
        return SegmentIntersection::None;
    }
    contacts.sort_by(|l, r| l.t.total_cmp(&r.t));
    SegmentIntersection::Overlap { contacts }
}

/// `origin + d * num / denom` with each component floored (`denom > 0`).
#[allow(clippy::cast_possible_truncation)]
fn floor_point_on(origin: Coordinate, d: (i64, i64), num: i128, denom: i128) -> Coordinate {
    let fx = (i128::from(d.0) * num).div_euclid(denom);
    let fy = (i128::from(d.1) * num).div_euclid(denom);
    // |fx| < |d.0|, which fits the coordinate range once added to the origin.
    Coordinate::new(
        (i128::from(origin.x) + fx) as i32,
        (i128::from(origin.y) + fy) as i32,
    )
}

fn boxes_overlap(a0: Coordinate, a1: Coordinate, b0: Coordinate, b1: Coordinate) -> bool {
    a0.x.min(a1.x) <= b0.x.max(b1.x)
        && a0.x.max(a1.x) >= b0.x.min(b1.x)
        && a0.y.min(a1.y) <= b0.y.max(b1.y)
        && a0.y.max(a1.y) >= b0.y.min(b1.y)
}
