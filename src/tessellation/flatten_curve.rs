use tracing::warn;

use crate::geometry::curve::bezier;
use crate::geometry::Curve;
use crate::math::Point2;

use super::{FlatSegment, FlattenParams};

/// Flattens a curve into straight segments by binary subdivision.
pub struct FlattenCurve {
    curve: Curve,
    params: FlattenParams,
}

impl FlattenCurve {
    /// Creates a new `FlattenCurve` operation.
    #[must_use]
    pub fn new(curve: Curve, params: FlattenParams) -> Self {
        Self { curve, params }
    }

    /// Executes the flattening.
    ///
    /// The result always spans `[0, 1]` without gaps, starts at the curve's
    /// start and ends at its end exactly. Identical input yields identical output.
    #[must_use]
    pub fn execute(&self) -> Vec<FlatSegment> {
        let mut flattener = Flattener {
            curve: &self.curve,
            params: self.params,
            out: Vec::new(),
            clipped: false,
        };
        let points: Vec<Point2> = self
            .curve
            .points()
            .into_iter()
            .map(|p| p.to_point())
            .collect();
        flattener.subdivide(&points, 0.0, 1.0, 0);

        if flattener.clipped {
            warn!(
                curve = ?self.curve,
                max_depth = self.params.max_depth,
                "flattening reached the depth limit; emitted chords"
            );
        }
        flattener.out
    }
}

/// Convenience wrapper around [`FlattenCurve`].
#[must_use]
pub fn flatten(curve: &Curve, params: FlattenParams) -> Vec<FlatSegment> {
    FlattenCurve::new(*curve, params).execute()
}

struct Flattener<'a> {
    curve: &'a Curve,
    params: FlattenParams,
    out: Vec<FlatSegment>,
    clipped: bool,
}

impl Flattener<'_> {
    fn subdivide(&mut self, points: &[Point2], t0: f64, t1: f64, depth: u32) {
        let flat = bezier::flatness_squared(points) <= self.params.flatness_squared;
        if flat || depth >= self.params.max_depth {
            self.clipped |= !flat;
            self.out.push(FlatSegment {
                start: self.curve.evaluate_rounded(t0),
                end: self.curve.evaluate_rounded(t1),
                t0,
                t1,
            });
            return;
        }

        let mid = (t0 + t1) * 0.5;
        let (left, right) = bezier::split(points, 0.5);
        self.subdivide(&left, t0, mid, depth + 1);
        self.subdivide(&right, mid, t1, depth + 1);
    }
}
