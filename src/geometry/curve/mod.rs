pub mod bezier;

use crate::error::{GeometryError, Result};
use crate::math::{BoundingBox, Coordinate, Point2};

/// A Bezier segment with exact integer control points.
///
/// Curves are immutable values: subdivision produces new curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// A straight line (order 2).
    Line { start: Coordinate, end: Coordinate },
    /// A quadratic Bezier (order 3).
    Quadratic {
        start: Coordinate,
        control: Coordinate,
        end: Coordinate,
    },
    /// A cubic Bezier (order 4).
    Cubic {
        start: Coordinate,
        control1: Coordinate,
        control2: Coordinate,
        end: Coordinate,
    },
}

/// A parameter on a curve paired with the exact coordinate at which to cut it.
///
/// The coordinate usually comes from an intersection and is the authority for
/// where the pieces meet, not the curve evaluated at `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutPoint {
    pub t: f64,
    pub at: Coordinate,
}

impl CutPoint {
    #[must_use]
    pub fn new(t: f64, at: Coordinate) -> Self {
        Self { t, at }
    }
}

impl Curve {
    #[must_use]
    pub fn line(start: Coordinate, end: Coordinate) -> Self {
        Self::Line { start, end }
    }

    #[must_use]
    pub fn quadratic(start: Coordinate, control: Coordinate, end: Coordinate) -> Self {
        Self::Quadratic {
            start,
            control,
            end,
        }
    }

    #[must_use]
    pub fn cubic(
        start: Coordinate,
        control1: Coordinate,
        control2: Coordinate,
        end: Coordinate,
    ) -> Self {
        Self::Cubic {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Builds a curve from its full control polygon (start, controls, end).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedOrder` unless 2, 3 or 4 points are given.
    pub fn from_points(points: &[Coordinate]) -> Result<Self> {
        match *points {
            [start, end] => Ok(Self::line(start, end)),
            [start, control, end] => Ok(Self::quadratic(start, control, end)),
            [start, control1, control2, end] => Ok(Self::cubic(start, control1, control2, end)),
            _ => Err(GeometryError::UnsupportedOrder {
                order: points.len(),
            }
            .into()),
        }
    }

    /// Number of control points, including the end points.
    #[must_use]
    pub fn order(&self) -> usize {
        match self {
            Self::Line { .. } => 2,
            Self::Quadratic { .. } => 3,
            Self::Cubic { .. } => 4,
        }
    }

    #[must_use]
    pub fn start(&self) -> Coordinate {
        match *self {
            Self::Line { start, .. }
            | Self::Quadratic { start, .. }
            | Self::Cubic { start, .. } => start,
        }
    }

    #[must_use]
    pub fn end(&self) -> Coordinate {
        match *self {
            Self::Line { end, .. } | Self::Quadratic { end, .. } | Self::Cubic { end, .. } => end,
        }
    }

    /// The inner control points (none for a line).
    #[must_use]
    pub fn control_points(&self) -> Vec<Coordinate> {
        match *self {
            Self::Line { .. } => Vec::new(),
            Self::Quadratic { control, .. } => vec![control],
            Self::Cubic {
                control1, control2, ..
            } => vec![control1, control2],
        }
    }

    /// The full control polygon: start, inner control points, end.
    #[must_use]
    pub fn points(&self) -> Vec<Coordinate> {
        let mut points = Vec::with_capacity(self.order());
        points.push(self.start());
        points.extend(self.control_points());
        points.push(self.end());
        points
    }

    fn float_points(&self) -> Vec<Point2> {
        self.points().into_iter().map(Coordinate::to_point).collect()
    }

    /// Bounding box of the control polygon, which always contains the curve.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.points()
            .into_iter()
            .fold(BoundingBox::from_point(self.start()), BoundingBox::including)
    }

    /// Whether the bounding boxes of the two curves overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Curve) -> bool {
        self.bounding_box().overlaps(&other.bounding_box())
    }

    /// Evaluates the curve at `t` in floating point.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        match t {
            t if t <= 0.0 => self.start().to_point(),
            t if t >= 1.0 => self.end().to_point(),
            t => bezier::evaluate(&self.float_points(), t),
        }
    }

    /// Evaluates the curve at `t`, rounded to the nearest coordinate.
    ///
    /// Exact at `t = 0` and `t = 1`.
    #[must_use]
    pub fn evaluate_rounded(&self, t: f64) -> Coordinate {
        match t {
            t if t <= 0.0 => self.start(),
            t if t >= 1.0 => self.end(),
            t => Coordinate::from_point_rounded(&self.evaluate(t)),
        }
    }

    /// Squared deviation estimate of the curve from its chord.
    #[must_use]
    pub fn curvature_squared(&self) -> f64 {
        bezier::flatness_squared(&self.float_points())
    }

    /// A curve whose control points all coincide has no extent and is not real geometry.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let start = self.start();
        self.points().iter().all(|p| *p == start)
    }

    /// The same curve traversed from end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match *self {
            Self::Line { start, end } => Self::line(end, start),
            Self::Quadratic {
                start,
                control,
                end,
            } => Self::quadratic(end, control, start),
            Self::Cubic {
                start,
                control1,
                control2,
                end,
            } => Self::cubic(end, control2, control1, start),
        }
    }

    /// Splits the curve at `t`, cutting at the rounded on-curve coordinate.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` unless `0 < t < 1`.
    pub fn split_at(&self, t: f64) -> Result<(Curve, Curve)> {
        let pieces = self.subdivide(&[CutPoint::new(t, self.evaluate_rounded(t))])?;
        match pieces[..] {
            [left, right] => Ok((left, right)),
            _ => Err(GeometryError::Degenerate("split did not produce two pieces".into()).into()),
        }
    }

    /// Subdivides the curve at each cut, producing `cuts.len() + 1` pieces in order.
    ///
    /// Each piece starts at the previous cut's coordinate and ends at the next
    /// one's, so adjacent pieces share an exact coordinate. Inner control points
    /// are rounded to the grid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if a cut lies outside `(0, 1)`,
    /// or `GeometryError::UnsortedParameters` if the cuts are not strictly increasing.
    pub fn subdivide(&self, cuts: &[CutPoint]) -> Result<Vec<Curve>> {
        for cut in cuts {
            if !(cut.t > 0.0 && cut.t < 1.0) {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter: "t",
                    value: cut.t,
                    min: 0.0,
                    max: 1.0,
                }
                .into());
            }
        }
        if cuts.windows(2).any(|w| w[0].t >= w[1].t) {
            return Err(GeometryError::UnsortedParameters.into());
        }

        let float_points = self.float_points();
        let mut bounds = Vec::with_capacity(cuts.len() + 2);
        bounds.push(CutPoint::new(0.0, self.start()));
        bounds.extend_from_slice(cuts);
        bounds.push(CutPoint::new(1.0, self.end()));

        bounds
            .windows(2)
            .map(|w| {
                let part = bezier::segment(&float_points, w[0].t, w[1].t);
                let mut points: Vec<Coordinate> =
                    part.iter().map(Coordinate::from_point_rounded).collect();
                let last = points.len() - 1;
                points[0] = w[0].at;
                points[last] = w[1].at;
                Curve::from_points(&points)
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn sample_cubic() -> Curve {
        Curve::cubic(c(0, 0), c(100, 300), c(400, -200), c(500, 100))
    }

    #[test]
    fn from_points_selects_order() {
        assert_eq!(Curve::from_points(&[c(0, 0), c(1, 1)]).unwrap().order(), 2);
        assert_eq!(
            Curve::from_points(&[c(0, 0), c(1, 1), c(2, 0)]).unwrap().order(),
            3
        );
        assert_eq!(sample_cubic().order(), 4);
    }

    #[test]
    fn unsupported_orders_fail() {
        assert!(Curve::from_points(&[c(0, 0)]).is_err());
        assert!(Curve::from_points(&[c(0, 0); 5]).is_err());
    }

    #[test]
    fn split_reconstructs_end_points() {
        let curve = sample_cubic();
        let cuts = [
            CutPoint::new(0.2, curve.evaluate_rounded(0.2)),
            CutPoint::new(0.5, curve.evaluate_rounded(0.5)),
            CutPoint::new(0.9, curve.evaluate_rounded(0.9)),
        ];
        let pieces = curve.subdivide(&cuts).unwrap();
        assert_eq!(pieces.len(), 4);
        assert_eq!(pieces[0].start(), curve.start());
        assert_eq!(pieces[3].end(), curve.end());
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        for (piece, cut) in pieces.iter().zip(cuts.iter()) {
            assert_eq!(piece.end(), cut.at);
        }
    }

    #[test]
    fn split_uses_supplied_coordinate() {
        let line = Curve::line(c(0, 0), c(10, 1));
        let pieces = line.subdivide(&[CutPoint::new(0.35, c(3, 0))]).unwrap();
        assert_eq!(pieces[0], Curve::line(c(0, 0), c(3, 0)));
        assert_eq!(pieces[1], Curve::line(c(3, 0), c(10, 1)));
    }

    #[test]
    fn split_outside_unit_interval_fails() {
        let curve = sample_cubic();
        assert!(curve.split_at(0.0).is_err());
        assert!(curve.split_at(1.0).is_err());
        assert!(curve.split_at(-0.5).is_err());
        assert!(curve.split_at(f64::NAN).is_err());
    }

    #[test]
    fn unsorted_cuts_fail() {
        let curve = sample_cubic();
        let cuts = [CutPoint::new(0.6, c(1, 1)), CutPoint::new(0.3, c(2, 2))];
        assert!(curve.subdivide(&cuts).is_err());
    }

    #[test]
    fn split_at_halves_curve() {
        let quad = Curve::quadratic(c(0, 0), c(50, 100), c(100, 0));
        let (left, right) = quad.split_at(0.5).unwrap();
        assert_eq!(left.end(), c(50, 50));
        assert_eq!(right.start(), c(50, 50));
        assert_eq!(left.control_points(), vec![c(25, 50)]);
        assert_eq!(right.control_points(), vec![c(75, 50)]);
    }

    #[test]
    fn reversed_swaps_ends() {
        let curve = sample_cubic();
        let rev = curve.reversed();
        assert_eq!(rev.start(), curve.end());
        assert_eq!(rev.end(), curve.start());
        assert_eq!(rev.reversed(), curve);
    }

    #[test]
    fn degenerate_detection() {
        assert!(Curve::line(c(3, 3), c(3, 3)).is_degenerate());
        assert!(Curve::cubic(c(3, 3), c(3, 3), c(3, 3), c(3, 3)).is_degenerate());
        assert!(!Curve::quadratic(c(3, 3), c(9, 9), c(3, 3)).is_degenerate());
    }

    #[test]
    fn bounding_box_covers_control_polygon() {
        let bb = sample_cubic().bounding_box();
        assert_eq!(bb.min, c(0, -200));
        assert_eq!(bb.max, c(500, 300));
    }

    #[test]
    fn lines_have_no_curvature() {
        assert!(Curve::line(c(0, 0), c(1000, 7)).curvature_squared() <= 0.0);
        assert!(sample_cubic().curvature_squared() > 0.0);
    }
}
