mod flatten_curve;

pub use flatten_curve::{flatten, FlattenCurve};

use crate::math::{BoundingBox, Coordinate};

/// Parameters controlling curve flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenParams {
    /// Maximum squared deviation of a sub-curve from its chord before it must be split.
    pub flatness_squared: f64,
    /// Maximum recursion depth; a sub-curve reaching it is emitted as a chord.
    pub max_depth: u32,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            flatness_squared: 4.0,
            max_depth: 16,
        }
    }
}

impl FlattenParams {
    #[must_use]
    pub fn with_flatness_squared(mut self, flatness_squared: f64) -> Self {
        self.flatness_squared = flatness_squared;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// A straight piece of a flattened curve, tagged with the parameter range it approximates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatSegment {
    pub start: Coordinate,
    pub end: Coordinate,
    pub t0: f64,
    pub t1: f64,
}

impl FlatSegment {
    /// Maps a parameter local to this segment back onto the parent curve.
    #[must_use]
    pub fn curve_t(&self, local_t: f64) -> f64 {
        self.t0 + (self.t1 - self.t0) * local_t
    }

    /// A segment whose rounded end points coincide carries no direction.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_point(self.start).including(self.end)
    }
}

/// The polyline through the segments' end points, in order.
#[must_use]
pub fn polyline(segments: &[FlatSegment]) -> Vec<Coordinate> {
    let mut points = Vec::with_capacity(segments.len() + 1);
    if let Some(first) = segments.first() {
        points.push(first.start);
    }
    points.extend(segments.iter().map(|s| s.end));
    points
}
