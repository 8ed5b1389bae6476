use std::cmp::Ordering;

use super::cross;
use crate::error::{GeometryError, Result};

/// A non-zero integer direction, ordered counter-clockwise from the positive x axis.
///
/// Ordering is exact: quadrant rank first, then the sign of the cross product
/// inside a quadrant. Collinear directions pointing the same way compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Direction {
    dx: i64,
    dy: i64,
}

impl Direction {
    /// Creates a direction from a vector.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if both components are zero.
    pub fn new(dx: i64, dy: i64) -> Result<Self> {
        if dx == 0 && dy == 0 {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { dx, dy })
    }

    #[must_use]
    pub fn dx(&self) -> i64 {
        self.dx
    }

    #[must_use]
    pub fn dy(&self) -> i64 {
        self.dy
    }

    /// Quadrant rank: 0 for `[0°, 90°)`, 1 for `[90°, 180°)`, 2 for `[180°, 270°)`,
    /// 3 for `[270°, 360°)`.
    #[must_use]
    pub fn quadrant(&self) -> u8 {
        match (self.dx, self.dy) {
            (dx, dy) if dx > 0 && dy >= 0 => 0,
            (dx, dy) if dx <= 0 && dy > 0 => 1,
            (dx, dy) if dx < 0 && dy <= 0 => 2,
            _ => 3,
        }
    }
}

impl Ord for Direction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.quadrant().cmp(&other.quadrant()).then_with(|| {
            // Inside one quadrant, `a` precedes `b` when `b` is counter-clockwise of `a`.
            0.cmp(&cross((self.dx, self.dy), (other.dx, other.dy)))
        })
    }
}

impl PartialEq for Direction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Direction {}

impl PartialOrd for Direction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
