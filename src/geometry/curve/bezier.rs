//! Floating-point de Casteljau helpers over control polygons of 2 to 4 points.

use crate::math::{Point2, Vector2};

/// Evaluates the Bezier defined by `points` at `t`.
#[must_use]
pub fn evaluate(points: &[Point2], t: f64) -> Point2 {
    let mut work = points.to_vec();
    let n = work.len();
    for level in 1..n {
        for i in 0..n - level {
            work[i] = lerp(&work[i], &work[i + 1], t);
        }
    }
    work.first().copied().unwrap_or_else(Point2::origin)
}

/// Splits the control polygon at `t` into two control polygons of the same order.
#[must_use]
pub fn split(points: &[Point2], t: f64) -> (Vec<Point2>, Vec<Point2>) {
    let n = points.len();
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    let mut work = points.to_vec();

    left.push(work[0]);
    right.push(work[n - 1]);
    for level in 1..n {
        for i in 0..n - level {
            work[i] = lerp(&work[i], &work[i + 1], t);
        }
        left.push(work[0]);
        right.push(work[n - 1 - level]);
    }
    right.reverse();
    (left, right)
}

/// The control polygon of the part of the curve between `t0` and `t1` (`t0 < t1`).
#[must_use]
pub fn segment(points: &[Point2], t0: f64, t1: f64) -> Vec<Point2> {
    let (head, _) = if t1 < 1.0 {
        split(points, t1)
    } else {
        (points.to_vec(), Vec::new())
    };
    if t0 <= 0.0 {
        return head;
    }
    let (_, tail) = split(&head, t0 / t1);
    tail
}

/// Largest squared distance from an inner control point to the chord.
///
/// Zero for lines. Used only to decide when flattening may stop.
#[must_use]
pub fn flatness_squared(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let (first, last) = (&points[0], &points[points.len() - 1]);
    let chord: Vector2 = last - first;
    let len_sq = chord.norm_squared();

    points[1..points.len() - 1]
        .iter()
        .map(|p| {
            let rel = p - first;
            if len_sq == 0.0 {
                rel.norm_squared()
            } else {
                let perp = chord.perp(&rel);
                perp * perp / len_sq
            }
        })
        .fold(0.0, f64::max)
}

fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}
