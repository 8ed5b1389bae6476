use super::intersect_2d::point_on_segment;
use super::{cross, orient, Coordinate, Point2};

/// Classification of a point relative to a closed boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

/// Twice the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The closing edge
/// from the last point back to the first is implied.
#[must_use]
pub fn signed_area_doubled(points: &[Coordinate]) -> i128 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    (0..n)
        .map(|i| cross(points[i].wide(), points[(i + 1) % n].wide()))
        .sum()
}

/// Classifies `p` against a set of boundary segments by even-odd ray casting.
///
/// The ray runs towards `+x`. Segments are half-open in `y`, so a ray passing
/// exactly through a vertex is counted once. All tests are exact.
pub fn classify_against_segments<I>(segments: I, p: (i64, i64)) -> PointClassification
where
    I: IntoIterator<Item = ((i64, i64), (i64, i64))>,
{
    let mut inside = false;
    for (a, b) in segments {
        if point_on_segment(a, b, p) {
            return PointClassification::OnBoundary;
        }
        if (a.1 > p.1) != (b.1 > p.1) {
            let side = orient(a, b, p);
            let upward = b.1 > a.1;
            if (upward && side > 0) || (!upward && side < 0) {
                inside = !inside;
            }
        }
    }
    if inside {
        PointClassification::Inside
    } else {
        PointClassification::Outside
    }
}

/// Classifies `p` against a closed polygon.
#[must_use]
pub fn classify_point_in_polygon(points: &[Coordinate], p: Coordinate) -> PointClassification {
    let n = points.len();
    classify_against_segments(
        (0..n).map(|i| (points[i].wide(), points[(i + 1) % n].wide())),
        p.wide(),
    )
}

/// Floating-point even-odd test; only used for points that are not on the integer grid.
#[must_use]
pub fn point_in_polygon_f64(points: &[Coordinate], p: &Point2) -> bool {
    let n = points.len();
    let mut inside = false;
    for i in 0..n {
        let a = points[i].to_point();
        let b = points[(i + 1) % n].to_point();
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Coordinate> {
        vec![
            Coordinate::new(x0, y0),
            Coordinate::new(x1, y0),
            Coordinate::new(x1, y1),
            Coordinate::new(x0, y1),
        ]
    }

    #[test]
    fn ccw_square_area_is_positive() {
        assert_eq!(signed_area_doubled(&square(0, 0, 100, 100)), 20000);
    }

    #[test]
    fn cw_square_area_is_negative() {
        let mut pts = square(0, 0, 100, 100);
        pts.reverse();
        assert_eq!(signed_area_doubled(&pts), -20000);
    }

    #[test]
    fn degenerate_polygon_has_no_area() {
        assert_eq!(signed_area_doubled(&[Coordinate::new(1, 1)]), 0);
        assert_eq!(signed_area_doubled(&[]), 0);
    }

    #[test]
    fn classify_inside_outside_boundary() {
        let sq = square(0, 0, 10, 10);
        assert_eq!(
            classify_point_in_polygon(&sq, Coordinate::new(5, 5)),
            PointClassification::Inside
        );
        assert_eq!(
            classify_point_in_polygon(&sq, Coordinate::new(15, 5)),
            PointClassification::Outside
        );
        assert_eq!(
            classify_point_in_polygon(&sq, Coordinate::new(10, 3)),
            PointClassification::OnBoundary
        );
        assert_eq!(
            classify_point_in_polygon(&sq, Coordinate::new(0, 0)),
            PointClassification::OnBoundary
        );
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // Diamond: the ray from (0, 0) passes exactly through the vertex (5, 0).
        let diamond = vec![
            Coordinate::new(5, 0),
            Coordinate::new(0, 5),
            Coordinate::new(-5, 0),
            Coordinate::new(0, -5),
        ];
        assert_eq!(
            classify_point_in_polygon(&diamond, Coordinate::new(0, 0)),
            PointClassification::Inside
        );
        assert_eq!(
            classify_point_in_polygon(&diamond, Coordinate::new(-7, 0)),
            PointClassification::Outside
        );
    }

    #[test]
    fn float_test_matches_integer_test() {
        let sq = square(0, 0, 10, 10);
        assert!(point_in_polygon_f64(&sq, &Point2::new(9.75, 0.25)));
        assert!(!point_in_polygon_f64(&sq, &Point2::new(10.25, 0.25)));
    }
}
