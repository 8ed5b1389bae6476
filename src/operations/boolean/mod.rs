mod classify;
mod engine;
mod intersect_op;
mod select;
mod subtract;
mod union;

pub use classify::Classifier;
pub use engine::boolean_execute;
pub use intersect_op::Intersect;
pub use select::{should_keep_edge, BooleanOp, EdgeSource, KeepDecision};
pub use subtract::{ReverseSubtract, Subtract};
pub use union::Union;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Curve;
    use crate::math::Coordinate;
    use crate::operations::faces::BuildFaces;
    use crate::topology::CutGraph;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn square(x0: i32, y0: i32, x1: i32, y1: i32, payload: char) -> CutGraph<char> {
        let mut graph = CutGraph::new();
        let corners = [c(x0, y0), c(x1, y0), c(x1, y1), c(x0, y1)];
        for i in 0..4 {
            graph.add_edge(Curve::line(corners[i], corners[(i + 1) % 4]), payload);
        }
        graph
    }

    fn single_area(graph: &CutGraph<char>) -> i128 {
        let tree = BuildFaces::new().execute(graph).unwrap();
        assert_eq!(tree.len(), 1);
        tree.roots()[0].signed_area_doubled()
    }

    #[test]
    fn union_of_overlapping_squares() {
        let a = square(0, 0, 2, 2, 'a');
        let b = square(1, 1, 3, 3, 'b');
        let result = Union::new(&a, &b).execute().unwrap();

        assert_eq!(result.edge_count(), 8);
        let tree = BuildFaces::new().execute(&result).unwrap();
        assert_eq!(tree.len(), 1);
        let outline = &tree.roots()[0];
        assert_eq!(outline.segments().len(), 8);
        assert_eq!(outline.signed_area_doubled(), 14);
        assert_eq!(result.edges().filter(|(_, e)| e.payload == 'a').count(), 4);
    }

    #[test]
    fn intersection_of_overlapping_squares() {
        let a = square(0, 0, 2, 2, 'a');
        let b = square(1, 1, 3, 3, 'b');
        let result = Intersect::new(&a, &b).execute().unwrap();
        assert_eq!(result.edge_count(), 4);
        assert_eq!(single_area(&result), 2);
    }

    #[test]
    fn differences_of_overlapping_squares() {
        let a = square(0, 0, 2, 2, 'a');
        let b = square(1, 1, 3, 3, 'b');

        let a_minus_b = Subtract::new(&a, &b).execute().unwrap();
        assert_eq!(a_minus_b.edge_count(), 6);
        assert_eq!(single_area(&a_minus_b), 6);
        assert!(a_minus_b.vertex_at(c(1, 1)).is_some());

        let b_minus_a = ReverseSubtract::new(&a, &b).execute().unwrap();
        assert_eq!(b_minus_a.edge_count(), 6);
        assert_eq!(single_area(&b_minus_a), 6);
        assert!(b_minus_a.vertex_at(c(2, 2)).is_some());
    }

    #[test]
    fn disjoint_inputs() {
        let a = square(0, 0, 10, 10, 'a');
        let b = square(20, 0, 30, 10, 'b');
        assert_eq!(Union::new(&a, &b).execute().unwrap().edge_count(), 8);
        assert!(Intersect::new(&a, &b).execute().unwrap().is_empty());
        assert_eq!(Subtract::new(&a, &b).execute().unwrap().edge_count(), 4);
    }

    #[test]
    fn shared_edge_is_kept_once() {
        let a = square(0, 0, 10, 10, 'a');
        let b = square(10, 0, 20, 10, 'b');
        let result = Union::new(&a, &b).execute().unwrap();

        assert_eq!(result.edge_count(), 7);
        let tree = BuildFaces::new().execute(&result).unwrap();
        let total: f64 = tree
            .iter()
            .filter(|(depth, _)| *depth == 0)
            .map(|(_, f)| f.area())
            .sum();
        assert!((total - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hole_punched_by_subtraction() {
        let a = square(0, 0, 100, 100, 'a');
        let b = square(25, 25, 75, 75, 'b');
        let result = Subtract::new(&a, &b).execute().unwrap();
        assert_eq!(result.edge_count(), 8);
        assert_eq!(result.classify_point(c(50, 50)), crate::math::PointClassification::Outside);
        assert_eq!(result.classify_point(c(10, 10)), crate::math::PointClassification::Inside);

        let tree = BuildFaces::new().execute(&result).unwrap();
        assert_eq!(tree.roots().len(), 1);
        let outer = &tree.roots()[0];
        assert_eq!(outer.signed_area_doubled(), 20000);
        assert_eq!(outer.children().len(), 1);
        assert_eq!(outer.children()[0].signed_area_doubled(), -5000);
    }

    #[test]
    fn notch_cut_from_an_edge_leaves_one_face() {
        let a = square(0, 0, 100, 100, 'a');
        let b = square(50, 0, 150, 50, 'b');
        let result = Subtract::new(&a, &b).execute().unwrap();

        // The stretch of bottom edge shared with the notch is kept from `a`.
        assert!(result.vertex_at(c(100, 0)).is_some());
        assert_eq!(single_area(&result), 15000);
    }

    #[test]
    fn kept_edges_of_the_subtracted_graph_are_reversed() {
        let a = square(0, 0, 2, 2, 'a');
        let b = square(1, 1, 3, 3, 'b');
        let result = Subtract::new(&a, &b).execute().unwrap();

        let from_b: Vec<_> = result
            .edges()
            .filter(|(_, e)| e.payload == 'b')
            .map(|(_, e)| (e.curve.start(), e.curve.end()))
            .collect();
        assert_eq!(from_b.len(), 2);
        assert!(from_b.contains(&(c(2, 1), c(1, 1))));
        assert!(from_b.contains(&(c(1, 1), c(1, 2))));
    }
}
