#![allow(clippy::unwrap_used)]

use curvegraph::geometry::Curve;
use curvegraph::math::{Coordinate, PointClassification};
use curvegraph::operations::boolean::{Intersect, Subtract, Union};
use curvegraph::operations::cut::{CutAgainst, InsertEdge};
use curvegraph::operations::faces::BuildFaces;
use curvegraph::operations::query::FindCrossing;
use curvegraph::tessellation::FlattenParams;
use curvegraph::topology::{CutGraph, GraphParams};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// A closed blob of four cubic arcs through the midpoints of a square's sides.
fn blob(graph: &mut CutGraph<&'static str>, cx: i32, cy: i32, r: i32, name: &'static str) {
    let k = r * 55 / 100;
    let arcs = [
        Curve::cubic(c(cx + r, cy), c(cx + r, cy + k), c(cx + k, cy + r), c(cx, cy + r)),
        Curve::cubic(c(cx, cy + r), c(cx - k, cy + r), c(cx - r, cy + k), c(cx - r, cy)),
        Curve::cubic(c(cx - r, cy), c(cx - r, cy - k), c(cx - k, cy - r), c(cx, cy - r)),
        Curve::cubic(c(cx, cy - r), c(cx + k, cy - r), c(cx + r, cy - k), c(cx + r, cy)),
    ];
    for arc in arcs {
        InsertEdge::new(arc, name).execute(graph).unwrap();
    }
}

#[test]
fn overlapping_circles_end_to_end() {
    init_tracing();
    let flatten = FlattenParams::default().with_flatness_squared(1.0);
    let params = GraphParams::default().with_flatten(flatten);
    let mut a = CutGraph::with_params(params);
    let mut b = CutGraph::with_params(params);
    blob(&mut a, 0, 0, 1000, "a");
    blob(&mut b, 1000, 0, 1000, "b");

    let faces_a = BuildFaces::new().execute(&a).unwrap();
    assert_eq!(faces_a.len(), 1);
    let disc = faces_a.roots()[0].area();
    assert!((disc - std::f64::consts::PI * 1e6).abs() < 0.01 * disc);

    let union = Union::new(&a, &b).execute().unwrap();
    let intersection = Intersect::new(&a, &b).execute().unwrap();
    let difference = Subtract::new(&a, &b).execute().unwrap();
    for graph in [&union, &intersection, &difference] {
        assert!(FindCrossing::new().execute(graph).is_none());
    }

    let area = |graph: &CutGraph<&str>| {
        let tree = BuildFaces::new().execute(graph).unwrap();
        assert_eq!(tree.len(), 1);
        tree.roots()[0].area()
    };
    let (u, i, d) = (area(&union), area(&intersection), area(&difference));
    assert!((u - (2.0 * disc - i)).abs() < 0.01 * u);
    assert!((d - (disc - i)).abs() < 0.01 * d);

    assert_eq!(union.classify_point(c(500, 0)), PointClassification::Inside);
    assert_eq!(intersection.classify_point(c(-500, 0)), PointClassification::Outside);
    assert_eq!(difference.classify_point(c(1500, 0)), PointClassification::Outside);
    assert!(union.edges().any(|(_, e)| e.payload == "a"));
    assert!(union.edges().any(|(_, e)| e.payload == "b"));
}

#[test]
fn cut_against_then_faces() {
    init_tracing();
    let mut frame = CutGraph::new();
    let corners = [c(0, 0), c(400, 0), c(400, 400), c(0, 400)];
    for i in 0..4 {
        InsertEdge::new(Curve::line(corners[i], corners[(i + 1) % 4]), 0u8)
            .execute(&mut frame)
            .unwrap();
    }
    let mut stroke = CutGraph::new();
    InsertEdge::new(Curve::quadratic(c(-100, 200), c(200, 500), c(500, 200)), 1u8)
        .execute(&mut stroke)
        .unwrap();

    let (split_frame, split_stroke) = CutAgainst::new().execute(&mut frame, &mut stroke).unwrap();
    assert_eq!(split_frame, 2);
    assert_eq!(split_stroke, 1);
    assert_eq!(stroke.edge_count(), 3);

    for (_, edge) in stroke.edges() {
        frame.add_edge(edge.curve, edge.payload);
    }
    assert!(FindCrossing::new().execute(&frame).is_none());

    let tree = BuildFaces::new().execute(&frame).unwrap();
    let depth_one: Vec<_> = tree.iter().filter(|(depth, _)| *depth == 1).collect();
    assert_eq!(tree.roots().len(), 1);
    assert_eq!(depth_one.len(), 2);
    let total: f64 = depth_one.iter().map(|(_, f)| f.area()).sum();
    assert!((total - 160_000.0).abs() < 1.0);
}
