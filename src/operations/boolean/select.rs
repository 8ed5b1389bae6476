use crate::math::PointClassification;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Intersect,
    /// A − B.
    Subtract,
    /// B − A.
    ReverseSubtract,
}

/// Which input graph an edge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSource {
    A,
    B,
}

/// Decision about whether to keep an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepDecision {
    Keep,
    /// Keep the edge with its curve reversed.
    KeepFlipped,
    Discard,
}

/// Determines whether an edge is kept based on its classification against
/// the other graph and the boolean operation.
///
/// | Edge   | vs other graph | Union   | Intersect | A − B   | B − A   |
/// |--------|----------------|---------|-----------|---------|---------|
/// | from A | OUTSIDE B      | keep    | discard   | keep    | discard |
/// | from A | INSIDE B       | discard | keep      | discard | flip    |
/// | from A | ON B           | keep    | keep      | keep    | discard |
/// | from B | OUTSIDE A      | keep    | discard   | discard | keep    |
/// | from B | INSIDE A       | discard | keep      | flip    | discard |
/// | from B | ON A           | discard | discard   | discard | keep    |
///
/// An edge shared by both boundaries is taken from one side only. The
/// subtracted graph's edges bound the result from the other side, so they
/// are reversed to run with the kept boundary.
#[allow(clippy::match_same_arms)]
#[must_use]
pub fn should_keep_edge(
    source: EdgeSource,
    classification: PointClassification,
    op: BooleanOp,
) -> KeepDecision {
    use BooleanOp::{Intersect, ReverseSubtract, Subtract, Union};
    use KeepDecision::{Discard, Keep, KeepFlipped};
    use crate::math::PointClassification::{Inside, OnBoundary, Outside};

    match (source, classification, op) {
        (EdgeSource::A, Outside, Union | Subtract) => Keep,
        (EdgeSource::A, Outside, Intersect | ReverseSubtract) => Discard,
        (EdgeSource::A, Inside, Intersect) => Keep,
        (EdgeSource::A, Inside, ReverseSubtract) => KeepFlipped,
        (EdgeSource::A, Inside, Union | Subtract) => Discard,
        (EdgeSource::A, OnBoundary, Union | Intersect | Subtract) => Keep,
        (EdgeSource::A, OnBoundary, ReverseSubtract) => Discard,

        (EdgeSource::B, Outside, Union | ReverseSubtract) => Keep,
        (EdgeSource::B, Outside, Intersect | Subtract) => Discard,
        (EdgeSource::B, Inside, Intersect) => Keep,
        (EdgeSource::B, Inside, Subtract) => KeepFlipped,
        (EdgeSource::B, Inside, Union | ReverseSubtract) => Discard,
        (EdgeSource::B, OnBoundary, ReverseSubtract) => Keep,
        (EdgeSource::B, OnBoundary, Union | Intersect | Subtract) => Discard,
    }
}
