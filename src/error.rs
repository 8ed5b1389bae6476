use thiserror::Error;

/// Top-level error type for the curve-graph engine.
#[derive(Debug, Error)]
pub enum CurveGraphError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors related to curve geometry and exact predicates.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("unsupported curve order {order}: expected 2, 3 or 4 points")]
    UnsupportedOrder { order: usize },

    #[error("parameter {parameter} = {value} is out of range ({min}, {max})")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("cut parameters must be strictly increasing")]
    UnsortedParameters,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the vertex/edge arena.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("face loop is not closed")]
    LoopNotClosed,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Convenience type alias for results using [`CurveGraphError`].
pub type Result<T> = std::result::Result<T, CurveGraphError>;
