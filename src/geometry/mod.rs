pub mod curve;

pub use curve::{Curve, CutPoint};
