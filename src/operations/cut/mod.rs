mod crossings;
mod cut_against;
mod cut_self;
mod insert;
mod rounds;
mod split;

pub use crossings::{edge_crossings, normalize_cuts, self_crossings};
pub use cut_against::CutAgainst;
pub use cut_self::CutSelf;
pub use insert::InsertEdge;
pub use split::split_edge;
