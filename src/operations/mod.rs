pub mod boolean;
pub mod cut;
pub mod faces;
pub mod query;
