mod find_crossing;

pub use find_crossing::FindCrossing;
