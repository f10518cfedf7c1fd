//! Breadth-first search for every occurrence of a file name in a tree.

mod engine;
mod match_path;

pub use engine::{Matches, search, search_matches};
pub use match_path::MatchPath;
