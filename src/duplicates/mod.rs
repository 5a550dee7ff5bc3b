pub mod grouper;
pub mod hasher;

pub use grouper::{find_duplicates, find_duplicates_in, find_duplicates_with_progress, DupResults, DuplicateGroup};
