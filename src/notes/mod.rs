pub mod store;

pub use store::{Note, NoteStore};
