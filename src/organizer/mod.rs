pub mod category;
pub mod cleanup;
pub mod mover;
pub mod report;

pub use category::{categorize, categorize_paths, Categorized, Category};
pub use cleanup::cleanup_empty_folders;
pub use mover::{organize_by_date, organize_by_type};
pub use report::{CleanupReport, MovedFile, OrganizeReport, SkippedItem};
