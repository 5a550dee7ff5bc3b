//! # Workspace Organizer
//!
//! The file engine behind a personal desktop productivity tool.
//!
//! - **Scan**: walk a folder to a depth limit into an immutable [`scanner::ScanSnapshot`]
//! - **Categorize**: bucket files by extension into Documents, Images, Videos, Audio, Archives, Other
//! - **Deduplicate**: size buckets first, content hashes only where sizes collide
//! - **Organize**: move files into category or `YYYY/MM/DD` folders, prune empty folders
//! - **Notes & config**: small JSON documents under a per-user data directory
//!
//! Every filesystem mutation is best-effort per item and reported, never rolled back.

pub mod cli;
pub mod common;
pub mod duplicates;
pub mod notes;
pub mod organizer;
pub mod scanner;
