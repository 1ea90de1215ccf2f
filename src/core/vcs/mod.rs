//! Git metadata abstraction
//!
//! Metadata lookups shell out to system git. Every lookup is independently
//! failable: a missing git binary, a directory that is not a repository, or a
//! query that exits non-zero all degrade to an empty string instead of
//! aborting the upload.

mod system_git;

pub use system_git::SystemGit;
