//! CLI commands for updraft
//!
//! - **upload**: Locate the variant's artifact, gather metadata, upload to
//!   every configured destination
//! - **notes**: Show the release notes the next upload would send, and which
//!   source they came from

pub mod notes;
pub mod upload;

pub use notes::run_notes;
pub use upload::run_upload;
