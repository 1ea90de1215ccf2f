//! Integration tests for the updraft CLI
//!
//! Each test builds a throwaway Android-shaped project (git history, Gradle
//! output directories, updraft.toml) and drives the compiled binary against a
//! local mock Updraft server.

mod test_notes;
mod test_upload;
