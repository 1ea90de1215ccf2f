//! Core workflow for updraft uploads
//!
//! This module contains the building blocks of the upload workflow:
//!
//! - **artifact**: Locate the single APK/AAB in a variant's output directory
//! - **config**: updraft.toml parsing and destination URL resolution
//! - **error**: Error types with contextual help messages and exit codes
//! - **notes**: Release notes fallback chain
//! - **upload**: Multipart PUT per destination with response classification
//! - **vcs**: Git metadata queries (SystemGit)

pub mod artifact;
pub mod config;
pub mod error;
pub mod notes;
pub mod upload;
pub mod vcs;
