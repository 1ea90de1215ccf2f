//! Release notes resolution
//!
//! Notes come from an ordered fallback chain; the first source that yields a
//! value wins and the rest are never consulted. There is no merging across
//! sources.

use std::path::{Path, PathBuf};

/// Which source produced the release notes (for diagnostics)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesSource {
  /// Runtime override (CLI flag)
  Override,
  /// Static value from updraft.toml
  Config,
  /// Flavor-specific release-notes.txt
  VariantFile,
  /// src/main release-notes.txt
  DefaultFile,
  /// Latest git commit message
  LastCommit,
  /// Nothing available
  None,
}

impl NotesSource {
  /// Human-readable description for progress output
  pub fn describe(self) -> &'static str {
    match self {
      NotesSource::Override => "command line",
      NotesSource::Config => "updraft.toml",
      NotesSource::VariantFile => "flavor release-notes.txt",
      NotesSource::DefaultFile => "main release-notes.txt",
      NotesSource::LastCommit => "last commit message",
      NotesSource::None => "none",
    }
  }
}

/// Flavor-specific notes file: `<project>/src/<flavor>/updraft/release-notes.txt`
pub fn variant_notes_path(project_dir: &Path, flavor: &str) -> PathBuf {
  project_dir.join("src").join(flavor).join("updraft").join("release-notes.txt")
}

/// Default notes file: `<project>/src/main/updraft/release-notes.txt`
pub fn default_notes_path(project_dir: &Path) -> PathBuf {
  project_dir.join("src").join("main").join("updraft").join("release-notes.txt")
}

/// Resolve release notes by precedence
///
/// 1. runtime override, 2. configured value, 3. flavor notes file,
/// 4. default notes file, 5. latest commit message, 6. empty string.
pub fn resolve(
  override_value: Option<&str>,
  configured_value: Option<&str>,
  variant_file: Option<&Path>,
  default_file: &Path,
  fallback_commit_message: impl FnOnce() -> String,
) -> (String, NotesSource) {
  if let Some(value) = override_value {
    return (value.to_string(), NotesSource::Override);
  }

  if let Some(value) = configured_value {
    return (value.to_string(), NotesSource::Config);
  }

  if let Some(path) = variant_file
    && let Some(text) = read_notes_file(path)
  {
    return (text, NotesSource::VariantFile);
  }

  if let Some(text) = read_notes_file(default_file) {
    return (text, NotesSource::DefaultFile);
  }

  let message = fallback_commit_message();
  if !message.is_empty() {
    return (message, NotesSource::LastCommit);
  }

  (String::new(), NotesSource::None)
}

/// Read a notes file as newline-joined lines, None if the file doesn't exist
fn read_notes_file(path: &Path) -> Option<String> {
  if !path.exists() {
    return None;
  }
  let content = std::fs::read_to_string(path).ok()?;
  Some(content.lines().collect::<Vec<_>>().join("\n"))
}
