//! Artifact discovery in Gradle output directories
//!
//! An upload sends exactly one package file. The output directory for a
//! variant is expected to hold a single `.apk` or `.aab`; anything else is a
//! stale-output situation the user has to resolve, never something to guess
//! around.

use crate::core::error::{ArtifactError, UpdraftError, UpdraftResult};
use std::path::{Path, PathBuf};

/// Kind of Android package artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
  Apk,
  Aab,
}

impl ArtifactKind {
  /// File name suffix for this kind (case-sensitive)
  pub fn suffix(self) -> &'static str {
    match self {
      ArtifactKind::Apk => ".apk",
      ArtifactKind::Aab => ".aab",
    }
  }

  /// Conventional Gradle output directory for this kind
  ///
  /// APKs land under `outputs/apk/<flavor>/<build-type>`, bundles under
  /// `outputs/bundle/<variant>`.
  pub fn output_dir(self, build_dir: &Path, flavor: Option<&str>, build_type: &str, variant: &str) -> PathBuf {
    match self {
      ArtifactKind::Apk => {
        let mut dir = build_dir.join("outputs").join("apk");
        if let Some(flavor) = flavor {
          dir = dir.join(flavor);
        }
        dir.join(build_type)
      }
      ArtifactKind::Aab => build_dir.join("outputs").join("bundle").join(variant),
    }
  }

  /// Gradle task that produces this kind of artifact (used in error hints)
  pub fn producing_task(self, variant_capitalized: &str) -> String {
    match self {
      ArtifactKind::Apk => format!("assemble{}", variant_capitalized),
      ArtifactKind::Aab => format!("bundle{}", variant_capitalized),
    }
  }
}

/// Locate the single artifact with the given suffix in a directory
///
/// Returns `Ok(None)` when the directory does not exist or holds no match;
/// the caller decides whether absence is fatal. More than one match is always
/// an error, reported with the full candidate list.
pub fn locate(directory: &Path, suffix: &str) -> UpdraftResult<Option<PathBuf>> {
  if !directory.is_dir() {
    return Ok(None);
  }

  let mut candidates: Vec<PathBuf> = Vec::new();
  for entry in std::fs::read_dir(directory)? {
    let entry = entry?;
    let name = entry.file_name();
    if name.to_string_lossy().ends_with(suffix) {
      candidates.push(entry.path());
    }
  }

  match candidates.len() {
    0 => Ok(None),
    1 => Ok(Some(candidates.remove(0))),
    _ => {
      let mut names: Vec<String> = candidates
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
      names.sort();
      Err(UpdraftError::Artifact(ArtifactError::Ambiguous {
        directory: directory.to_path_buf(),
        candidates: names,
      }))
    }
  }
}
