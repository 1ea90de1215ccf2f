//! System git backend - zero dependencies
//!
//! Uses one-shot git queries for upload metadata. Optimized for:
//! - Per-run caching (each query runs at most once per invocation)
//! - Safe subprocess execution (isolated environment)
//! - Graceful degradation (any failure yields an empty value)

use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git metadata provider using system git (zero crate dependencies)
///
/// Each accessor degrades to an empty string when the query fails; a build
/// outside a git checkout still uploads, just with less metadata attached.
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,

  branch: OnceCell<String>,
  tags: OnceCell<String>,
  commit: OnceCell<String>,
  remote_url: OnceCell<String>,
  last_message: OnceCell<String>,
}

impl SystemGit {
  /// Bind to a working directory
  ///
  /// No subprocess runs here; queries are lazy and cached.
  pub fn new(path: &Path) -> Self {
    Self {
      repo_path: path.to_path_buf(),
      branch: OnceCell::new(),
      tags: OnceCell::new(),
      commit: OnceCell::new(),
      remote_url: OnceCell::new(),
      last_message: OnceCell::new(),
    }
  }

  /// Current branch name (abbreviated ref of HEAD)
  pub fn current_branch(&self) -> &str {
    self
      .branch
      .get_or_init(|| self.query(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or_default())
  }

  /// Tags pointing at the current commit, newline-separated
  pub fn current_tags(&self) -> &str {
    self
      .tags
      .get_or_init(|| self.query(&["tag", "--points-at", "HEAD"]).unwrap_or_default())
  }

  /// HEAD commit SHA
  pub fn current_commit(&self) -> &str {
    self
      .commit
      .get_or_init(|| self.query(&["rev-parse", "HEAD"]).unwrap_or_default())
  }

  /// Configured fetch URL of the origin remote
  pub fn remote_url(&self) -> &str {
    self
      .remote_url
      .get_or_init(|| self.query(&["config", "--get", "remote.origin.url"]).unwrap_or_default())
  }

  /// Full message of the latest commit
  pub fn last_commit_message(&self) -> &str {
    self
      .last_message
      .get_or_init(|| self.query(&["log", "-1", "--pretty=%B"]).unwrap_or_default())
  }

  /// Run a one-shot git query with combined output capture
  ///
  /// Returns the trimmed output, or the failure reason. Callers absorb the
  /// failure into an empty value; the reason exists so a future verbose mode
  /// can surface it.
  fn query(&self, args: &[&str]) -> Result<String, String> {
    let output = self
      .git_cmd()
      .args(args)
      .output()
      .map_err(|e| format!("failed to spawn git: {}", e))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(format!("git {} failed: {}", args.join(" "), stderr.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("advice.detachedHead=false");

    cmd
  }
}
