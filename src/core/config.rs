//! Updraft configuration (updraft.toml) parsing and URL resolution
//!
//! ```toml
//! release_notes = "Optional static notes"
//!
//! [urls]
//! Release = "https://getupdraft.com/api/app_upload/abc/def/"
//! StagingDebug = [
//!   "https://getupdraft.com/api/app_upload/abc/ghi/",
//!   "https://getupdraft.com/api/app_upload/abc/jkl/",
//! ]
//! ```
//!
//! A variant's value may be a bare string or an array; a bare string is
//! coerced to a one-element list.

use crate::core::error::{ConfigError, ResultExt, UpdraftError, UpdraftResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for updraft
/// Searched in order: updraft.toml, .updraft.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdraftConfig {
  /// Destination URLs per build variant
  #[serde(default)]
  pub urls: BTreeMap<String, UrlList>,

  /// Static release notes (overridden by the CLI flag, overrides notes files)
  #[serde(default)]
  pub release_notes: Option<String>,
}

/// One or many destination URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlList {
  One(String),
  Many(Vec<String>),
}

impl UpdraftConfig {
  const FILE_NAMES: [&'static str; 2] = ["updraft.toml", ".updraft.toml"];

  /// Find the config file under a project directory
  pub fn find_config_path(project_dir: &Path) -> Option<PathBuf> {
    Self::FILE_NAMES
      .iter()
      .map(|name| project_dir.join(name))
      .find(|path| path.is_file())
  }

  /// Check whether a config file exists
  pub fn exists(project_dir: &Path) -> bool {
    Self::find_config_path(project_dir).is_some()
  }

  /// Load configuration from a project directory
  pub fn load(project_dir: &Path) -> UpdraftResult<Self> {
    let path = Self::find_config_path(project_dir).ok_or_else(|| {
      UpdraftError::Config(ConfigError::NotFound {
        project_root: project_dir.to_path_buf(),
      })
    })?;

    let content = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: UpdraftConfig =
      toml_edit::de::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(config)
  }

  /// Resolve the ordered destination URL list for a variant
  ///
  /// Missing variant yields an empty vec; the caller treats that as a fatal
  /// misconfiguration. A single entry that does not look like a URL is still
  /// passed through as a one-element list, with a printed notice, matching
  /// the historical "wrap it for you" behavior.
  pub fn resolve_urls(&self, variant_key: &str) -> Vec<String> {
    let urls = match self.urls.get(variant_key) {
      Some(UrlList::One(url)) => vec![url.clone()],
      Some(UrlList::Many(urls)) => urls.clone(),
      None => Vec::new(),
    };

    if urls.len() == 1 && !urls[0].is_empty() && !urls[0].starts_with("http") {
      println!("--------------------------------------");
      println!("Url was not wrapped in array. Doing it for you. :)");
      println!("url --> [url]");
      println!("--------------------------------------");
    }

    urls
  }
}
