//! Notes command - show what the next upload would send
//!
//! Runs the same fallback chain as the upload command without touching the
//! network, so a misconfigured notes source is visible before a release.

use std::path::PathBuf;

use crate::core::config::UpdraftConfig;
use crate::core::error::UpdraftResult;
use crate::core::notes;
use crate::core::vcs::SystemGit;

/// Run the notes command
pub fn run_notes(project_dir: PathBuf, flavor: Option<String>, release_notes: Option<String>) -> UpdraftResult<()> {
  // Config is optional here; without one the chain still has files and git
  let config = if UpdraftConfig::exists(&project_dir) {
    UpdraftConfig::load(&project_dir)?
  } else {
    UpdraftConfig::default()
  };

  let vcs = SystemGit::new(&project_dir);
  let variant_file = flavor.as_deref().map(|f| notes::variant_notes_path(&project_dir, f));

  let (text, source) = notes::resolve(
    release_notes.as_deref(),
    config.release_notes.as_deref(),
    variant_file.as_deref(),
    &notes::default_notes_path(&project_dir),
    || vcs.last_commit_message().to_string(),
  );

  println!("📝 Release notes source: {}", source.describe());
  if text.is_empty() {
    println!("   (empty - the upload would omit the whats_new field)");
  } else {
    println!();
    println!("{}", text);
  }

  Ok(())
}
