//! Upload command - the main workflow
//!
//! Sequential, per-variant: resolve destination URLs, locate the artifact,
//! gather git metadata and release notes, then PUT to each destination in
//! order. The first fatal response aborts the remaining destinations.

use std::path::PathBuf;

use crate::core::artifact::{self, ArtifactKind};
use crate::core::config::UpdraftConfig;
use crate::core::error::{ArtifactError, ConfigError, UpdraftError, UpdraftResult};
use crate::core::notes::{self, NotesSource};
use crate::core::upload::{UploadClient, UploadMetadata};
use crate::core::vcs::SystemGit;
use crate::utils;

/// Run the upload command
pub fn run_upload(
  project_dir: PathBuf,
  build_dir: Option<PathBuf>,
  flavor: Option<String>,
  build_type: String,
  bundle: bool,
  release_notes: Option<String>,
  dry_run: bool,
) -> UpdraftResult<()> {
  let build_dir = build_dir.unwrap_or_else(|| project_dir.join("build"));
  let variant = utils::variant_name(flavor.as_deref(), &build_type);
  let variant_key = utils::capitalize_first(&variant);

  let config = UpdraftConfig::load(&project_dir)?;
  println!("📦 Loaded configuration for variant '{}'", variant_key);

  let urls = config.resolve_urls(&variant_key);
  if urls.is_empty() {
    return Err(UpdraftError::Config(ConfigError::NoUploadUrl { variant: variant_key }));
  }

  let kind = if bundle { ArtifactKind::Aab } else { ArtifactKind::Apk };
  let output_dir = kind.output_dir(&build_dir, flavor.as_deref(), &build_type, &variant);
  let artifact = artifact::locate(&output_dir, kind.suffix())?.ok_or_else(|| {
    UpdraftError::Artifact(ArtifactError::Missing {
      directory: output_dir.clone(),
      task_hint: kind.producing_task(&variant_key),
    })
  })?;

  let vcs = SystemGit::new(&project_dir);

  let variant_file = flavor.as_deref().map(|f| notes::variant_notes_path(&project_dir, f));
  let (notes_text, notes_source) = notes::resolve(
    release_notes.as_deref(),
    config.release_notes.as_deref(),
    variant_file.as_deref(),
    &notes::default_notes_path(&project_dir),
    || vcs.last_commit_message().to_string(),
  );
  if notes_source != NotesSource::None {
    println!("📝 Using release notes from {}", notes_source.describe());
  }

  let metadata = UploadMetadata {
    branch: vcs.current_branch().to_string(),
    remote_url: vcs.remote_url().to_string(),
    tags: vcs.current_tags().to_string(),
    commit: vcs.current_commit().to_string(),
    release_notes: notes_text,
  };

  if dry_run {
    print_plan(&artifact, &urls, &metadata);
    return Ok(());
  }

  let client = UploadClient::new();
  client.upload_all(&artifact, &urls, &metadata)?;

  Ok(())
}

/// Print what would be uploaded without sending anything
fn print_plan(artifact: &std::path::Path, urls: &[String], metadata: &UploadMetadata) {
  println!("\n🔍 DRY-RUN MODE - Nothing will be uploaded");
  println!("   Artifact: {}", artifact.display());
  println!("   Destinations:");
  for url in urls {
    println!("     • {}", url);
  }
  println!("   Branch:   {}", display_or_dash(&metadata.branch));
  println!("   Remote:   {}", display_or_dash(&metadata.remote_url));
  println!("   Tags:     {}", display_or_dash(&metadata.tags));
  println!("   Commit:   {}", display_or_dash(&metadata.commit));
  println!("   Notes:    {}", display_or_dash(&metadata.release_notes));
  println!("\n✋ To execute this plan, run again without --dry-run");
}

fn display_or_dash(value: &str) -> &str {
  if value.trim().is_empty() { "-" } else { value }
}
