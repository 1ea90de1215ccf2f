//! Tests for the `notes` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_notes_override_beats_all_sources() -> Result<()> {
  let project = TestProject::new()?;
  project.write_config("release_notes = \"configured\"\n\n[urls]\n")?;
  project.write_release_notes(None, "from file")?;

  let output = run_updraft(&project, &["notes", "--release-notes", "from flag"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let out = stdout(&output);
  assert!(out.contains("command line"));
  assert!(out.contains("from flag"));
  assert!(!out.contains("from file"));

  Ok(())
}

#[test]
fn test_notes_configured_value() -> Result<()> {
  let project = TestProject::new()?;
  project.write_config("release_notes = \"configured notes\"\n\n[urls]\n")?;
  project.write_release_notes(None, "from file")?;

  let output = run_updraft(&project, &["notes"])?;
  assert!(output.status.success());

  let out = stdout(&output);
  assert!(out.contains("updraft.toml"));
  assert!(out.contains("configured notes"));

  Ok(())
}

#[test]
fn test_notes_flavor_file_beats_main_file() -> Result<()> {
  let project = TestProject::new()?;
  project.write_release_notes(Some("staging"), "staging specific")?;
  project.write_release_notes(None, "main default")?;

  let output = run_updraft(&project, &["notes", "--flavor", "staging"])?;
  assert!(output.status.success());

  let out = stdout(&output);
  assert!(out.contains("flavor release-notes.txt"));
  assert!(out.contains("staging specific"));

  Ok(())
}

#[test]
fn test_notes_falls_back_to_last_commit_message() -> Result<()> {
  let project = TestProject::new()?;
  std::fs::write(project.path.join("onboarding.txt"), "wip")?;
  project.commit("Add onboarding flow")?;

  let output = run_updraft(&project, &["notes"])?;
  assert!(output.status.success());

  let out = stdout(&output);
  assert!(out.contains("last commit message"));
  assert!(out.contains("Add onboarding flow"));
  assert!(!out.contains("Initial project setup"));

  Ok(())
}
