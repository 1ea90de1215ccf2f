//! Tests for the `upload` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_upload_success_with_public_link() -> Result<()> {
  let project = TestProject::new()?;
  project.add_apk(None, "release", "app-release.apk")?;

  let (base, rx) = mock_server(vec![r#"{"success":"ok","public_link":"https://dl/1"}"#]);
  project.write_config(&format!("[urls]\nRelease = \"{}\"\n", base))?;

  let output = run_updraft(&project, &["upload"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let out = stdout(&output);
  assert!(out.contains("Your App was successfully updrafted!"));
  assert!(out.contains("Get it here -> https://dl/1"));

  // The one request carried the artifact and the git metadata
  let request = rx.recv()?;
  assert!(request.contains("name=\"app\""));
  assert!(request.contains("app-release.apk"));
  assert!(request.contains("name=\"build_type\""));
  assert!(request.contains("Gradle"));
  assert!(request.contains("name=\"custom_branch\""));
  assert!(request.contains("main"));

  Ok(())
}

#[test]
fn test_upload_sends_tags_remote_and_notes() -> Result<()> {
  let project = TestProject::new()?;
  project.add_apk(None, "release", "app-release.apk")?;
  project.tag("v2.0.0")?;
  project.add_remote("https://example.com/app.git")?;
  project.write_release_notes(None, "fixed the spinner")?;

  let (base, rx) = mock_server(vec![r#"{"success":"ok"}"#]);
  project.write_config(&format!("[urls]\nRelease = \"{}\"\n", base))?;

  let output = run_updraft(&project, &["upload"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert!(stdout(&output).contains("main release-notes.txt"));

  let request = rx.recv()?;
  assert!(request.contains("name=\"custom_tags\""));
  assert!(request.contains("v2.0.0"));
  assert!(request.contains("name=\"custom_URL\""));
  assert!(request.contains("https://example.com/app.git"));
  assert!(request.contains("name=\"whats_new\""));
  assert!(request.contains("fixed the spinner"));

  Ok(())
}

#[test]
fn test_upload_halts_batch_after_not_found() -> Result<()> {
  let project = TestProject::new()?;
  project.add_apk(None, "release", "app-release.apk")?;

  let (base, rx) = mock_server(vec![
    r#"{"success":"ok","public_link":"https://dl/1"}"#,
    r#"{"detail":"Not found."}"#,
  ]);
  project.write_config(&format!(
    "[urls]\nRelease = [\"{base}/1\", \"{base}/2\", \"{base}/3\"]\n"
  ))?;

  let output = run_updraft(&project, &["upload"])?;
  assert_eq!(output.status.code(), Some(3));

  // First destination succeeded, second was fatal
  let out = stdout(&output);
  assert!(out.contains("Get it here -> https://dl/1"));
  assert!(stderr(&output).contains("Could not updraft"));

  // The third destination was never attempted
  assert_eq!(rx.iter().count(), 2);

  Ok(())
}

#[test]
fn test_upload_rejected_surfaces_raw_body() -> Result<()> {
  let project = TestProject::new()?;
  project.add_apk(None, "release", "app-release.apk")?;

  let (base, _rx) = mock_server(vec![r#"{"detail":"Invalid token."}"#]);
  project.write_config(&format!("[urls]\nRelease = \"{}\"\n", base))?;

  let output = run_updraft(&project, &["upload"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(stderr(&output).contains("Invalid token."));

  Ok(())
}

#[test]
fn test_upload_missing_artifact_hints_producing_task() -> Result<()> {
  let project = TestProject::new()?;
  project.write_config("[urls]\nRelease = \"https://example.com/u\"\n")?;

  let output = run_updraft(&project, &["upload"])?;
  assert_eq!(output.status.code(), Some(1));

  let err = stderr(&output);
  assert!(err.contains("Could not find a build artifact"));
  assert!(err.contains("assembleRelease"));

  Ok(())
}

#[test]
fn test_upload_missing_bundle_hints_bundle_task() -> Result<()> {
  let project = TestProject::new()?;
  project.write_config("[urls]\nStagingDebug = \"https://example.com/u\"\n")?;

  let output = run_updraft(&project, &["upload", "--bundle", "--flavor", "staging", "--build-type", "debug"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("bundleStagingDebug"));

  Ok(())
}

#[test]
fn test_upload_ambiguous_artifact_lists_candidates() -> Result<()> {
  let project = TestProject::new()?;
  project.add_apk(None, "release", "app-release.apk")?;
  project.add_apk(None, "release", "app-release-unsigned.apk")?;
  project.write_config("[urls]\nRelease = \"https://example.com/u\"\n")?;

  let output = run_updraft(&project, &["upload"])?;
  assert_eq!(output.status.code(), Some(1));

  let err = stderr(&output);
  assert!(err.contains("More than one artifact"));
  assert!(err.contains("app-release.apk"));
  assert!(err.contains("app-release-unsigned.apk"));

  Ok(())
}

#[test]
fn test_upload_without_configured_url_fails() -> Result<()> {
  let project = TestProject::new()?;
  project.add_apk(None, "release", "app-release.apk")?;
  project.write_config("[urls]\nDebug = \"https://example.com/u\"\n")?;

  let output = run_updraft(&project, &["upload"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("no url provided"));

  Ok(())
}

#[test]
fn test_upload_without_config_file_fails() -> Result<()> {
  let project = TestProject::new()?;
  project.add_apk(None, "release", "app-release.apk")?;

  let output = run_updraft(&project, &["upload"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("No updraft configuration"));

  Ok(())
}

#[test]
fn test_upload_flavored_variant_uses_flavor_output_dir() -> Result<()> {
  let project = TestProject::new()?;
  project.add_apk(Some("staging"), "debug", "app-staging-debug.apk")?;

  let (base, rx) = mock_server(vec![r#"{"success":"ok"}"#]);
  project.write_config(&format!("[urls]\nStagingDebug = \"{}\"\n", base))?;

  let output = run_updraft(&project, &["upload", "--flavor", "staging", "--build-type", "debug"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let request = rx.recv()?;
  assert!(request.contains("app-staging-debug.apk"));

  Ok(())
}

#[test]
fn test_upload_bundle_uses_variant_output_dir() -> Result<()> {
  let project = TestProject::new()?;
  project.add_bundle("stagingDebug", "app-staging-debug.aab")?;

  let (base, rx) = mock_server(vec![r#"{"success":"ok"}"#]);
  project.write_config(&format!("[urls]\nStagingDebug = \"{}\"\n", base))?;

  let output = run_updraft(&project, &["upload", "--bundle", "--flavor", "staging", "--build-type", "debug"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let request = rx.recv()?;
  assert!(request.contains("app-staging-debug.aab"));

  Ok(())
}

#[test]
fn test_upload_dry_run_sends_nothing() -> Result<()> {
  let project = TestProject::new()?;
  project.add_apk(None, "release", "app-release.apk")?;

  let (base, rx) = mock_server(vec![r#"{"success":"ok"}"#]);
  project.write_config(&format!("[urls]\nRelease = \"{}\"\n", base))?;

  let output = run_updraft(&project, &["upload", "--dry-run"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let out = stdout(&output);
  assert!(out.contains("DRY-RUN"));
  assert!(out.contains("app-release.apk"));
  assert!(out.contains(&base));

  assert_eq!(rx.try_iter().count(), 0);

  Ok(())
}
