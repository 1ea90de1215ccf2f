//! Error types for updraft with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and provides
//! contextual help messages to users. Every fatal error carries enough context to
//! tell the user which step of the upload workflow failed and what to do next.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for updraft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing or ambiguous artifacts)
  User = 1,
  /// System error (I/O, subprocess, HTTP transport)
  System = 2,
  /// Upload rejected by the remote service
  Upload = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for updraft
#[derive(Debug)]
pub enum UpdraftError {
  /// Configuration errors
  Config(ConfigError),

  /// Artifact discovery errors
  Artifact(ArtifactError),

  /// Upload errors reported by the remote service
  Upload(UploadError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl UpdraftError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    UpdraftError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      UpdraftError::Message { message, context, help } => UpdraftError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      UpdraftError::Config(_) => ExitCode::User,
      UpdraftError::Artifact(_) => ExitCode::User,
      UpdraftError::Upload(_) => ExitCode::Upload,
      UpdraftError::Io(_) => ExitCode::System,
      UpdraftError::Message { .. } => ExitCode::System,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      UpdraftError::Config(e) => e.help_message(),
      UpdraftError::Artifact(e) => e.help_message(),
      UpdraftError::Upload(e) => e.help_message(),
      UpdraftError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for UpdraftError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      UpdraftError::Config(e) => write!(f, "{}", e),
      UpdraftError::Artifact(e) => write!(f, "{}", e),
      UpdraftError::Upload(e) => write!(f, "{}", e),
      UpdraftError::Io(e) => write!(f, "I/O error: {}", e),
      UpdraftError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for UpdraftError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      UpdraftError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for UpdraftError {
  fn from(err: io::Error) -> Self {
    UpdraftError::Io(err)
  }
}

impl From<String> for UpdraftError {
  fn from(msg: String) -> Self {
    UpdraftError::message(msg)
  }
}

impl From<&str> for UpdraftError {
  fn from(msg: &str) -> Self {
    UpdraftError::message(msg)
  }
}

impl From<toml_edit::TomlError> for UpdraftError {
  fn from(err: toml_edit::TomlError) -> Self {
    UpdraftError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for UpdraftError {
  fn from(err: toml_edit::de::Error) -> Self {
    UpdraftError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for UpdraftError {
  fn from(err: serde_json::Error) -> Self {
    UpdraftError::message(format!("JSON error: {}", err))
  }
}

impl From<reqwest::Error> for UpdraftError {
  fn from(err: reqwest::Error) -> Self {
    UpdraftError::message(format!("HTTP request error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for UpdraftError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    UpdraftError::message(format!("UTF-8 conversion error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// updraft.toml not found
  NotFound { project_root: PathBuf },

  /// Variant has no configured destination URL
  NoUploadUrl { variant: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Create an updraft.toml with a [urls] table mapping build variants to upload URLs.".to_string())
      }
      ConfigError::NoUploadUrl { variant } => Some(format!(
        "Add an entry for '{}' under [urls] in updraft.toml. Please check for typos.",
        variant
      )),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { project_root } => {
        write!(
          f,
          "No updraft configuration found.\nExpected file: {}/updraft.toml",
          project_root.display()
        )
      }
      ConfigError::NoUploadUrl { variant } => {
        write!(f, "There was no url provided for build variant '{}'", variant)
      }
    }
  }
}

/// Artifact discovery errors
#[derive(Debug)]
pub enum ArtifactError {
  /// More than one candidate file in the output directory
  Ambiguous { directory: PathBuf, candidates: Vec<String> },

  /// Expected artifact absent at upload time
  Missing { directory: PathBuf, task_hint: String },
}

impl ArtifactError {
  fn help_message(&self) -> Option<String> {
    match self {
      ArtifactError::Ambiguous { .. } => {
        Some("Clean the output directory so that exactly one artifact remains.".to_string())
      }
      ArtifactError::Missing { task_hint, .. } => Some(format!("Make sure to run the {} task first.", task_hint)),
    }
  }
}

impl fmt::Display for ArtifactError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ArtifactError::Ambiguous { directory, candidates } => {
        write!(
          f,
          "More than one artifact exists in {}: {:?}",
          directory.display(),
          candidates
        )
      }
      ArtifactError::Missing { directory, .. } => {
        write!(f, "Could not find a build artifact in {}", directory.display())
      }
    }
  }
}

/// Errors reported by the remote upload service
#[derive(Debug)]
pub enum UploadError {
  /// The service reports the destination URL itself is invalid
  TargetNotFound { url: String },

  /// The service rejected the upload with an unrecognized response
  Rejected { url: String, body: String },
}

impl UploadError {
  fn help_message(&self) -> Option<String> {
    match self {
      UploadError::TargetNotFound { .. } => {
        Some("Recheck the upload URL in updraft.toml against your Updraft project settings.".to_string())
      }
      UploadError::Rejected { .. } => None,
    }
  }
}

impl fmt::Display for UploadError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      UploadError::TargetNotFound { url } => {
        write!(f, "Could not updraft to {}. Please recheck that.", url)
      }
      UploadError::Rejected { url, body } => {
        write!(f, "Upload to {} failed:\n{}", url, body)
      }
    }
  }
}

/// Result type alias for updraft
pub type UpdraftResult<T> = Result<T, UpdraftError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> UpdraftResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> UpdraftResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<UpdraftError>,
{
  fn context(self, ctx: impl Into<String>) -> UpdraftResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> UpdraftResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &UpdraftError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
