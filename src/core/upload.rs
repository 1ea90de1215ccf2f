//! Multipart upload to Updraft endpoints
//!
//! One PUT per destination URL, sequential, in configured order. The remote
//! answers with a small JSON body; classification of that body is the only
//! branching logic here. A "Not found." answer means the URL itself is wrong
//! and aborts the remaining destinations.

use crate::core::error::{UpdraftError, UpdraftResult, UploadError};
use reqwest::blocking::multipart::Form;
use reqwest::blocking::Client;
use serde_json::Value;
use std::path::Path;

/// Fixed marker sent with every upload
const BUILD_TYPE_MARKER: &str = "Gradle";

/// Metadata fields attached to an upload
///
/// Blank fields are omitted from the request entirely so the service can
/// distinguish "not provided" from "empty".
#[derive(Debug, Clone, Default)]
pub struct UploadMetadata {
  pub branch: String,
  pub remote_url: String,
  pub tags: String,
  pub commit: String,
  pub release_notes: String,
}

impl UploadMetadata {
  /// Optional form fields in wire order: (field name, value)
  fn fields(&self) -> [(&'static str, &str); 5] {
    [
      ("custom_branch", &self.branch),
      ("custom_URL", &self.remote_url),
      ("custom_tags", &self.tags),
      ("custom_commit", &self.commit),
      ("whats_new", &self.release_notes),
    ]
  }
}

/// Classified service response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResponse {
  /// `success == "ok"`, or an empty body (some deployments answer with none)
  Success { public_link: Option<String> },
  /// `detail == "Not found."` - the destination URL itself is invalid
  NotFound,
  /// Anything else; the raw body is kept for diagnosis
  Rejected { body: String },
}

/// Outcome of one successful upload
#[derive(Debug, Clone)]
pub struct UploadOutcome {
  pub url: String,
  pub public_link: Option<String>,
}

/// Classify a raw response body
///
/// Parsed once; the three-way branching on the parsed shape is explicit here
/// rather than probed field by field at the call site.
pub fn classify_response(body: &str) -> UploadResponse {
  let parsed: Value = match serde_json::from_str(body) {
    Ok(value) => value,
    Err(_) => {
      if body.trim().is_empty() {
        return UploadResponse::Success { public_link: None };
      }
      return UploadResponse::Rejected { body: body.to_string() };
    }
  };

  let Some(object) = parsed.as_object() else {
    if parsed.is_null() {
      return UploadResponse::Success { public_link: None };
    }
    return UploadResponse::Rejected { body: body.to_string() };
  };

  if object.is_empty() {
    return UploadResponse::Success { public_link: None };
  }

  if object.get("success").and_then(Value::as_str) == Some("ok") {
    let public_link = object.get("public_link").and_then(Value::as_str).map(String::from);
    return UploadResponse::Success { public_link };
  }

  if object.get("detail").and_then(Value::as_str) == Some("Not found.") {
    return UploadResponse::NotFound;
  }

  UploadResponse::Rejected { body: body.to_string() }
}

/// Multipart upload client
pub struct UploadClient {
  client: Client,
}

impl UploadClient {
  pub fn new() -> Self {
    Self { client: Client::new() }
  }

  /// Upload the artifact to every destination, in order
  ///
  /// Stops at the first fatal response; destinations after it are never
  /// attempted. Prints the outcome per destination as it completes and
  /// returns the outcomes of the completed ones.
  pub fn upload_all(
    &self,
    artifact: &Path,
    destination_urls: &[String],
    metadata: &UploadMetadata,
  ) -> UpdraftResult<Vec<UploadOutcome>> {
    let mut outcomes = Vec::with_capacity(destination_urls.len());

    for url in destination_urls {
      println!("\n⬆️  Uploading {} to {}", artifact.display(), url);

      let outcome = self.upload_one(artifact, url, metadata)?;
      println!("\n--------------------------------------");
      println!("Your App was successfully updrafted!");
      if let Some(link) = &outcome.public_link {
        println!("Get it here -> {}", link);
      }
      println!("--------------------------------------");

      outcomes.push(outcome);
    }

    Ok(outcomes)
  }

  /// Upload the artifact to a single destination
  fn upload_one(&self, artifact: &Path, url: &str, metadata: &UploadMetadata) -> UpdraftResult<UploadOutcome> {
    let mut form = Form::new().file("app", artifact)?.text("build_type", BUILD_TYPE_MARKER);

    for (name, value) in metadata.fields() {
      if !value.trim().is_empty() {
        form = form.text(name, value.to_string());
      }
    }

    let response = self.client.put(url).multipart(form).send()?;
    let body = response.text()?;

    match classify_response(&body) {
      UploadResponse::Success { public_link } => Ok(UploadOutcome {
        url: url.to_string(),
        public_link,
      }),
      UploadResponse::NotFound => Err(UpdraftError::Upload(UploadError::TargetNotFound {
        url: url.to_string(),
      })),
      UploadResponse::Rejected { body } => Err(UpdraftError::Upload(UploadError::Rejected {
        url: url.to_string(),
        body,
      })),
    }
  }
}

impl Default for UploadClient {
  fn default() -> Self {
    Self::new()
  }
}
