//! Utility functions for variant naming
//!
//! Gradle derives variant names by camel-casing flavor and build type
//! ("staging" + "debug" -> "stagingDebug") and keys tasks and configuration
//! by the capitalized form ("StagingDebug").

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}

/// Variant name for a flavor + build type pair ("stagingDebug", "release")
pub fn variant_name(flavor: Option<&str>, build_type: &str) -> String {
  match flavor {
    Some(flavor) if !flavor.is_empty() => format!("{}{}", flavor, capitalize_first(build_type)),
    _ => build_type.to_string(),
  }
}
