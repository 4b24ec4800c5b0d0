//! Error types raised while rewriting fingerprinted asset references.
//!
//! Every variant is fatal to the current pass. Candidates that simply do not resolve to a file
//! are not errors and are reported through [`crate::models::FileOutcome`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type RevReplaceResult<T> = Result<T, RevReplaceError>;

/// Errors that abort a rewrite pass.
#[derive(Debug, Error)]
pub enum RevReplaceError {
  /// The manifest file does not exist.
  #[error("manifest not found at {}", path.display())]
  ManifestNotFound {
    /// Path where the manifest was expected.
    path: PathBuf,
  },

  /// The manifest exists but could not be read.
  #[error("failed to read manifest {}: {source}", path.display())]
  ManifestRead {
    /// Manifest path.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },

  /// The manifest is not a flat JSON object of string values.
  #[error("failed to parse manifest {}: {source}", path.display())]
  ManifestParse {
    /// Manifest path.
    path: PathBuf,
    /// Underlying JSON error.
    source: serde_json::Error,
  },

  /// A resolved output file could not be read.
  #[error("failed to read {}: {source}", path.display())]
  ReadFile {
    /// Resolved path of the file.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },

  /// A rewritten output file could not be written back.
  #[error("failed to write {}: {source}", path.display())]
  WriteFile {
    /// Resolved path of the file.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },
}

impl RevReplaceError {
  /// Path of the file involved in the failure.
  pub fn path(&self) -> &std::path::Path {
    match self {
      Self::ManifestNotFound { path }
      | Self::ManifestRead { path, .. }
      | Self::ManifestParse { path, .. }
      | Self::ReadFile { path, .. }
      | Self::WriteFile { path, .. } => path,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_include_the_offending_path() {
    let error = RevReplaceError::ManifestNotFound {
      path: PathBuf::from("public/assets.json"),
    };
    assert_eq!(error.to_string(), "manifest not found at public/assets.json");
    assert_eq!(error.path(), std::path::Path::new("public/assets.json"));
  }

  #[test]
  fn io_variants_expose_their_source() {
    use std::error::Error as _;

    let error = RevReplaceError::WriteFile {
      path: PathBuf::from("out/app.css"),
      source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(error.to_string().starts_with("failed to write out/app.css"));
    assert!(error.source().is_some());
  }
}
