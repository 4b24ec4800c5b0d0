//! Configuration loader describing how references are rewritten.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::asset_paths::{canonicalize_uri, normalise_extension};
use crate::models::SubstitutionPolicy;

/// Configuration file searched for by [`RevReplaceConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "rev-replace.config.json";

/// Manifest file name used when none is configured.
pub const DEFAULT_MANIFEST_FILE: &str = "assets.json";

/// User facing configuration. Keys are camelCase in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevReplaceConfig {
  /// Convert host path separators to `/` before comparing paths.
  pub canonical_uris: bool,
  /// Prefix prepended to every substituted reference, e.g. a CDN origin.
  pub prefix: String,
  /// Extensions of files whose content is rewritten.
  pub replace_in_extensions: Vec<String>,
  /// Explicit manifest location.
  pub manifest: Option<PathBuf>,
  /// Public output directory; the manifest defaults to `<publicPath>/assets.json` when set.
  pub public_path: Option<PathBuf>,
  /// Source root stripped from candidates that no longer exist.
  pub src_base_path: String,
  /// Destination root holding the fingerprinted files.
  pub dest_base_path: String,
}

impl Default for RevReplaceConfig {
  fn default() -> Self {
    Self {
      canonical_uris: true,
      prefix: String::new(),
      replace_in_extensions: vec![".js".into(), ".css".into(), ".html".into()],
      manifest: None,
      public_path: None,
      src_base_path: String::new(),
      dest_base_path: String::new(),
    }
  }
}

impl RevReplaceConfig {
  /// Load configuration from `dir`, falling back to defaults.
  ///
  /// A missing or malformed file is not an error here; use [`Self::from_path`] when the file
  /// is required.
  pub fn discover(dir: &Path) -> Self {
    Self::from_path(&dir.join(DEFAULT_CONFIG_FILE)).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&content)
      .with_context(|| format!("failed to parse config {}", path.display()))
  }

  /// Manifest path after applying the `publicPath` fallback.
  pub fn manifest_path(&self) -> PathBuf {
    match (&self.manifest, &self.public_path) {
      (Some(manifest), _) => manifest.clone(),
      (None, Some(public)) => public.join(DEFAULT_MANIFEST_FILE),
      (None, None) => PathBuf::from(DEFAULT_MANIFEST_FILE),
    }
  }

  /// Derive the substitution policy used by a rewrite pass.
  pub fn to_policy(&self) -> SubstitutionPolicy {
    SubstitutionPolicy {
      eligible_extensions: self
        .replace_in_extensions
        .iter()
        .map(|extension| normalise_extension(extension))
        .collect(),
      prefix: self.prefix.clone(),
      canonical_uris: self.canonical_uris,
      manifest: self.manifest_path(),
      src_base_path: canonicalize_uri(&self.src_base_path, self.canonical_uris),
      dest_base_path: canonicalize_uri(&self.dest_base_path, self.canonical_uris),
    }
  }
}
