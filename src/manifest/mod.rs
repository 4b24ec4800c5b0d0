//! Loading the rename manifest written by the fingerprinting step.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};

use crate::asset_paths::canonicalize_uri;
use crate::error::{RevReplaceError, RevReplaceResult};
use crate::models::{RenameRecord, RenameSet};

/// Raw manifest contents: original path to fingerprinted path.
pub type RawManifest = BTreeMap<String, String>;

/// Parse manifest JSON into its raw mapping.
///
/// The document must be a flat object whose values are all strings.
pub fn parse_manifest(content: &str) -> Result<RawManifest, serde_json::Error> {
  serde_json::from_str(content)
}

/// Convert a raw manifest into rename records with canonical paths on both sides.
pub fn records_from_manifest(manifest: RawManifest, canonical_uris: bool) -> Vec<RenameRecord> {
  manifest
    .into_iter()
    .map(|(original, renamed)| {
      RenameRecord::new(
        canonicalize_uri(&original, canonical_uris),
        canonicalize_uri(&renamed, canonical_uris),
      )
    })
    .collect()
}

/// Load the manifest at `path` and build the ordered rename set for a pass.
pub fn load_manifest(path: &Path, canonical_uris: bool) -> RevReplaceResult<RenameSet> {
  let content = fs::read_to_string(path).map_err(|source| {
    if source.kind() == ErrorKind::NotFound {
      RevReplaceError::ManifestNotFound {
        path: path.to_path_buf(),
      }
    } else {
      RevReplaceError::ManifestRead {
        path: path.to_path_buf(),
        source,
      }
    }
  })?;

  let manifest = parse_manifest(&content).map_err(|source| RevReplaceError::ManifestParse {
    path: path.to_path_buf(),
    source,
  })?;
  debug!("parsed {} manifest entries from {}", manifest.len(), path.display());

  let renames = RenameSet::from_records(records_from_manifest(manifest, canonical_uris));
  info!("loaded {} renames from {}", renames.len(), path.display());
  Ok(renames)
}
