//! Ordering rename records and locating the file a candidate refers to on disk.

use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use log::debug;

use crate::asset_paths::canonicalize_path;
use crate::models::{RenameRecord, RenameSet, SubstitutionPolicy};

impl RenameSet {
  /// Order records by descending original length, keeping input order for ties.
  ///
  /// Substitution follows this order, so `js/app.js.map` is always consumed before `js/app.js`
  /// gets a chance to match inside it.
  pub fn from_records(mut records: Vec<RenameRecord>) -> Self {
    records.sort_by_key(|record| Reverse(record.original.len()));
    let by_original = records
      .iter()
      .enumerate()
      .map(|(index, record)| (record.original.clone(), index))
      .collect();

    Self {
      records,
      by_original,
    }
  }

  /// Records in substitution order.
  pub fn iter(&self) -> impl Iterator<Item = &RenameRecord> {
    self.records.iter()
  }

  /// Number of records.
  pub fn len(&self) -> usize {
    self.records.len()
  }

  /// Returns true when the manifest had no entries.
  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Exact lookup of the renamed path for a canonical original path.
  pub fn find_renamed(&self, original: &str) -> Option<&str> {
    self
      .by_original
      .get(original)
      .map(|&index| self.records[index].renamed.as_str())
  }
}

/// Resolve the file that should actually be rewritten for `candidate`.
///
/// A candidate that exists is returned unchanged. Otherwise the canonical candidate path has
/// `src_base_path` stripped to form a manifest key, and a match resolves to
/// `dest_base_path + renamed`. Candidates outside the source root or missing from the manifest
/// resolve to `None`.
pub fn resolve_real_path(
  candidate: &Path,
  renames: &RenameSet,
  policy: &SubstitutionPolicy,
) -> Option<PathBuf> {
  if candidate.exists() {
    return Some(candidate.to_path_buf());
  }

  let canonical = canonicalize_path(candidate, policy.canonical_uris);
  let Some(manifest_key) = canonical.strip_prefix(policy.src_base_path.as_str()) else {
    debug!(
      "{} is outside source root {:?}",
      candidate.display(),
      policy.src_base_path
    );
    return None;
  };

  match renames.find_renamed(manifest_key) {
    Some(renamed) => Some(PathBuf::from(format!("{}{}", policy.dest_base_path, renamed))),
    None => {
      debug!("no manifest entry for {manifest_key}");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  fn renames() -> RenameSet {
    RenameSet::from_records(vec![
      RenameRecord::new("js/app.js", "js/app-1.js"),
      RenameRecord::new("sample.css", "sample.a1be45.css"),
      RenameRecord::new("js/app.js.map", "js/app-12345.js.map"),
      RenameRecord::new("a.js", "a-1.js"),
      RenameRecord::new("b.js", "b-1.js"),
    ])
  }

  #[test]
  fn orders_longest_original_first() {
    let renames = renames();
    let originals: Vec<&str> = renames.iter().map(|record| record.original.as_str()).collect();
    assert_eq!(
      originals,
      vec!["js/app.js.map", "sample.css", "js/app.js", "a.js", "b.js"]
    );
  }

  #[test]
  fn finds_renamed_by_exact_original() {
    let renames = renames();
    assert_eq!(renames.find_renamed("js/app.js"), Some("js/app-1.js"));
    assert_eq!(renames.find_renamed("app.js"), None);
    assert_eq!(renames.len(), 5);
    assert!(RenameSet::default().is_empty());
  }

  #[test]
  fn existing_candidates_resolve_to_themselves() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.html");
    fs::write(&path, "<html></html>").unwrap();

    let resolved = resolve_real_path(&path, &renames(), &SubstitutionPolicy::default());
    assert_eq!(resolved, Some(path));
  }

  #[test]
  fn missing_candidates_resolve_through_split_roots() {
    let dir = tempdir().unwrap();
    let root = crate::asset_paths::canonicalize_path(dir.path(), true);
    let policy = SubstitutionPolicy {
      src_base_path: format!("{root}/public/"),
      dest_base_path: format!("{root}/dist/"),
      ..SubstitutionPolicy::default()
    };

    let candidate = dir.path().join("public").join("sample.css");
    let resolved = resolve_real_path(&candidate, &renames(), &policy);
    assert_eq!(
      resolved,
      Some(PathBuf::from(format!("{root}/dist/sample.a1be45.css")))
    );
  }

  #[test]
  fn unknown_or_foreign_candidates_do_not_resolve() {
    let dir = tempdir().unwrap();
    let root = crate::asset_paths::canonicalize_path(dir.path(), true);
    let policy = SubstitutionPolicy {
      src_base_path: format!("{root}/public/"),
      dest_base_path: format!("{root}/public/"),
      ..SubstitutionPolicy::default()
    };

    let unknown = dir.path().join("public").join("other.css");
    assert_eq!(resolve_real_path(&unknown, &renames(), &policy), None);

    let foreign = dir.path().join("elsewhere").join("sample.css");
    assert_eq!(resolve_real_path(&foreign, &renames(), &policy), None);
  }
}
