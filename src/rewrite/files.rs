//! Read/modify/write cycle for candidate output files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use same_file::is_same_file;

use crate::asset_paths::has_eligible_extension;
use crate::error::{RevReplaceError, RevReplaceResult};
use crate::models::{CandidateFile, FileOutcome, RenameSet, RewriteReport, SubstitutionPolicy};
use crate::resolver::resolve_real_path;
use crate::rewrite::content::rewrite_content;
use crate::transform::RevTransform;

/// Rewrite a single resolved file in place.
///
/// Returns `true` when the content changed and was written back.
pub fn rewrite_file<T: RevTransform>(
  real_path: &Path,
  renames: &RenameSet,
  policy: &SubstitutionPolicy,
  transform: &T,
) -> RevReplaceResult<bool> {
  let content = fs::read_to_string(real_path).map_err(|source| RevReplaceError::ReadFile {
    path: real_path.to_path_buf(),
    source,
  })?;

  let rewritten = rewrite_content(&content, renames, policy, transform);
  if rewritten == content {
    return Ok(false);
  }

  fs::write(real_path, rewritten).map_err(|source| RevReplaceError::WriteFile {
    path: real_path.to_path_buf(),
    source,
  })?;
  Ok(true)
}

/// Rewrite every eligible candidate, stopping at the first I/O failure.
pub fn rewrite_files<T: RevTransform>(
  files: &[CandidateFile],
  renames: &RenameSet,
  policy: &SubstitutionPolicy,
  transform: &T,
) -> RevReplaceResult<RewriteReport> {
  let mut report = RewriteReport::default();
  let mut visited = VisitedFiles::default();

  for file in files {
    let candidate = file.path();
    let outcome = if !has_eligible_extension(candidate, &policy.eligible_extensions) {
      debug!("skipping {}: extension not eligible", candidate.display());
      FileOutcome::SkippedExtension
    } else if let Some(real_path) = resolve_real_path(candidate, renames, policy) {
      if visited.contains(&real_path) {
        debug!("{} was already rewritten in this pass", real_path.display());
        FileOutcome::Duplicate { real_path }
      } else {
        let changed = rewrite_file(&real_path, renames, policy, transform)?;
        visited.insert(&real_path);
        if changed {
          debug!("rewrote {}", real_path.display());
          FileOutcome::Rewritten { real_path }
        } else {
          FileOutcome::Unchanged { real_path }
        }
      }
    } else {
      debug!("skipping {}: no file to rewrite", candidate.display());
      FileOutcome::Unresolved
    };

    report.entries.push((candidate.to_path_buf(), outcome));
  }

  info!(
    "rewrote {} of {} candidate files",
    report.rewritten().count(),
    files.len()
  );
  Ok(report)
}

/// Files already rewritten in a pass, keyed on their canonical location.
///
/// Paths that cannot be canonicalised are kept separately and compared with `is_same_file`.
#[derive(Debug, Default)]
struct VisitedFiles {
  canonical: HashSet<PathBuf>,
  uncanonical: Vec<PathBuf>,
}

impl VisitedFiles {
  fn contains(&self, real_path: &Path) -> bool {
    match fs::canonicalize(real_path) {
      Ok(canonical) => self.canonical.contains(&canonical),
      Err(_) => self
        .uncanonical
        .iter()
        .any(|seen| seen == real_path || is_same_file(seen, real_path).unwrap_or(false)),
    }
  }

  fn insert(&mut self, real_path: &Path) {
    match fs::canonicalize(real_path) {
      Ok(canonical) => {
        self.canonical.insert(canonical);
      }
      Err(_) => self.uncanonical.push(real_path.to_path_buf()),
    }
  }
}
