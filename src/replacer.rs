//! Rewrite pass orchestrator invoked by the build pipeline.

use log::info;

use crate::error::RevReplaceResult;
use crate::manifest::load_manifest;
use crate::models::{CandidateFile, RenameSet, RewriteReport, SubstitutionPolicy};
use crate::rewrite::rewrite_files;
use crate::transform::{IdentityTransform, RevTransform};

/// High-level helper running `load -> sort -> rewrite` once per build pass.
///
/// No rename state is kept between passes; the manifest is read again on every call.
#[derive(Debug, Clone)]
pub struct RevReplacer<T = IdentityTransform> {
  policy: SubstitutionPolicy,
  transform: T,
}

impl RevReplacer {
  /// Create a replacer without transform hooks.
  pub fn new(policy: SubstitutionPolicy) -> Self {
    Self {
      policy,
      transform: IdentityTransform,
    }
  }
}

impl<T: RevTransform> RevReplacer<T> {
  /// Create a replacer applying `transform` to both sides of every substitution.
  pub fn with_transform(policy: SubstitutionPolicy, transform: T) -> Self {
    Self { policy, transform }
  }

  /// Run a pass over compiled files and pass-through assets.
  ///
  /// Both lists are treated alike once flattened, compiled files first.
  pub fn on_compile(
    &self,
    files: &[CandidateFile],
    assets: &[CandidateFile],
  ) -> RevReplaceResult<RewriteReport> {
    let candidates: Vec<CandidateFile> = files.iter().chain(assets).cloned().collect();
    self.run(&candidates)
  }

  /// Load the manifest and rewrite `candidates`.
  pub fn run(&self, candidates: &[CandidateFile]) -> RevReplaceResult<RewriteReport> {
    let renames = self.load_renames()?;
    self.rewrite_with(&renames, candidates)
  }

  /// Load and order the rename records for a pass.
  pub fn load_renames(&self) -> RevReplaceResult<RenameSet> {
    load_manifest(&self.policy.manifest, self.policy.canonical_uris)
  }

  /// Rewrite `candidates` with an already loaded rename set.
  pub fn rewrite_with(
    &self,
    renames: &RenameSet,
    candidates: &[CandidateFile],
  ) -> RevReplaceResult<RewriteReport> {
    info!(
      "rewriting {} candidates with {} renames",
      candidates.len(),
      renames.len()
    );
    rewrite_files(candidates, renames, &self.policy, &self.transform)
  }
}
