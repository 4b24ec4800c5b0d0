//! Data structures shared by a single rewrite pass.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Mapping of one original asset path to its fingerprinted counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
  /// Canonical path as referenced by unrewritten output, e.g. `css/master.css`.
  pub original: String,
  /// Canonical path of the fingerprinted artifact, e.g. `css/master-364b42a1.css`.
  pub renamed: String,
}

impl RenameRecord {
  /// Create a record from already canonical paths.
  pub fn new(original: impl Into<String>, renamed: impl Into<String>) -> Self {
    Self {
      original: original.into(),
      renamed: renamed.into(),
    }
  }
}

/// Rename records ordered by descending original length.
///
/// Built once per pass by [`RenameSet::from_records`] and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct RenameSet {
  pub(crate) records: Vec<RenameRecord>,
  pub(crate) by_original: HashMap<String, usize>,
}

/// Output file handed over by the build pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateFile {
  /// File produced by compilation.
  Compiled {
    /// Output path of the compiled file.
    path: PathBuf,
  },
  /// Asset copied through unchanged by the pipeline.
  Asset {
    /// Destination path of the copied asset.
    destination_path: PathBuf,
  },
}

impl CandidateFile {
  /// Describe a compiled output file.
  pub fn compiled(path: impl Into<PathBuf>) -> Self {
    Self::Compiled { path: path.into() }
  }

  /// Describe a pass-through asset by its destination path.
  pub fn asset(destination_path: impl Into<PathBuf>) -> Self {
    Self::Asset {
      destination_path: destination_path.into(),
    }
  }

  /// Path used for extension filtering and resolution.
  pub fn path(&self) -> &Path {
    match self {
      Self::Compiled { path } => path,
      Self::Asset { destination_path } => destination_path,
    }
  }
}

/// Substitution rules applied during a pass.
///
/// Usually derived from [`crate::config::RevReplaceConfig::to_policy`]. Base paths are stored
/// in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionPolicy {
  /// Extensions, with leading dot, whose files are rewritten.
  pub eligible_extensions: BTreeSet<String>,
  /// Prefix prepended to every substituted reference.
  pub prefix: String,
  /// Whether host separators are converted to `/`.
  pub canonical_uris: bool,
  /// Location of the manifest file.
  pub manifest: PathBuf,
  /// Canonical prefix stripped from candidates that do not exist on disk.
  pub src_base_path: String,
  /// Canonical prefix joined with a renamed path to locate the fingerprinted file.
  pub dest_base_path: String,
}

impl Default for SubstitutionPolicy {
  fn default() -> Self {
    Self {
      eligible_extensions: [".js", ".css", ".html"]
        .into_iter()
        .map(String::from)
        .collect(),
      prefix: String::new(),
      canonical_uris: true,
      manifest: PathBuf::from(crate::config::DEFAULT_MANIFEST_FILE),
      src_base_path: String::new(),
      dest_base_path: String::new(),
    }
  }
}

/// What happened to a single candidate during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
  /// The file content changed and was written back.
  Rewritten {
    /// Path that was rewritten.
    real_path: PathBuf,
  },
  /// The file was read but no substitution applied.
  Unchanged {
    /// Path that was inspected.
    real_path: PathBuf,
  },
  /// The extension is not configured for rewriting.
  SkippedExtension,
  /// Neither the candidate nor a renamed counterpart exists.
  Unresolved,
  /// Another candidate in the same pass already resolved to this file.
  Duplicate {
    /// Path shared with the earlier candidate.
    real_path: PathBuf,
  },
}

/// Per-candidate outcome of a rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
  /// Candidate path paired with its outcome, in input order.
  pub entries: Vec<(PathBuf, FileOutcome)>,
}

impl RewriteReport {
  /// Real paths of files whose content was rewritten.
  pub fn rewritten(&self) -> impl Iterator<Item = &Path> {
    self.entries.iter().filter_map(|(_, outcome)| match outcome {
      FileOutcome::Rewritten { real_path } => Some(real_path.as_path()),
      _ => None,
    })
  }

  /// Outcome recorded for a candidate path.
  pub fn outcome(&self, candidate: &Path) -> Option<&FileOutcome> {
    self
      .entries
      .iter()
      .find(|(path, _)| path == candidate)
      .map(|(_, outcome)| outcome)
  }
}
