#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod replacer;
pub mod resolver;
pub mod rewrite;
pub mod transform;

pub use config::RevReplaceConfig;
pub use error::{RevReplaceError, RevReplaceResult};
pub use models::{
  CandidateFile, FileOutcome, RenameRecord, RenameSet, RewriteReport, SubstitutionPolicy,
};
pub use replacer::RevReplacer;
pub use transform::{FnTransform, IdentityTransform, RevTransform};
