//! Helpers for normalising asset paths and deciding which outputs are rewritten.
//!
//! Canonicalisation and extension filtering live in separate submodules so the separator
//! handling can be tested against foreign hosts without touching the file system.

mod canonical;
mod filters;

pub use canonical::{CANONICAL_SEPARATOR, canonicalize_path, canonicalize_uri, canonicalize_with};
pub use filters::{has_eligible_extension, normalise_extension};
