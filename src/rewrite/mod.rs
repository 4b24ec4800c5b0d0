//! Substituting fingerprinted paths into output files.
//!
//! [`content`] holds the pure string substitution so it can be tested without a file system,
//! while [`files`] drives resolution and the read/modify/write cycle for each candidate.

pub mod content;
pub mod files;

pub use content::rewrite_content;
pub use files::{rewrite_file, rewrite_files};
