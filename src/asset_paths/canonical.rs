use std::path::{MAIN_SEPARATOR, Path};

/// Separator used by every manifest key and canonical path.
pub const CANONICAL_SEPARATOR: char = '/';

/// Canonicalise a path string using the separator of the current host.
///
/// When `enabled` is false, or the host already separates with `/`, the input is returned as is.
pub fn canonicalize_uri(path: &str, enabled: bool) -> String {
  canonicalize_with(path, MAIN_SEPARATOR, enabled)
}

/// Canonicalise a path string as if the host used `host_separator`.
pub fn canonicalize_with(path: &str, host_separator: char, enabled: bool) -> String {
  if enabled && host_separator != CANONICAL_SEPARATOR {
    path.replace(host_separator, "/")
  } else {
    path.to_string()
  }
}

/// Canonicalise a file system path, replacing non UTF-8 sequences lossily.
pub fn canonicalize_path(path: &Path, enabled: bool) -> String {
  canonicalize_uri(&path.to_string_lossy(), enabled)
}
