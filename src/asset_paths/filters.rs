use std::collections::BTreeSet;
use std::path::Path;

/// Normalise a configured extension so that `css` and `.css` compare equal.
pub fn normalise_extension(value: &str) -> String {
  let trimmed = value.trim();
  if trimmed.starts_with('.') {
    trimmed.to_string()
  } else {
    format!(".{trimmed}")
  }
}

/// Determine whether a candidate file's extension is configured for rewriting.
///
/// The extension is taken from the final component only, with its leading dot, so
/// `bundle.min.js` matches `.js` and a dotfile such as `.htaccess` has no extension at all.
pub fn has_eligible_extension(path: &Path, eligible: &BTreeSet<String>) -> bool {
  path
    .extension()
    .map(|extension| format!(".{}", extension.to_string_lossy()))
    .is_some_and(|extension| eligible.contains(&extension))
}
