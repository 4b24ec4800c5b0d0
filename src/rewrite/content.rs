//! Literal substring substitution of rename records.

use log::debug;

use crate::models::{RenameSet, SubstitutionPolicy};
use crate::transform::RevTransform;

/// Apply every rename record to `content`, in set order.
///
/// Each record replaces all non-overlapping occurrences of
/// `modify_unreved(original)` with `modify_reved(prefix + renamed)`. With a non-empty prefix,
/// every `/` + prefix is then turned into prefix + `/`, which moves the slash of a rooted
/// reference such as `/css/a.css` behind the prefix. This runs after each record.
pub fn rewrite_content<T: RevTransform>(
  content: &str,
  renames: &RenameSet,
  policy: &SubstitutionPolicy,
  transform: &T,
) -> String {
  let mut text = content.to_string();
  let prefix = policy.prefix.as_str();
  let doubled_prefix = format!("/{prefix}");
  let repaired_prefix = format!("{prefix}/");

  for record in renames.iter() {
    let from = transform.modify_unreved(&record.original);
    if from.is_empty() {
      debug!("skipping {} with empty search text", record.original);
      continue;
    }
    let to = transform.modify_reved(&format!("{prefix}{}", record.renamed));

    if text.contains(from.as_str()) {
      text = text.replace(from.as_str(), &to);
    }
    if !prefix.is_empty() && text.contains(doubled_prefix.as_str()) {
      text = text.replace(doubled_prefix.as_str(), &repaired_prefix);
    }
  }

  text
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::RenameRecord;
  use crate::transform::{FnTransform, IdentityTransform};

  fn renames() -> RenameSet {
    RenameSet::from_records(vec![
      RenameRecord::new("css/master.css", "css/master-364b42a1.css"),
      RenameRecord::new("js/master.js", "js/master-cb70c02b.js"),
      RenameRecord::new("ajs/master.js", "ajs/master-cb60c02b.js"),
      RenameRecord::new("img/troll.png", "img/troll-5f2d5cbe.png"),
      RenameRecord::new("js/app.js", "js/app-1.js"),
      RenameRecord::new("js/app.js.map", "js/app-12345.js.map"),
    ])
  }

  fn with_prefix(prefix: &str) -> SubstitutionPolicy {
    SubstitutionPolicy {
      prefix: prefix.into(),
      ..SubstitutionPolicy::default()
    }
  }

  #[test]
  fn rewrites_markup_references() {
    let html = r#"<link href="/css/master.css"/><img src="/img/troll.png"/>"#;
    let rewritten = rewrite_content(html, &renames(), &SubstitutionPolicy::default(), &IdentityTransform);
    assert_eq!(
      rewritten,
      r#"<link href="/css/master-364b42a1.css"/><img src="/img/troll-5f2d5cbe.png"/>"#
    );
  }

  #[test]
  fn rewrites_every_repeated_reference() {
    let html = r#"<img src="/img/troll.png"/><img src="/img/troll.png"/>"#;
    let rewritten = rewrite_content(html, &renames(), &SubstitutionPolicy::default(), &IdentityTransform);
    assert_eq!(
      rewritten,
      r#"<img src="/img/troll-5f2d5cbe.png"/><img src="/img/troll-5f2d5cbe.png"/>"#
    );
  }

  #[test]
  fn longer_originals_win_over_contained_shorter_ones() {
    let js = "//# sourceMappingURL=/js/app.js.map\nimport '/js/app.js';\nload('/ajs/master.js');";
    let rewritten = rewrite_content(js, &renames(), &SubstitutionPolicy::default(), &IdentityTransform);
    assert_eq!(
      rewritten,
      "//# sourceMappingURL=/js/app-12345.js.map\nimport '/js/app-1.js';\nload('/ajs/master-cb60c02b.js');"
    );
  }

  #[test]
  fn prefix_is_injected_ahead_of_rooted_references() {
    let css = "body { background: url(/img/troll.png); }";
    let rewritten = rewrite_content(css, &renames(), &with_prefix("http://example.com"), &IdentityTransform);
    assert_eq!(
      rewritten,
      "body { background: url(http://example.com/img/troll-5f2d5cbe.png); }"
    );
    assert!(!rewritten.contains("/http://example.com"));
  }

  #[test]
  fn prefixed_markup_matches_expected_output() {
    let html = r#"<link href="/css/master.css"/><script src="/ajs/master.js"></script>"#;
    let rewritten = rewrite_content(html, &renames(), &with_prefix("http://example.com"), &IdentityTransform);
    assert_eq!(
      rewritten,
      r#"<link href="http://example.com/css/master-364b42a1.css"/><script src="http://example.com/ajs/master-cb60c02b.js"></script>"#
    );
  }

  #[test]
  fn transforms_apply_to_both_sides() {
    let strip_js = |value: &str| {
      if value.contains(".map") {
        value.replacen("js/", "", 1)
      } else {
        value.to_string()
      }
    };
    let transform = FnTransform::new(strip_js, strip_js);
    let js = r#"console.log("Hello world"); //# sourceMappingURL=app.js.map"#;

    let rewritten = rewrite_content(js, &renames(), &SubstitutionPolicy::default(), &transform);
    assert_eq!(
      rewritten,
      r#"console.log("Hello world"); //# sourceMappingURL=app-12345.js.map"#
    );
  }

  #[test]
  fn empty_search_text_is_ignored() {
    let transform = FnTransform::new(|_: &str| String::new(), |value: &str| value.to_string());
    let text = "unchanged";
    assert_eq!(
      rewrite_content(text, &renames(), &SubstitutionPolicy::default(), &transform),
      text
    );
  }

  #[test]
  fn rewriting_again_finds_no_originals() {
    let html = r#"<link href="/css/master.css"/><img src="/img/troll.png"/>"#;
    let policy = SubstitutionPolicy::default();
    let once = rewrite_content(html, &renames(), &policy, &IdentityTransform);
    let twice = rewrite_content(&once, &renames(), &policy, &IdentityTransform);
    assert_eq!(once, twice);
  }
}
