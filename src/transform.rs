//! Hooks adjusting the search and replacement strings of each rename record.

/// Strategy applied to both sides of every substitution.
///
/// `modify_unreved` receives the canonical original path and returns the text searched for.
/// `modify_reved` receives the prefixed renamed path and returns the replacement. Both default
/// to the identity.
pub trait RevTransform {
  /// Adjust the text searched for in file content.
  fn modify_unreved(&self, original: &str) -> String {
    original.to_string()
  }

  /// Adjust the text substituted into file content.
  fn modify_reved(&self, renamed: &str) -> String {
    renamed.to_string()
  }
}

/// Transform leaving both sides untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl RevTransform for IdentityTransform {}

/// Transform built from a pair of closures.
pub struct FnTransform<U, R> {
  unreved: U,
  reved: R,
}

impl<U, R> FnTransform<U, R>
where
  U: Fn(&str) -> String,
  R: Fn(&str) -> String,
{
  /// Wrap closures for the search and replacement side.
  pub fn new(unreved: U, reved: R) -> Self {
    Self { unreved, reved }
  }
}

impl<U, R> RevTransform for FnTransform<U, R>
where
  U: Fn(&str) -> String,
  R: Fn(&str) -> String,
{
  fn modify_unreved(&self, original: &str) -> String {
    (self.unreved)(original)
  }

  fn modify_reved(&self, renamed: &str) -> String {
    (self.reved)(renamed)
  }
}

impl<T: RevTransform + ?Sized> RevTransform for &T {
  fn modify_unreved(&self, original: &str) -> String {
    (**self).modify_unreved(original)
  }

  fn modify_reved(&self, renamed: &str) -> String {
    (**self).modify_reved(renamed)
  }
}
