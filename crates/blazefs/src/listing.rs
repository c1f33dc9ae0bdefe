//! Directory-listing emulation over a flat key namespace
//!
//! B2 can only list a whole bucket, so directory listings are produced by
//! filtering every key against a scope derived from the `(directory,
//! recursive)` arguments. Filtering only removes keys; the store's listing
//! order is preserved.

/// The four listing scopes the generic interface can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListScope<'a> {
    /// Recursive listing from the root: every key matches.
    Everything,
    /// Recursive listing under a directory: `<dir>/` plus anything.
    Subtree(&'a str),
    /// Non-recursive listing at the root: keys with no separator.
    TopLevel,
    /// Non-recursive listing under a directory: `<dir>/` plus one
    /// separator-free component.
    Children(&'a str),
}

impl<'a> ListScope<'a> {
    /// Classify the listing arguments.
    ///
    /// `directory` must be a bare key prefix: no leading or trailing `/`.
    /// Anything else is a contract violation by the caller and panics
    /// rather than silently producing an empty listing.
    pub(crate) fn new(directory: &'a str, recursive: bool) -> Self {
        assert!(
            !directory.starts_with('/') && !directory.ends_with('/'),
            "listing directory must not carry leading or trailing separators: {directory:?}"
        );
        match (recursive, directory.is_empty()) {
            (true, true) => ListScope::Everything,
            (true, false) => ListScope::Subtree(directory),
            (false, true) => ListScope::TopLevel,
            (false, false) => ListScope::Children(directory),
        }
    }

    /// Whether `key` falls inside this scope.
    pub(crate) fn matches(&self, key: &str) -> bool {
        match self {
            ListScope::Everything => true,
            ListScope::Subtree(dir) => relative_to(dir, key).is_some(),
            ListScope::TopLevel => !key.contains('/'),
            ListScope::Children(dir) => {
                relative_to(dir, key).is_some_and(|rest| !rest.contains('/'))
            }
        }
    }
}

/// The part of `key` below `dir`, if `key` is strictly inside it.
///
/// `dir` itself and sibling keys that merely share `dir` as a string prefix
/// (`dir2/x` against `dir`) both yield `None`.
fn relative_to<'k>(dir: &str, key: &'k str) -> Option<&'k str> {
    key.strip_prefix(dir)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|rest| !rest.is_empty())
}
