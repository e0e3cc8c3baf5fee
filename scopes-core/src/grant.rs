//! Partial grant maps used by `create` and `edit`.

use std::collections::BTreeMap;

/// A partial mapping from scope name to grant (`true`) or revoke (`false`).
///
/// Each scope appears at most once; setting it again replaces the earlier
/// entry. Entries iterate in name order, so folding a map over a value is
/// deterministic.
///
/// # Example
///
/// ```rust
/// use scopes_core::GrantMap;
///
/// let changes = GrantMap::new().allow("delete").deny("write");
/// assert_eq!(changes.get("delete"), Some(true));
/// assert_eq!(changes.get("write"), Some(false));
/// assert_eq!(changes.get("admin"), None);
///
/// let same: GrantMap = [("delete", true), ("write", false)].into();
/// assert_eq!(changes, same);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantMap {
    entries: BTreeMap<String, bool>,
}

impl GrantMap {
    /// Create an empty grant map
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a scope as granted
    pub fn allow(self, scope: impl Into<String>) -> Self {
        self.set(scope, true)
    }

    /// Mark a scope as revoked
    pub fn deny(self, scope: impl Into<String>) -> Self {
        self.set(scope, false)
    }

    /// Set the desired state of a scope
    pub fn set(mut self, scope: impl Into<String>, granted: bool) -> Self {
        self.entries.insert(scope.into(), granted);
        self
    }

    /// Desired state of a scope, or `None` if the map doesn't mention it
    pub fn get(&self, scope: &str) -> Option<bool> {
        self.entries.get(scope).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.entries
            .iter()
            .map(|(scope, granted)| (scope.as_str(), *granted))
    }

    /// Scopes mapped to `true`
    pub fn granted(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .filter(|(_, granted)| *granted)
            .map(|(scope, _)| scope)
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for GrantMap {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(scope, granted)| (scope.into(), granted))
                .collect(),
        }
    }
}

impl<S: Into<String>, const N: usize> From<[(S, bool); N]> for GrantMap {
    fn from(entries: [(S, bool); N]) -> Self {
        entries.into_iter().collect()
    }
}
