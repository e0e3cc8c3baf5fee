//! Explicit name-set encoding.
//!
//! Granted scopes are kept as a collection of names. Values are larger than
//! the packed form but readable as-is and not limited by an integer width.

use crate::definition::ScopeDefinition;
use crate::encoding::ScopeEncoding;
use crate::error::ScopeError;
use std::collections::BTreeSet;
use std::fmt;

/// The set of scope names granted in a [`DynamicScope`] value.
///
/// Only a [`DynamicScope`] can add names, so every name in the set belongs
/// to the alphabet of the manager that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GrantedScopes {
    names: BTreeSet<String>,
}

impl GrantedScopes {
    /// Check whether a name is in the set
    pub fn contains(&self, scope: &str) -> bool {
        self.names.contains(scope)
    }

    /// Number of granted scopes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing is granted
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Granted names
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for GrantedScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(","))
    }
}

/// Scope sets stored as explicit collections of names.
///
/// # Example
///
/// ```rust
/// use scopes_core::{DynamicScope, GrantMap, ScopeDefinition, ScopeEncoding};
///
/// let definition = ScopeDefinition::from_slots([("read", 0), ("write", 1)]).unwrap();
/// let scopes = DynamicScope::new(definition);
///
/// let token = scopes.create(&GrantMap::new().allow("read")).unwrap();
/// let token = scopes.allow(&token, "write").unwrap();
/// assert_eq!(token.to_string(), "read,write");
/// ```
#[derive(Debug, Clone)]
pub struct DynamicScope {
    definition: ScopeDefinition,
}

impl DynamicScope {
    /// Create a name-set encoding for a definition.
    ///
    /// Slots are not interpreted, so any valid definition is accepted.
    pub fn new(definition: ScopeDefinition) -> Self {
        log::debug!("dynamic scope ready: {} scope(s)", definition.len());
        Self { definition }
    }

    /// Build a value from a list of granted names, e.g. decoded from a
    /// credential.
    pub fn from_names<I, S>(&self, names: I) -> Result<GrantedScopes, ScopeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(self.empty(), |acc, scope| self.allow(&acc, scope.as_ref()))
    }
}

impl ScopeEncoding for DynamicScope {
    type Value = GrantedScopes;

    fn definition(&self) -> &ScopeDefinition {
        &self.definition
    }

    fn empty(&self) -> GrantedScopes {
        GrantedScopes::default()
    }

    fn can(&self, scope: &str, input: &GrantedScopes) -> Result<bool, ScopeError> {
        self.definition.require(scope)?;
        Ok(input.contains(scope))
    }

    fn allow(&self, input: &GrantedScopes, scope: &str) -> Result<GrantedScopes, ScopeError> {
        self.definition.require(scope)?;
        let mut next = input.clone();
        next.names.insert(scope.to_string());
        Ok(next)
    }

    fn deny(&self, input: &GrantedScopes, scope: &str) -> Result<GrantedScopes, ScopeError> {
        self.definition.require(scope)?;
        let mut next = input.clone();
        next.names.remove(scope);
        Ok(next)
    }
}
