//! The operation set shared by every scope-set encoding.

use crate::definition::ScopeDefinition;
use crate::error::ScopeError;
use crate::grant::GrantMap;

/// Uniform operations over an encoded set of granted scopes.
///
/// Implementations differ only in how [`Value`](ScopeEncoding::Value) stores
/// the granted scopes; for the same [`ScopeDefinition`] and the same sequence
/// of operations, every implementation answers [`can`](ScopeEncoding::can)
/// identically.
///
/// Values are never modified in place. `allow`, `deny`, `create` and `edit`
/// return a new value and leave their input untouched.
///
/// Every operation rejects a scope name outside the definition with
/// [`ScopeError::UnknownScope`], including names that appear as keys of a
/// [`GrantMap`] regardless of whether they map to `true` or `false`.
pub trait ScopeEncoding {
    /// Encoded representation of the granted scopes.
    type Value: Clone;

    /// The alphabet this encoding was built from.
    fn definition(&self) -> &ScopeDefinition;

    /// A value with nothing granted.
    fn empty(&self) -> Self::Value;

    /// Returns true if `scope` is granted in `input`.
    fn can(&self, scope: &str, input: &Self::Value) -> Result<bool, ScopeError>;

    /// Returns `input` with `scope` granted.
    fn allow(&self, input: &Self::Value, scope: &str) -> Result<Self::Value, ScopeError>;

    /// Returns `input` with `scope` revoked.
    fn deny(&self, input: &Self::Value, scope: &str) -> Result<Self::Value, ScopeError>;

    /// Builds a value granting exactly the scopes mapped to `true`.
    fn create(&self, grants: &GrantMap) -> Result<Self::Value, ScopeError> {
        grants
            .iter()
            .try_fold(self.empty(), |acc, (scope, granted)| {
                if granted {
                    self.allow(&acc, scope)
                } else {
                    self.definition().require(scope).map(|_| acc)
                }
            })
    }

    /// Applies a batch of grants and revocations to `input`.
    ///
    /// Entries are applied in name order. If any entry names an unknown
    /// scope the whole edit fails and no partial result is returned.
    fn edit(&self, input: &Self::Value, changes: &GrantMap) -> Result<Self::Value, ScopeError> {
        log::trace!("applying {} scope change(s)", changes.len());
        changes
            .iter()
            .try_fold(input.clone(), |acc, (scope, granted)| {
                if granted {
                    self.allow(&acc, scope)
                } else {
                    self.deny(&acc, scope)
                }
            })
    }

    /// Names of the granted scopes, in slot order.
    fn granted(&self, input: &Self::Value) -> Vec<&str> {
        self.definition()
            .names()
            .filter(|scope| matches!(self.can(scope, input), Ok(true)))
            .collect()
    }
}

/// Re-encode a value from one encoding into another.
///
/// Every scope granted in `value` is granted in the result. Fails with
/// [`ScopeError::UnknownScope`] if `to` doesn't declare one of them.
///
/// # Example
///
/// ```rust
/// use scopes_core::{convert, DynamicScope, FlagScope, GrantMap, ScopeDefinition, ScopeEncoding};
///
/// let definition = ScopeDefinition::from_slots([("read", 0), ("write", 1)]).unwrap();
/// let flags: FlagScope = FlagScope::new(definition.clone()).unwrap();
/// let names = DynamicScope::new(definition);
///
/// let packed = flags.create(&GrantMap::new().allow("write")).unwrap();
/// let set = convert(&flags, &names, &packed).unwrap();
/// assert!(names.can("write", &set).unwrap());
/// assert_eq!(convert(&names, &flags, &set).unwrap(), packed);
/// ```
pub fn convert<F, T>(from: &F, to: &T, value: &F::Value) -> Result<T::Value, ScopeError>
where
    F: ScopeEncoding,
    T: ScopeEncoding,
{
    from.granted(value)
        .into_iter()
        .try_fold(to.empty(), |acc, scope| to.allow(&acc, scope))
}
