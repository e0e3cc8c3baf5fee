//! Error types for scope definitions and scope-set operations
//!
//! Construction problems surface as [`ConfigError`] and operation problems
//! as [`ScopeError`]. [`Error`] flattens both for callers that only want a
//! single error type.

use thiserror::Error;

/// Errors that can occur when building a [`ScopeDefinition`](crate::ScopeDefinition)
/// or constructing a scope manager from one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A scope name was declared twice.
    #[error("scope '{0}' is declared more than once")]
    DuplicateScope(String),

    /// Two scopes were mapped to the same slot, so their bits would collide.
    #[error("scopes '{first}' and '{second}' both use slot {slot}")]
    DuplicateSlot {
        slot: u32,
        first: String,
        second: String,
    },

    /// A slot does not fit in the packed integer type.
    #[error("slot {slot} for scope '{scope}' does not fit in a {bits}-bit flag set")]
    SlotOutOfRange { scope: String, slot: u32, bits: u32 },

    /// Scope names must be non-empty.
    #[error("scope names must not be empty")]
    EmptyScopeName,

    /// The definition could not be parsed from its configuration source.
    #[error("invalid scope definition: {0}")]
    Parse(String),
}

/// Errors returned by scope-set operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// The scope name is not part of the manager's alphabet.
    #[error("unknown scope '{scope}'")]
    UnknownScope { scope: String },

    /// A raw flag value carries bits that no declared scope maps to.
    #[error("flag value has bits outside the scope alphabet: {bits:#b}")]
    UnknownBits { bits: u128 },
}

impl ScopeError {
    pub(crate) fn unknown(scope: &str) -> Self {
        log::debug!("rejected unknown scope '{}'", scope);
        Self::UnknownScope {
            scope: scope.to_string(),
        }
    }
}

/// Top-level error type for scope operations
///
/// - [`Error::Config`] - Fix the scope definition
/// - [`Error::Scope`] - The caller referenced something outside the alphabet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid scope definition
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid scope reference during an operation
    #[error("scope error: {0}")]
    Scope(#[from] ScopeError),
}

impl Error {
    /// Returns true if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if an unknown scope name was referenced
    pub fn is_unknown_scope(&self) -> bool {
        matches!(self, Self::Scope(ScopeError::UnknownScope { .. }))
    }
}

/// Result type for scope operations
pub type Result<T> = std::result::Result<T, Error>;
