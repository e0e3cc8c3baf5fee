//! Scope alphabet and slot assignments.
//!
//! A [`ScopeDefinition`] maps each scope name to the slot index it occupies
//! in the packed encoding. It is validated once, when it is built, and is
//! immutable afterwards.

use crate::error::{ConfigError, ScopeError};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The fixed set of scope names a manager recognizes, with their slots.
///
/// Names are unique, non-empty, and every slot is used by exactly one name.
/// Iteration yields scopes in ascending slot order.
///
/// # Example
///
/// ```rust
/// use scopes_core::ScopeDefinition;
///
/// let definition = ScopeDefinition::builder()
///     .scope("read", 0)
///     .scope("write", 1)
///     .build()
///     .unwrap();
///
/// assert_eq!(definition.slot("write"), Some(1));
/// assert!(!definition.contains("admin"));
///
/// // Or from configuration
/// let definition = ScopeDefinition::from_json(r#"{"read": 0, "write": 1}"#).unwrap();
/// assert_eq!(definition.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "BTreeMap<String, u32>")]
pub struct ScopeDefinition {
    /// Sorted by slot.
    entries: Vec<(String, u32)>,
    slots: HashMap<String, u32>,
}

impl ScopeDefinition {
    /// Create a builder for constructing a definition
    pub fn builder() -> ScopeDefinitionBuilder {
        ScopeDefinitionBuilder::default()
    }

    /// Build a definition from `(name, slot)` pairs.
    pub fn from_slots<I, S>(slots: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        slots
            .into_iter()
            .fold(Self::builder(), |builder, (name, slot)| {
                builder.scope(name, slot)
            })
            .build()
    }

    /// Parse a definition from a JSON object of scope name to slot.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Number of scopes in the alphabet
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no scopes are declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slot assigned to a scope, if it is part of the alphabet
    pub fn slot(&self, scope: &str) -> Option<u32> {
        self.slots.get(scope).copied()
    }

    /// Check whether a scope is part of the alphabet
    pub fn contains(&self, scope: &str) -> bool {
        self.slots.contains_key(scope)
    }

    /// Highest slot in use
    pub fn max_slot(&self) -> Option<u32> {
        self.entries.last().map(|(_, slot)| *slot)
    }

    /// Scope names in slot order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, slot)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(name, slot)| (name.as_str(), *slot))
    }

    pub(crate) fn require(&self, scope: &str) -> Result<u32, ScopeError> {
        self.slot(scope).ok_or_else(|| ScopeError::unknown(scope))
    }
}

// Entries are read one by one so a repeated key reaches the builder's
// duplicate check instead of overwriting the earlier slot.
impl<'de> Deserialize<'de> for ScopeDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DefinitionVisitor;

        impl<'de> Visitor<'de> for DefinitionVisitor {
            type Value = ScopeDefinition;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of scope name to slot index")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut builder = ScopeDefinition::builder();
                while let Some((name, slot)) = map.next_entry::<String, u32>()? {
                    builder = builder.scope(name, slot);
                }
                builder.build().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(DefinitionVisitor)
    }
}

impl From<ScopeDefinition> for BTreeMap<String, u32> {
    fn from(definition: ScopeDefinition) -> Self {
        definition.entries.into_iter().collect()
    }
}

/// Builder for ScopeDefinition
#[derive(Debug, Clone, Default)]
pub struct ScopeDefinitionBuilder {
    entries: Vec<(String, u32)>,
}

impl ScopeDefinitionBuilder {
    /// Declare a scope at the given slot
    pub fn scope(mut self, name: impl Into<String>, slot: u32) -> Self {
        self.entries.push((name.into(), slot));
        self
    }

    /// Build the definition.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyScopeName`], [`ConfigError::DuplicateScope`]
    /// or [`ConfigError::DuplicateSlot`] when the declarations are ambiguous.
    pub fn build(self) -> Result<ScopeDefinition, ConfigError> {
        let mut slots = HashMap::with_capacity(self.entries.len());
        let mut owners: HashMap<u32, &str> = HashMap::with_capacity(self.entries.len());

        for (name, slot) in &self.entries {
            if name.is_empty() {
                return Err(ConfigError::EmptyScopeName);
            }
            if slots.insert(name.clone(), *slot).is_some() {
                return Err(ConfigError::DuplicateScope(name.clone()));
            }
            if let Some(first) = owners.insert(*slot, name) {
                return Err(ConfigError::DuplicateSlot {
                    slot: *slot,
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
        }

        let mut entries = self.entries;
        entries.sort_by_key(|(_, slot)| *slot);

        log::debug!(
            "scope definition built: [{}]",
            entries
                .iter()
                .map(|(name, slot)| format!("{}={}", name, slot))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(ScopeDefinition { entries, slots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_orders_by_slot() {
        let definition = ScopeDefinition::builder()
            .scope("admin", 3)
            .scope("read", 0)
            .scope("delete", 2)
            .scope("write", 1)
            .build()
            .unwrap();

        let names: Vec<_> = definition.names().collect();
        assert_eq!(names, vec!["read", "write", "delete", "admin"]);
        assert_eq!(definition.max_slot(), Some(3));
    }

    #[test]
    fn test_sparse_slots_allowed() {
        let definition = ScopeDefinition::from_slots([("read", 0), ("audit", 40)]).unwrap();
        assert_eq!(definition.slot("audit"), Some(40));
        assert_eq!(definition.len(), 2);
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let err = ScopeDefinition::from_slots([("read", 0), ("write", 0)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateSlot {
                slot: 0,
                first: "read".into(),
                second: "write".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_scope_rejected() {
        let err = ScopeDefinition::builder()
            .scope("read", 0)
            .scope("read", 1)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateScope("read".into()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = ScopeDefinition::from_slots([("", 0)]).unwrap_err();
        assert_eq!(err, ConfigError::EmptyScopeName);
    }

    #[test]
    fn test_empty_definition() {
        let definition = ScopeDefinition::builder().build().unwrap();
        assert!(definition.is_empty());
        assert_eq!(definition.max_slot(), None);
        assert!(definition.require("read").is_err());
    }

    #[test]
    fn test_from_json() {
        let definition =
            ScopeDefinition::from_json(r#"{"read": 0, "write": 1, "delete": 2, "admin": 3}"#)
                .unwrap();
        assert_eq!(definition.slot("delete"), Some(2));
        assert!(definition.contains("admin"));
    }

    #[test]
    fn test_from_json_validates() {
        let err = ScopeDefinition::from_json(r#"{"read": 0, "write": 0}"#).unwrap_err();
        assert!(err.to_string().contains("slot 0"));

        let err = ScopeDefinition::from_json(r#"{"read": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = ScopeDefinition::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_duplicate_names() {
        let err =
            ScopeDefinition::from_json(r#"{"read": 0, "write": 1, "read": 2}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("scope 'read' is declared more than once"));

        // Same name and slot repeated is still ambiguous config
        let err = ScopeDefinition::from_json(r#"{"read": 0, "read": 0}"#).unwrap_err();
        assert!(err.to_string().contains("declared more than once"));
    }

    #[test]
    fn test_serialization() {
        let definition = ScopeDefinition::from_slots([("write", 1), ("read", 0)]).unwrap();
        let json = serde_json::to_string(&definition).unwrap();
        assert_eq!(json, r#"{"read":0,"write":1}"#);

        let parsed: ScopeDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, definition);
    }

    #[test]
    fn test_require() {
        let definition = ScopeDefinition::from_slots([("read", 5)]).unwrap();
        assert_eq!(definition.require("read"), Ok(5));
        assert_eq!(
            definition.require("write"),
            Err(ScopeError::UnknownScope {
                scope: "write".into()
            })
        );
    }
}
