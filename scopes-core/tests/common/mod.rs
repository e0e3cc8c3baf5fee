//! Common test utilities shared across test files.
//!
//! Items here may not be used by all test files, hence the module-level allow.
#![allow(dead_code)]

use proptest::prelude::*;
use scopes_core::{DynamicScope, FlagScope, GrantMap, ScopeDefinition, ScopeEncoding};

// ===== Fixtures =====

/// The reference alphabet used throughout the tests.
pub const ALPHABET: [(&str, u32); 4] = [("read", 0), ("write", 1), ("delete", 2), ("admin", 3)];

pub fn definition() -> ScopeDefinition {
    ScopeDefinition::from_slots(ALPHABET).unwrap()
}

pub fn flag_scope() -> FlagScope {
    FlagScope::new(definition()).unwrap()
}

pub fn dynamic_scope() -> DynamicScope {
    DynamicScope::new(definition())
}

pub fn alphabet_names() -> Vec<String> {
    ALPHABET.iter().map(|(scope, _)| scope.to_string()).collect()
}

/// `can` answers for every scope in the encoding's definition, in slot order.
pub fn snapshot<E: ScopeEncoding>(encoding: &E, value: &E::Value) -> Vec<bool> {
    encoding
        .definition()
        .names()
        .map(|scope| encoding.can(scope, value).unwrap())
        .collect()
}

// ===== Operations =====

/// One step applied identically to both encodings.
#[derive(Debug, Clone)]
pub enum Op {
    Allow(String),
    Deny(String),
    Edit(GrantMap),
}

pub fn apply<E: ScopeEncoding>(encoding: &E, value: &E::Value, op: &Op) -> E::Value {
    match op {
        Op::Allow(scope) => encoding.allow(value, scope).unwrap(),
        Op::Deny(scope) => encoding.deny(value, scope).unwrap(),
        Op::Edit(changes) => encoding.edit(value, changes).unwrap(),
    }
}

// ===== Strategies =====

pub fn arb_scope() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ALPHABET.iter().map(|(scope, _)| *scope).collect::<Vec<_>>())
}

pub fn arb_grant_map() -> impl Strategy<Value = GrantMap> {
    arb_grant_map_over(alphabet_names())
}

pub fn arb_op() -> impl Strategy<Value = Op> {
    arb_op_over(alphabet_names())
}

/// Grant maps over the given (non-empty) list of scope names.
pub fn arb_grant_map_over(names: Vec<String>) -> impl Strategy<Value = GrantMap> {
    prop::collection::vec((prop::sample::select(names), any::<bool>()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

pub fn arb_op_over(names: Vec<String>) -> impl Strategy<Value = Op> {
    let scope = prop::sample::select(names.clone());
    prop_oneof![
        scope.clone().prop_map(Op::Allow),
        scope.prop_map(Op::Deny),
        arb_grant_map_over(names).prop_map(Op::Edit),
    ]
}

/// Definitions with sparse slots below `bits`, half of them holding the
/// highest slot.
pub fn arb_definition(bits: u32) -> impl Strategy<Value = ScopeDefinition> {
    (prop::collection::btree_set(0..bits, 1..=6), any::<bool>()).prop_map(
        move |(mut slots, use_top)| {
            if use_top {
                slots.insert(bits - 1);
            }
            ScopeDefinition::from_slots(
                slots
                    .into_iter()
                    .map(|slot| (format!("scope_{}", slot), slot)),
            )
            .unwrap()
        },
    )
}

/// A generated definition with a starting grant map and operations over
/// its names.
pub fn arb_case(bits: u32) -> impl Strategy<Value = (ScopeDefinition, GrantMap, Vec<Op>)> {
    arb_definition(bits).prop_flat_map(|definition| {
        let names: Vec<String> = definition.names().map(str::to_string).collect();
        (
            Just(definition),
            arb_grant_map_over(names.clone()),
            prop::collection::vec(arb_op_over(names), 0..12),
        )
    })
}
