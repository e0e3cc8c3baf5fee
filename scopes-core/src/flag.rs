//! Packed bit-flag encoding.
//!
//! Each scope owns one bit of an unsigned integer, at the slot given by the
//! [`ScopeDefinition`]. Checks and updates are single bitwise operations and
//! the value itself is a plain `Copy` scalar.

use crate::definition::ScopeDefinition;
use crate::encoding::ScopeEncoding;
use crate::error::{ConfigError, ScopeError};
use std::collections::HashMap;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// Unsigned integer types usable as a packed scope set.
///
/// Only unsigned types are implemented, so every bit including the highest
/// is a usable slot: a `u64` holds slots `0..=63`.
pub trait FlagBits:
    Copy
    + Eq
    + fmt::Debug
    + fmt::Binary
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Width of the integer in bits.
    const BITS: u32;

    /// The value with no bits set.
    const ZERO: Self;

    /// The value with only `slot` set. `slot` must be below [`Self::BITS`].
    fn bit(slot: u32) -> Self;

    /// Widen to `u128` for error reporting.
    fn to_u128(self) -> u128;
}

macro_rules! impl_flag_bits {
    ($($ty:ty),*) => {
        $(
            impl FlagBits for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;

                fn bit(slot: u32) -> Self {
                    1 << slot
                }

                fn to_u128(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_flag_bits!(u8, u16, u32, u64, u128);

/// Scope sets packed into a single unsigned integer.
///
/// # Example
///
/// ```rust
/// use scopes_core::{FlagScope, GrantMap, ScopeDefinition, ScopeEncoding};
///
/// let definition = ScopeDefinition::from_slots([
///     ("read", 0),
///     ("write", 1),
///     ("delete", 2),
///     ("admin", 3),
/// ])
/// .unwrap();
/// let scopes: FlagScope = FlagScope::new(definition).unwrap();
///
/// let token = scopes.create(&GrantMap::new().allow("read").allow("write")).unwrap();
/// assert_eq!(token, 0b0011);
/// assert!(scopes.can("write", &token).unwrap());
/// assert!(!scopes.can("admin", &token).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct FlagScope<B: FlagBits = u64> {
    definition: ScopeDefinition,
    masks: HashMap<String, B>,
    full: B,
}

impl<B: FlagBits> FlagScope<B> {
    /// Create a flag encoding for a definition.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SlotOutOfRange`] if any slot doesn't fit in `B`.
    pub fn new(definition: ScopeDefinition) -> Result<Self, ConfigError> {
        let mut masks = HashMap::with_capacity(definition.len());
        let mut full = B::ZERO;

        for (scope, slot) in definition.iter() {
            if slot >= B::BITS {
                return Err(ConfigError::SlotOutOfRange {
                    scope: scope.to_string(),
                    slot,
                    bits: B::BITS,
                });
            }
            let mask = B::bit(slot);
            full = full | mask;
            masks.insert(scope.to_string(), mask);
        }

        log::debug!(
            "flag scope ready: {} scope(s) in {} bits, mask {:#b}",
            masks.len(),
            B::BITS,
            full
        );

        Ok(Self {
            definition,
            masks,
            full,
        })
    }

    /// The single-bit mask for a scope.
    pub fn mask_of(&self, scope: &str) -> Result<B, ScopeError> {
        self.masks
            .get(scope)
            .copied()
            .ok_or_else(|| ScopeError::unknown(scope))
    }

    /// A value with every declared scope granted.
    pub fn full(&self) -> B {
        self.full
    }

    /// Accept a raw value from outside, e.g. decoded from a credential.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::UnknownBits`] if `raw` has bits set that no
    /// declared scope owns.
    pub fn from_bits(&self, raw: B) -> Result<B, ScopeError> {
        let stray = raw & !self.full;
        if stray != B::ZERO {
            return Err(ScopeError::UnknownBits {
                bits: stray.to_u128(),
            });
        }
        Ok(raw)
    }
}

impl<B: FlagBits> ScopeEncoding for FlagScope<B> {
    type Value = B;

    fn definition(&self) -> &ScopeDefinition {
        &self.definition
    }

    fn empty(&self) -> B {
        B::ZERO
    }

    fn can(&self, scope: &str, input: &B) -> Result<bool, ScopeError> {
        Ok(*input & self.mask_of(scope)? != B::ZERO)
    }

    fn allow(&self, input: &B, scope: &str) -> Result<B, ScopeError> {
        Ok(*input | self.mask_of(scope)?)
    }

    fn deny(&self, input: &B, scope: &str) -> Result<B, ScopeError> {
        Ok(*input & !self.mask_of(scope)?)
    }
}
