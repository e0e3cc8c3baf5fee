//! # Scopes
//!
//! Named permission scopes (`read`, `write`, `admin`, ...) with two
//! interchangeable encodings behind one trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use scopes_core::{DynamicScope, FlagScope, GrantMap, ScopeDefinition, ScopeEncoding};
//!
//! # fn main() -> scopes_core::Result<()> {
//! let definition = ScopeDefinition::from_slots([
//!     ("read", 0),
//!     ("write", 1),
//!     ("delete", 2),
//!     ("admin", 3),
//! ])?;
//!
//! // Compact: one bit per scope
//! let flags: FlagScope = FlagScope::new(definition.clone())?;
//! let packed = flags.create(&GrantMap::new().allow("read").allow("write"))?;
//! assert_eq!(packed, 0b0011);
//!
//! // Readable: the granted names themselves
//! let names = DynamicScope::new(definition);
//! let set = names.create(&GrantMap::new().allow("read").allow("write"))?;
//! assert_eq!(set.to_string(), "read,write");
//!
//! // Same answers either way
//! let changes = GrantMap::new().deny("write").allow("delete");
//! let packed = flags.edit(&packed, &changes)?;
//! let set = names.edit(&set, &changes)?;
//! for scope in ["read", "write", "delete", "admin"] {
//!     assert_eq!(flags.can(scope, &packed)?, names.can(scope, &set)?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Encodings
//!
//! | Encoding | Value | Limit |
//! |----------|-------|-------|
//! | [`FlagScope`] | unsigned integer (`u64` by default) | slots below the integer width |
//! | [`DynamicScope`] | [`GrantedScopes`] name set | none |
//!
//! Use [`convert`] to move a value from one encoding to the other.
//!
//! ## Errors
//!
//! Building a [`ScopeDefinition`] or a [`FlagScope`] fails with
//! [`ConfigError`] on duplicate names, colliding slots, or slots that don't
//! fit. Every operation fails with [`ScopeError::UnknownScope`] when handed a
//! name outside the definition, in both encodings.

pub mod definition;
pub mod dynamic;
pub mod encoding;
pub mod error;
pub mod flag;
pub mod grant;

pub use definition::{ScopeDefinition, ScopeDefinitionBuilder};
pub use dynamic::{DynamicScope, GrantedScopes};
pub use encoding::{convert, ScopeEncoding};
pub use error::{ConfigError, Error, Result, ScopeError};
pub use flag::{FlagBits, FlagScope};
pub use grant::GrantMap;
