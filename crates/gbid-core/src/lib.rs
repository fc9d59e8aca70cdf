//! # gbid-core: Chinese Administrative Identifier Validation
//!
//! Validation and decoding for three identifier families defined by
//! Chinese national standards:
//!
//! | Identifier | Standard | Module |
//! |------------|----------|--------|
//! | Citizen Identification Number | GB 11643-1999 | [`citizen`] |
//! | Organization Code | GB 11714-1997 | [`organization`] |
//! | Unified Social Credit Identifier | GB 32100-2015 | [`usci`] |
//!
//! ## Key Design Principles
//!
//! 1. **Fail-closed boolean contract.** Every validator's
//!    [`IdentifierValidator::validate`] returns `bool` and never panics.
//!    Malformed input and checksum mismatches are both just `false`.
//!
//! 2. **Validated newtypes.** [`CitizenId`], [`OrganizationCode`] and
//!    [`Usci`] can only be constructed through full validation, including
//!    when deserialized. Their accessors are therefore infallible.
//!
//! 3. **Static reference data.** Province codes and USCI department and
//!    category tables are compile-time `static`s. Nothing is initialized
//!    at runtime and all validators are `Send + Sync`.
//!
//! 4. **Composition over duplication.** [`UsciValidator`] holds an
//!    [`OrganizationCodeValidator`] for its embedded organization code.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Logging through `tracing` only; no subscriber is installed here.

/// Implement `Deserialize` for a validated newtype by routing the raw
/// string through its `new()` constructor, so that invalid values are
/// rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod checksum;
pub mod citizen;
pub mod division;
pub mod error;
pub mod generate;
pub mod kind;
pub mod organization;
pub mod registration;
pub mod usci;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use citizen::{BirthDate, CitizenId, CitizenIdValidator, Gender};
pub use division::{Province, PROVINCES};
pub use error::{Defect, ValidationError};
pub use kind::{IdentifierKind, UnknownKind};
pub use organization::{OrganizationCode, OrganizationCodeValidator};
pub use registration::{Category, Department};
pub use usci::{Usci, UsciValidator};
pub use validator::{check, validate, validator_for, IdentifierValidator};
