//! # Organization Code (GB 11714-1997)
//!
//! Eight body characters from `0-9A-Z` followed by one check character,
//! which is a digit or `X`. Printed codes often carry a hyphen before the
//! check character (`D2143569-X`); the validator takes the bare nine
//! characters only.

use serde::{Serialize, Serializer};

use crate::checksum::{base36_value, organization_code_check_char};
use crate::error::{Defect, ValidationError};
use crate::kind::IdentifierKind;
use crate::validator::{check_shape, IdentifierValidator};

const KIND: IdentifierKind = IdentifierKind::OrganizationCode;
const LEN: usize = 9;

/// Validator for 9-character organization codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrganizationCodeValidator;

impl IdentifierValidator for OrganizationCodeValidator {
    fn kind(&self) -> IdentifierKind {
        KIND
    }

    fn check(&self, code: &str) -> Result<(), ValidationError> {
        check_shape(KIND, code, LEN, |c| base36_value(c).is_some())?;

        let Some(expected) = organization_code_check_char(&code[..8]) else {
            return Err(ValidationError::structural(
                KIND,
                Defect::Length {
                    expected: LEN,
                    actual: code.chars().count(),
                },
            ));
        };
        let found = char::from(code.as_bytes()[8]);
        // Compared by base-36 value; over this alphabet that is equality.
        if base36_value(expected) != base36_value(found) {
            return Err(ValidationError::ChecksumMismatch {
                kind: KIND,
                expected,
                found,
            });
        }
        Ok(())
    }
}

/// A validated organization code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrganizationCode(String);

impl_validating_deserialize!(OrganizationCode);

impl OrganizationCode {
    /// Validate and wrap an organization code.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] reported by [`OrganizationCodeValidator`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        OrganizationCodeValidator.check(&s)?;
        Ok(Self(s))
    }

    /// Wrap a code that has already passed [`OrganizationCodeValidator`].
    pub(crate) fn from_validated(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The eight body characters.
    pub fn body(&self) -> &str {
        &self.0[..8]
    }

    pub fn check_char(&self) -> char {
        char::from(self.0.as_bytes()[8])
    }

    /// Printed form with a hyphen before the check character.
    pub fn formatted(&self) -> String {
        format!("{}-{}", self.body(), self.check_char())
    }
}

impl Serialize for OrganizationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl AsRef<str> for OrganizationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for OrganizationCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for OrganizationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn organization_code() -> impl Strategy<Value = String> {
        "[0-9A-Z]{8}".prop_map(|body| {
            let check = organization_code_check_char(&body).unwrap();
            format!("{body}{check}")
        })
    }

    proptest! {
        #[test]
        fn generated_codes_validate(code in organization_code()) {
            prop_assert!(OrganizationCodeValidator.validate(&code));
        }

        #[test]
        fn wrong_check_character_is_rejected(code in organization_code(), c in "[0-9X]") {
            let c = c.chars().next().unwrap();
            prop_assume!(!code.ends_with(c));
            let mutated = format!("{}{c}", &code[..8]);
            prop_assert!(!OrganizationCodeValidator.validate(&mutated));
        }

        #[test]
        fn arbitrary_input_never_panics(s in "\\PC{0,12}") {
            let _ = OrganizationCodeValidator.validate(&s);
        }
    }
}
