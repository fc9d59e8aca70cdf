//! # Validator Trait
//!
//! Every identifier family exposes the same fail-closed contract:
//! [`IdentifierValidator::validate`] returns a plain `bool` and never
//! panics, whatever the input. [`IdentifierValidator::check`] is the same
//! computation with the reason for rejection kept.

use crate::citizen::CitizenIdValidator;
use crate::error::{Defect, ValidationError};
use crate::kind::IdentifierKind;
use crate::organization::OrganizationCodeValidator;
use crate::usci::UsciValidator;

/// A stateless validator for one identifier family.
pub trait IdentifierValidator: Send + Sync {
    /// The family this validator accepts.
    fn kind(&self) -> IdentifierKind;

    /// Validate `code`, reporting the first defect found.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Structural`] for malformed input,
    /// [`ValidationError::ChecksumMismatch`] for a wrong check character.
    fn check(&self, code: &str) -> Result<(), ValidationError>;

    /// `true` if and only if [`check`](Self::check) succeeds.
    fn validate(&self, code: &str) -> bool {
        match self.check(code) {
            Ok(()) => {
                tracing::trace!(kind = %self.kind(), "identifier accepted");
                true
            }
            Err(e) => {
                tracing::debug!(kind = %self.kind(), error = %e, "identifier rejected");
                false
            }
        }
    }

    /// Nullable-input form of [`validate`](Self::validate): `None` is invalid.
    fn validate_opt(&self, code: Option<&str>) -> bool {
        code.is_some_and(|c| self.validate(c))
    }
}

static CITIZEN_ID: CitizenIdValidator = CitizenIdValidator;
static ORGANIZATION_CODE: OrganizationCodeValidator = OrganizationCodeValidator;
static USCI: UsciValidator = UsciValidator::new();

/// The validator for `kind`.
pub fn validator_for(kind: IdentifierKind) -> &'static dyn IdentifierValidator {
    match kind {
        IdentifierKind::CitizenId => &CITIZEN_ID,
        IdentifierKind::OrganizationCode => &ORGANIZATION_CODE,
        IdentifierKind::Usci => &USCI,
    }
}

/// Validate `code` as an identifier of `kind`.
pub fn validate(kind: IdentifierKind, code: &str) -> bool {
    validator_for(kind).validate(code)
}

/// Validate `code` as an identifier of `kind`, keeping the rejection reason.
pub fn check(kind: IdentifierKind, code: &str) -> Result<(), ValidationError> {
    validator_for(kind).check(code)
}

/// Reject `code` unless it is exactly `len` characters, all satisfying `allowed`.
///
/// Length is counted in characters, so a multi-byte character is one position.
pub(crate) fn check_shape(
    kind: IdentifierKind,
    code: &str,
    len: usize,
    allowed: impl Fn(char) -> bool,
) -> Result<(), ValidationError> {
    let actual = code.chars().count();
    if actual != len {
        return Err(ValidationError::structural(
            kind,
            Defect::Length {
                expected: len,
                actual,
            },
        ));
    }
    match first_disallowed(code, allowed) {
        Some(defect) => Err(ValidationError::structural(kind, defect)),
        None => Ok(()),
    }
}

/// The first character of `code` rejected by `allowed`, as a [`Defect`].
pub(crate) fn first_disallowed(code: &str, allowed: impl Fn(char) -> bool) -> Option<Defect> {
    code.chars()
        .enumerate()
        .find(|(_, c)| !allowed(*c))
        .map(|(position, found)| Defect::Character { position, found })
}
