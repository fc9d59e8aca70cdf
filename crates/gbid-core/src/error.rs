//! # Error Types: Two-Class Validation Taxonomy
//!
//! Every rejected identifier falls into exactly one of two classes:
//!
//! - **Structural**: wrong length, a character outside the alphabet, an
//!   unknown region or registration code, an impossible birth date, or a
//!   failing embedded organization code.
//! - **Checksum mismatch**: the code is well-formed but its final check
//!   character disagrees with the weighted sum over the preceding characters.
//!
//! The boolean `validate` entry points collapse both into `false`. The
//! structured form is only surfaced by `check` and by the validated
//! newtype constructors, for diagnostics.

use thiserror::Error;

use crate::kind::IdentifierKind;

/// Why an identifier was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The identifier is not well-formed.
    #[error("invalid {kind}: {defect}")]
    Structural {
        /// Which identifier family was being validated.
        kind: IdentifierKind,
        /// The first structural defect found.
        defect: Defect,
    },

    /// The identifier is well-formed but its check character is wrong.
    #[error("invalid {kind}: check character mismatch (expected '{expected}', found '{found}')")]
    ChecksumMismatch {
        /// Which identifier family was being validated.
        kind: IdentifierKind,
        /// Check character computed from the body.
        expected: char,
        /// Check character present in the input.
        found: char,
    },
}

impl ValidationError {
    pub(crate) fn structural(kind: IdentifierKind, defect: Defect) -> Self {
        Self::Structural { kind, defect }
    }

    /// The identifier family this error refers to.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Structural { kind, .. } | Self::ChecksumMismatch { kind, .. } => *kind,
        }
    }

    /// Returns `true` for checksum mismatches, `false` for structural defects.
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, Self::ChecksumMismatch { .. })
    }
}

/// Structural defects, in the order the validators look for them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    /// Input length (in characters) is not the fixed length of the family.
    #[error("expected {expected} characters, got {actual}")]
    Length {
        /// Required length.
        expected: usize,
        /// Observed character count.
        actual: usize,
    },

    /// A character outside the permitted alphabet.
    #[error("character {found:?} at position {position} is not permitted")]
    Character {
        /// Zero-based character position.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// The two-digit province prefix is not in the division table.
    #[error("unknown province code {0:?}")]
    Province(String),

    /// The `YYYYMMDD` field is not a real date, or is before 1800.
    #[error("invalid birth date {0:?}")]
    BirthDate(String),

    /// The gender position does not hold a decimal digit.
    #[error("gender position holds {0:?}, expected a digit")]
    Gender(char),

    /// The registration department code is not registered.
    #[error("unknown registration department {0:?}")]
    Department(char),

    /// The category code is not registered under the department.
    #[error("category {category:?} is not registered under department {department:?}")]
    Category {
        /// Department code (first character).
        department: char,
        /// Category code (second character).
        category: char,
    },

    /// Characters 8–16 of a USCI are not a valid organization code.
    #[error("embedded organization code {0:?} is invalid")]
    EmbeddedOrganizationCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_display() {
        let err = ValidationError::structural(
            IdentifierKind::CitizenId,
            Defect::Length {
                expected: 18,
                actual: 17,
            },
        );
        assert_eq!(
            err.to_string(),
            "invalid citizen_id: expected 18 characters, got 17"
        );
        assert!(!err.is_checksum_mismatch());
        assert_eq!(err.kind(), IdentifierKind::CitizenId);
    }

    #[test]
    fn checksum_display() {
        let err = ValidationError::ChecksumMismatch {
            kind: IdentifierKind::OrganizationCode,
            expected: '1',
            found: '2',
        };
        assert_eq!(
            err.to_string(),
            "invalid organization_code: check character mismatch (expected '1', found '2')"
        );
        assert!(err.is_checksum_mismatch());
    }

    #[test]
    fn category_display_names_both_codes() {
        let err = ValidationError::structural(
            IdentifierKind::Usci,
            Defect::Category {
                department: '9',
                category: '9',
            },
        );
        assert!(err.to_string().contains("'9' is not registered under department '9'"));
    }
}
