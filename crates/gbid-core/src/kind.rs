//! # Identifier Kinds
//!
//! The three identifier families this crate understands. Used to tag
//! errors, select a validator at runtime, and label CLI output.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An identifier family, each defined by its own national standard.
///
/// | Kind | Standard | Length |
/// |------|----------|--------|
/// | `CitizenId` | GB 11643-1999 | 18 |
/// | `OrganizationCode` | GB 11714-1997 | 9 |
/// | `Usci` | GB 32100-2015 | 18 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Citizen Identification Number (公民身份号码).
    CitizenId,
    /// Organization Code (组织机构代码).
    OrganizationCode,
    /// Unified Social Credit Identifier (统一社会信用代码).
    Usci,
}

impl IdentifierKind {
    /// All kinds in declaration order.
    pub fn all() -> &'static [IdentifierKind] {
        &[Self::CitizenId, Self::OrganizationCode, Self::Usci]
    }

    /// The snake_case name, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CitizenId => "citizen_id",
            Self::OrganizationCode => "organization_code",
            Self::Usci => "usci",
        }
    }

    /// The fixed character length of identifiers of this kind.
    pub fn expected_len(&self) -> usize {
        match self {
            Self::CitizenId => 18,
            Self::OrganizationCode => 9,
            Self::Usci => 18,
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown identifier kind: {0:?} (expected citizen-id, organization-code or usci)")]
pub struct UnknownKind(pub String);

impl FromStr for IdentifierKind {
    type Err = UnknownKind;

    /// Accepts the snake_case name, its kebab-case spelling, and a short alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "citizen_id" | "citizen-id" | "cin" => Ok(Self::CitizenId),
            "organization_code" | "organization-code" | "org" => Ok(Self::OrganizationCode),
            "usci" => Ok(Self::Usci),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_roundtrip() {
        for kind in IdentifierKind::all() {
            let parsed: IdentifierKind = kind.as_str().parse().unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn aliases_parse() {
        assert_eq!("cin".parse::<IdentifierKind>().unwrap(), IdentifierKind::CitizenId);
        assert_eq!(
            "organization-code".parse::<IdentifierKind>().unwrap(),
            IdentifierKind::OrganizationCode
        );
        assert_eq!("org".parse::<IdentifierKind>().unwrap(), IdentifierKind::OrganizationCode);
    }

    #[test]
    fn from_str_invalid() {
        assert!("USCI".parse::<IdentifierKind>().is_err()); // case-sensitive
        assert!("".parse::<IdentifierKind>().is_err());
        assert!("passport".parse::<IdentifierKind>().is_err());
    }

    #[test]
    fn serde_format_matches_as_str() {
        for kind in IdentifierKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: IdentifierKind = serde_json::from_str(&json).unwrap();
            assert_eq!(*kind, back);
        }
    }

    #[test]
    fn expected_lengths() {
        assert_eq!(IdentifierKind::CitizenId.expected_len(), 18);
        assert_eq!(IdentifierKind::OrganizationCode.expected_len(), 9);
        assert_eq!(IdentifierKind::Usci.expected_len(), 18);
    }
}
