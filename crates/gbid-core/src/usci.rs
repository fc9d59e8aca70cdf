//! # Unified Social Credit Identifier (GB 32100-2015)
//!
//! 18 characters over [`USCI_ALPHABET`](crate::checksum::USCI_ALPHABET):
//!
//! ```text
//!  0 1 2      8         17
//!  D C PPxxxx OOOOOOOOO K
//!  │ │ │      │         └─ check character (mod 31)
//!  │ │ │      └─────────── organization code, checked on its own
//!  │ │ └────────────────── division code; only the province prefix is checked
//!  │ └──────────────────── category, registered per department
//!  └────────────────────── registration department
//! ```
//!
//! The 31-symbol alphabet check runs before the embedded organization-code
//! check, so the latter never sees I, O, Z, S or V even though its own
//! alphabet allows them.

use serde::{Serialize, Serializer};

use crate::checksum::{usci_check_char, usci_value};
use crate::division::{self, Province};
use crate::error::{Defect, ValidationError};
use crate::kind::IdentifierKind;
use crate::organization::{OrganizationCode, OrganizationCodeValidator};
use crate::registration::{Category, Department};
use crate::validator::{check_shape, IdentifierValidator};

const KIND: IdentifierKind = IdentifierKind::Usci;
const LEN: usize = 18;

struct Parsed {
    department: Department,
    category: &'static Category,
    province: &'static Province,
}

/// Validator for 18-character USCIs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsciValidator {
    organization: OrganizationCodeValidator,
}

impl UsciValidator {
    pub const fn new() -> Self {
        Self {
            organization: OrganizationCodeValidator,
        }
    }

    fn parse(&self, code: &str) -> Result<Parsed, ValidationError> {
        check_shape(KIND, code, LEN, |c| usci_value(c).is_some())?;
        let bytes = code.as_bytes();

        let dept_code = char::from(bytes[0]);
        let department = Department::from_code(dept_code)
            .ok_or_else(|| ValidationError::structural(KIND, Defect::Department(dept_code)))?;

        let category_code = char::from(bytes[1]);
        let category = department.category(category_code).ok_or_else(|| {
            ValidationError::structural(
                KIND,
                Defect::Category {
                    department: dept_code,
                    category: category_code,
                },
            )
        })?;

        let prefix = &code[2..4];
        let province = division::province(prefix)
            .ok_or_else(|| ValidationError::structural(KIND, Defect::Province(prefix.to_string())))?;

        let embedded = &code[8..17];
        if !self.organization.validate(embedded) {
            return Err(ValidationError::structural(
                KIND,
                Defect::EmbeddedOrganizationCode(embedded.to_string()),
            ));
        }

        let Some(expected) = usci_check_char(&code[..17]) else {
            return Err(ValidationError::structural(
                KIND,
                Defect::Length {
                    expected: LEN,
                    actual: code.chars().count(),
                },
            ));
        };
        let found = char::from(bytes[17]);
        if expected != found {
            return Err(ValidationError::ChecksumMismatch {
                kind: KIND,
                expected,
                found,
            });
        }

        Ok(Parsed {
            department,
            category,
            province,
        })
    }
}

impl IdentifierValidator for UsciValidator {
    fn kind(&self) -> IdentifierKind {
        KIND
    }

    fn check(&self, code: &str) -> Result<(), ValidationError> {
        self.parse(code).map(|_| ())
    }
}

/// A validated Unified Social Credit Identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Usci {
    raw: String,
    department: Department,
    category: &'static Category,
    province: &'static Province,
}

impl_validating_deserialize!(Usci);

impl Usci {
    /// Validate and wrap a USCI.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found by [`UsciValidator`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let parsed = UsciValidator::new().parse(&raw)?;
        Ok(Self {
            raw,
            department: parsed.department,
            category: parsed.category,
            province: parsed.province,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Registration department (character 0).
    pub fn department(&self) -> Department {
        self.department
    }

    /// Organization category (character 1).
    pub fn category(&self) -> &'static Category {
        self.category
    }

    /// Two-character province prefix (characters 2–3).
    pub fn province_code(&self) -> &str {
        &self.raw[2..4]
    }

    pub fn province_name(&self) -> &'static str {
        self.province.name
    }

    /// Six-character division code of the registering authority (characters 2–7).
    pub fn division_code(&self) -> &str {
        &self.raw[2..8]
    }

    /// The embedded organization code (characters 8–16).
    pub fn organization_code(&self) -> OrganizationCode {
        OrganizationCode::from_validated(&self.raw[8..17])
    }

    pub fn check_char(&self) -> char {
        char::from(self.raw.as_bytes()[17])
    }
}

impl Serialize for Usci {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl AsRef<str> for Usci {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl std::str::FromStr for Usci {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Usci {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "51110000500313396D";

    fn defect_of(code: &str) -> Defect {
        match UsciValidator::new().check(code).unwrap_err() {
            ValidationError::Structural { defect, .. } => defect,
            other => panic!("expected structural error, got {other:?}"),
        }
    }

    #[test]
    fn known_identifiers_are_valid() {
        let v = UsciValidator::new();
        for code in [
            SAMPLE,
            "91350100M000100Y43",
            "91110000600037341L",
            "91110108551385082Q",
            "Y1110000500313396K",
            "91110000D2143569X7",
        ] {
            assert!(v.validate(code), "{code}");
        }
    }

    #[test]
    fn checksum_mismatch() {
        let err = UsciValidator::new().check("51110000500313396E").unwrap_err();
        assert_eq!(
            err,
            ValidationError::ChecksumMismatch {
                kind: KIND,
                expected: 'D',
                found: 'E'
            }
        );
    }

    #[test]
    fn excluded_letters_fail_the_alphabet_check() {
        for (pos, c) in [(17, 'I'), (8, 'O'), (12, 'Z'), (9, 'S'), (16, 'V')] {
            let mut chars: Vec<char> = SAMPLE.chars().collect();
            chars[pos] = c;
            let code: String = chars.into_iter().collect();
            assert_eq!(
                defect_of(&code),
                Defect::Character {
                    position: pos,
                    found: c
                }
            );
        }
        assert!(!UsciValidator::new().validate("51110000500313396d"));
    }

    #[test]
    fn unknown_department() {
        assert_eq!(defect_of("21110000500313396G"), Defect::Department('2'));
    }

    #[test]
    fn unregistered_category() {
        assert_eq!(
            defect_of("941100005003133960"),
            Defect::Category {
                department: '9',
                category: '4'
            }
        );
        assert_eq!(
            defect_of("9Y110000500313396F"),
            Defect::Category {
                department: '9',
                category: 'Y'
            }
        );
    }

    #[test]
    fn unknown_province() {
        assert_eq!(defect_of("519900005003133964"), Defect::Province("99".into()));
    }

    #[test]
    fn embedded_organization_code_is_checked() {
        // USCI checksum is right, but 500313397 is not an organization code.
        assert_eq!(
            defect_of("51110000500313397G"),
            Defect::EmbeddedOrganizationCode("500313397".into())
        );
    }

    #[test]
    fn newtype_accessors() {
        let usci = Usci::new(SAMPLE).unwrap();
        assert_eq!(usci.department(), Department::CivilAffairs);
        assert_eq!(usci.category().code, '1');
        assert_eq!(usci.category().name, "社会团体");
        assert_eq!(usci.province_code(), "11");
        assert_eq!(usci.province_name(), "北京");
        assert_eq!(usci.division_code(), "110000");
        assert_eq!(usci.organization_code().as_str(), "500313396");
        assert_eq!(usci.check_char(), 'D');
        assert_eq!(usci.to_string(), SAMPLE);
    }

    #[test]
    fn serde_roundtrip_and_rejection() {
        let usci = Usci::new(SAMPLE).unwrap();
        let json = serde_json::to_string(&usci).unwrap();
        assert_eq!(json, format!("\"{SAMPLE}\""));
        let back: Usci = serde_json::from_str(&json).unwrap();
        assert_eq!(back, usci);
        assert!(serde_json::from_str::<Usci>("\"51110000500313396E\"").is_err());
    }
}
