//! # Citizen Identification Number (GB 11643-1999)
//!
//! 18 characters: a 17-digit body and one check character.
//!
//! ```text
//!  0      6        14  17
//!  AAAAAA YYYYMMDD SSS C
//!  │      │        │   └─ check character (ISO 7064 MOD 11-2, 0-9 or X)
//!  │      │        └───── sequence code; its last digit is odd for men
//!  │      └────────────── birth date
//!  └───────────────────── address code (GB/T 2260 division)
//! ```
//!
//! The validator checks only the two-digit province prefix of the address
//! code. Birth dates before 1800 are rejected as implausible.
//!
//! The free functions at the bottom of this module ([`address_code`],
//! [`birth_date`], [`gender`], ...) decode raw strings without validating
//! them as a whole. Each is guarded on its own field and returns `None`
//! rather than failing.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::checksum::citizen_id_check_char;
use crate::division::{self, Province};
use crate::error::{Defect, ValidationError};
use crate::kind::IdentifierKind;
use crate::validator::{check_shape, first_disallowed, IdentifierValidator};

const KIND: IdentifierKind = IdentifierKind::CitizenId;
const LEN: usize = 18;

/// Earliest birth year accepted by the validator.
pub const MIN_BIRTH_YEAR: i32 = 1800;

/// Label returned by [`gender_label`] when the gender digit is unreadable.
pub const UNKNOWN_GENDER_LABEL: &str = "未知";

/// Gender encoded by the parity of the sequence code's last digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Even digit.
    Female,
    /// Odd digit.
    Male,
}

impl Gender {
    /// Gender for a sequence digit, by parity.
    pub fn from_digit(digit: u32) -> Self {
        if digit % 2 == 1 {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// `1` for male, `0` for female.
    pub fn code(&self) -> u8 {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }

    pub fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }

    /// "男" or "女".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Female => "女",
            Self::Male => "男",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Year, month and day of a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Fields resolved while validating; shared by the validator and [`CitizenId`].
struct Parsed {
    province: &'static Province,
    birth_date: NaiveDate,
    gender: Gender,
}

/// Validator for 18-character citizen identification numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CitizenIdValidator;

impl CitizenIdValidator {
    /// Runs the four sub-checks in order: address, birth date, gender digit,
    /// check character.
    fn parse(&self, code: &str) -> Result<Parsed, ValidationError> {
        check_shape(KIND, code, LEN, |c| c.is_ascii())?;

        let prefix = &code[..2];
        let province = division::province(prefix)
            .ok_or_else(|| ValidationError::structural(KIND, Defect::Province(prefix.to_string())))?;

        let date_field = &code[6..14];
        let birth_date = parse_yyyymmdd(date_field)
            .filter(|d| d.year() >= MIN_BIRTH_YEAR)
            .ok_or_else(|| {
                ValidationError::structural(KIND, Defect::BirthDate(date_field.to_string()))
            })?;

        let gender_char = char::from(code.as_bytes()[16]);
        let gender = gender_char
            .to_digit(10)
            .map(Gender::from_digit)
            .ok_or_else(|| ValidationError::structural(KIND, Defect::Gender(gender_char)))?;

        let body = &code[..17];
        let expected = citizen_id_check_char(body).ok_or_else(|| {
            let defect = first_disallowed(body, |c| c.is_ascii_digit())
                .unwrap_or(Defect::Length {
                    expected: 17,
                    actual: body.chars().count(),
                });
            ValidationError::structural(KIND, defect)
        })?;
        let found = char::from(code.as_bytes()[17]);
        if expected != found {
            return Err(ValidationError::ChecksumMismatch {
                kind: KIND,
                expected,
                found,
            });
        }

        Ok(Parsed {
            province,
            birth_date,
            gender,
        })
    }
}

impl IdentifierValidator for CitizenIdValidator {
    fn kind(&self) -> IdentifierKind {
        KIND
    }

    fn check(&self, code: &str) -> Result<(), ValidationError> {
        self.parse(code).map(|_| ())
    }
}

/// A validated citizen identification number.
///
/// Construction runs the full validation, so the accessors are infallible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CitizenId {
    raw: String,
    province: &'static Province,
    birth_date: NaiveDate,
    gender: Gender,
}

impl_validating_deserialize!(CitizenId);

impl CitizenId {
    /// Validate and wrap a citizen identification number.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found by [`CitizenIdValidator`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let parsed = CitizenIdValidator.parse(&raw)?;
        Ok(Self {
            raw,
            province: parsed.province,
            birth_date: parsed.birth_date,
            gender: parsed.gender,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Six-digit address (division) code.
    pub fn address_code(&self) -> &str {
        &self.raw[..6]
    }

    /// Province the address code belongs to.
    pub fn province(&self) -> &'static Province {
        self.province
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Birth date as it appears in the number, `YYYYMMDD`.
    pub fn birth_date_string(&self) -> &str {
        &self.raw[6..14]
    }

    /// Three-digit sequence code.
    pub fn sequence_code(&self) -> &str {
        &self.raw[14..17]
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn check_char(&self) -> char {
        char::from(self.raw.as_bytes()[17])
    }
}

impl Serialize for CitizenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl AsRef<str> for CitizenId {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl std::str::FromStr for CitizenId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for CitizenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

// ---------------------------------------------------------------------------
// Decoding accessors on raw strings
// ---------------------------------------------------------------------------

/// `code` if it has the citizen-ID shape (18 ASCII characters).
fn shaped(code: &str) -> Option<&str> {
    (code.len() == LEN && code.is_ascii()).then_some(code)
}

/// Strict `YYYYMMDD`: exactly eight ASCII digits naming a real date.
fn parse_yyyymmdd(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = s[..4].parse().ok()?;
    let month = s[4..6].parse().ok()?;
    let day = s[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The six-digit address code (characters 0–5).
pub fn address_code(code: &str) -> Option<&str> {
    let field = &shaped(code)?[..6];
    field.bytes().all(|b| b.is_ascii_digit()).then_some(field)
}

/// The raw birth-date field (characters 6–13) if it is eight digits.
pub fn birth_date_string(code: &str) -> Option<&str> {
    let field = &shaped(code)?[6..14];
    field.bytes().all(|b| b.is_ascii_digit()).then_some(field)
}

/// The birth date, if characters 6–13 name a real calendar date.
///
/// Unlike validation, no lower bound is applied to the year.
pub fn birth_date(code: &str) -> Option<NaiveDate> {
    parse_yyyymmdd(birth_date_string(code)?)
}

/// The birth date split into year, month and day.
pub fn birth_date_components(code: &str) -> Option<BirthDate> {
    birth_date(code).map(BirthDate::from)
}

pub fn gender(code: &str) -> Option<Gender> {
    let c = char::from(shaped(code)?.as_bytes()[16]);
    c.to_digit(10).map(Gender::from_digit)
}

/// `1` for male, `0` for female.
pub fn gender_code(code: &str) -> Option<u8> {
    gender(code).map(|g| g.code())
}

pub fn gender_is_male(code: &str) -> Option<bool> {
    gender(code).map(|g| g.is_male())
}

/// "男", "女", or [`UNKNOWN_GENDER_LABEL`].
pub fn gender_label(code: &str) -> &'static str {
    gender(code).map_or(UNKNOWN_GENDER_LABEL, |g| g.label())
}

/// The check character a body should carry.
///
/// Accepts either the 17-character body or a full 18-character number, in
/// which case the final character is ignored.
pub fn check_char(code: &str) -> Option<char> {
    match code.len() {
        17 => citizen_id_check_char(code),
        LEN if code.is_ascii() => citizen_id_check_char(&code[..17]),
        _ => None,
    }
}
