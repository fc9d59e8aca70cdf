//! # Synthetic Identifier Generation
//!
//! Completes bodies with their check character and draws random valid
//! identifiers. Intended for fixtures and load tests: the generated
//! numbers are well-formed but are not issued to anyone.

use rand::Rng;

pub use crate::checksum::{citizen_id_check_char, organization_code_check_char, usci_check_char};
use crate::checksum::{ORGANIZATION_CODE_ALPHABET, USCI_ALPHABET};
use crate::citizen::CitizenId;
use crate::division::PROVINCES;
use crate::error::{Defect, ValidationError};
use crate::kind::IdentifierKind;
use crate::organization::OrganizationCode;
use crate::registration::Department;
use crate::usci::Usci;
use crate::validator::{check_shape, first_disallowed};

/// Append the check character to a 17-digit body and validate the result.
///
/// # Errors
///
/// Fails if the body is malformed, or if the completed number is rejected
/// (unknown province, impossible birth date).
pub fn complete_citizen_id(body: &str) -> Result<CitizenId, ValidationError> {
    check_shape(IdentifierKind::CitizenId, body, 17, |c| c.is_ascii_digit())?;
    let check = citizen_id_check_char(body).ok_or_else(|| malformed(IdentifierKind::CitizenId, body))?;
    CitizenId::new(format!("{body}{check}"))
}

/// Append the check character to an 8-character body.
///
/// # Errors
///
/// Fails if the body is not eight characters from `0-9A-Z`.
pub fn complete_organization_code(body: &str) -> Result<OrganizationCode, ValidationError> {
    check_shape(IdentifierKind::OrganizationCode, body, 8, |c| {
        ORGANIZATION_CODE_ALPHABET.contains(c)
    })?;
    let check = organization_code_check_char(body)
        .ok_or_else(|| malformed(IdentifierKind::OrganizationCode, body))?;
    OrganizationCode::new(format!("{body}{check}"))
}

/// Append the check character to a 17-character body and validate the result.
///
/// # Errors
///
/// Fails if the body is malformed, or if the completed identifier is
/// rejected (unregistered department or category, unknown province, bad
/// embedded organization code).
pub fn complete_usci(body: &str) -> Result<Usci, ValidationError> {
    check_shape(IdentifierKind::Usci, body, 17, |c| USCI_ALPHABET.contains(c))?;
    let check = usci_check_char(body).ok_or_else(|| malformed(IdentifierKind::Usci, body))?;
    Usci::new(format!("{body}{check}"))
}

fn malformed(kind: IdentifierKind, body: &str) -> ValidationError {
    let defect = first_disallowed(body, |c| c.is_ascii_alphanumeric()).unwrap_or(Defect::Length {
        expected: kind.expected_len() - 1,
        actual: body.chars().count(),
    });
    ValidationError::structural(kind, defect)
}

fn random_digits<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    (0..n)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn random_from<R: Rng + ?Sized>(rng: &mut R, alphabet: &str, n: usize) -> String {
    let bytes = alphabet.as_bytes();
    (0..n)
        .map(|_| char::from(bytes[rng.gen_range(0..bytes.len())]))
        .collect()
}

/// A random valid citizen ID with a birth year in 1900..=2020.
///
/// # Errors
///
/// Never fails for well-formed reference tables; the `Result` mirrors
/// [`CitizenId::new`].
pub fn random_citizen_id<R: Rng + ?Sized>(rng: &mut R) -> Result<CitizenId, ValidationError> {
    let province = &PROVINCES[rng.gen_range(0..PROVINCES.len())];
    // Days capped at 28 so every month is valid.
    let body = format!(
        "{}{}{:04}{:02}{:02}{}",
        province.code,
        random_digits(rng, 4),
        rng.gen_range(1900..=2020),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28),
        random_digits(rng, 3),
    );
    complete_citizen_id(&body)
}

/// A random valid organization code over the full `0-9A-Z` alphabet.
///
/// # Errors
///
/// Never fails in practice; the `Result` mirrors [`OrganizationCode::new`].
pub fn random_organization_code<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<OrganizationCode, ValidationError> {
    complete_organization_code(&random_from(rng, ORGANIZATION_CODE_ALPHABET, 8))
}

/// A random valid USCI with a registered department, category and province.
///
/// The embedded organization code is drawn from the USCI alphabet so the
/// result passes the outer character check.
///
/// # Errors
///
/// Never fails for well-formed reference tables; the `Result` mirrors
/// [`Usci::new`].
pub fn random_usci<R: Rng + ?Sized>(rng: &mut R) -> Result<Usci, ValidationError> {
    let departments = Department::all();
    let department = departments[rng.gen_range(0..departments.len())];
    let categories = department.categories();
    let category = categories[rng.gen_range(0..categories.len())];
    let province = &PROVINCES[rng.gen_range(0..PROVINCES.len())];

    let org_body = random_from(rng, USCI_ALPHABET, 8);
    let org = complete_organization_code(&org_body)?;

    let body = format!(
        "{}{}{}{}{}",
        department.code(),
        category.code,
        province.code,
        random_digits(rng, 4),
        org.as_str(),
    );
    complete_usci(&body)
}
