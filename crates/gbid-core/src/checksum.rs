//! # Check Character Arithmetic
//!
//! The three weighted-sum schemes, independent of any field layout. Each
//! function takes the identifier body (everything before the check
//! character) and returns the check character the standard assigns to it,
//! or `None` if the body has the wrong length or a character outside the
//! scheme's alphabet.
//!
//! | Scheme | Body | Alphabet | Modulus |
//! |--------|------|----------|---------|
//! | Citizen ID (ISO 7064 MOD 11-2) | 17 | `0-9` | 11 |
//! | Organization code | 8 | `0-9A-Z` | 11 |
//! | USCI | 17 | [`USCI_ALPHABET`] | 31 |

/// Citizen-ID weights, left to right.
pub const CITIZEN_ID_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Citizen-ID check characters, indexed by `sum mod 11`.
pub const CITIZEN_ID_CHECK_CHARS: [char; 11] =
    ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Organization-code weights, left to right.
pub const ORGANIZATION_CODE_WEIGHTS: [u32; 8] = [3, 7, 9, 10, 5, 8, 4, 2];

/// Organization-code alphabet; a character's index is its base-36 value.
pub const ORGANIZATION_CODE_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// USCI alphabet: digits and capitals without I, O, Z, S, V.
pub const USCI_ALPHABET: &str = "0123456789ABCDEFGHJKLMNPQRTUWXY";

/// USCI weights (3^i mod 31), left to right.
pub const USCI_WEIGHTS: [u32; 17] = [
    1, 3, 9, 27, 19, 26, 16, 17, 20, 29, 25, 13, 8, 24, 10, 30, 28,
];

/// Base-36 value of `0-9` / `A-Z`. Lowercase is not accepted.
pub fn base36_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Index of `c` within [`USCI_ALPHABET`].
pub fn usci_value(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    USCI_ALPHABET.find(c).map(|idx| idx as u32)
}

fn weighted_sum(body: &str, weights: &[u32], value: impl Fn(char) -> Option<u32>) -> Option<u32> {
    if body.chars().count() != weights.len() {
        return None;
    }
    body.chars()
        .zip(weights)
        .try_fold(0u32, |sum, (c, w)| Some(sum + value(c)? * w))
}

/// Check character for a 17-digit citizen-ID body.
pub fn citizen_id_check_char(body: &str) -> Option<char> {
    let sum = weighted_sum(body, &CITIZEN_ID_WEIGHTS, |c| c.to_digit(10))?;
    Some(CITIZEN_ID_CHECK_CHARS[(sum % 11) as usize])
}

/// Check character for an 8-character organization-code body.
///
/// `11 - (sum mod 11)` ranges over 1..=11; 10 is written `X` and 11 is
/// written `0`.
pub fn organization_code_check_char(body: &str) -> Option<char> {
    let sum = weighted_sum(body, &ORGANIZATION_CODE_WEIGHTS, base36_value)?;
    match 11 - sum % 11 {
        10 => Some('X'),
        11 => Some('0'),
        n => char::from_digit(n, 10),
    }
}

/// Check character for a 17-character USCI body.
pub fn usci_check_char(body: &str) -> Option<char> {
    let sum = weighted_sum(body, &USCI_WEIGHTS, usci_value)?;
    let idx = (31 - sum % 31) % 31;
    USCI_ALPHABET.chars().nth(idx as usize)
}
