use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::checksum::{compute_check_digit, digit_char};
use super::error::HoujinError;

/// Number of digits in a houjin number, check digit included.
pub const HOUJIN_NUMBER_LEN: usize = 13;

/// Number of digits in a base number.
pub const BASE_NUMBER_LEN: usize = 12;

/// Prefix of qualified-invoice registration numbers issued to corporations.
pub const REGISTRATION_PREFIX: char = 'T';

// Digit positions within a full houjin number.
const CHECK_DIGIT: usize = 0;
const CATEGORY_SELECTOR: usize = 1;
const GOVERNMENT_CODE: Range<usize> = 1..7;
const REGISTRY_OFFICE_CODE: Range<usize> = 1..5;
const ORGANIZATION_CODE: Range<usize> = 5..7;
const SERIAL: Range<usize> = 7..13;

/// Check that `input` is exactly `N` ASCII digits and copy it into an array.
///
/// Length is checked before characters; the first non-digit wins.
pub(crate) fn parse_digits<const N: usize>(input: &str) -> Result<[u8; N], HoujinError> {
    if input.len() != N {
        return Err(HoujinError::InvalidLength {
            expected: N,
            actual: input.len(),
        });
    }
    if let Some((position, found)) = input.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(HoujinError::InvalidCharacter { position, found });
    }

    let mut digits = [0u8; N];
    digits.copy_from_slice(input.as_bytes());
    Ok(digits)
}

fn ascii(digits: &[u8]) -> &str {
    // Digit arrays only ever hold ASCII digits.
    std::str::from_utf8(digits).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// BaseNumber
// ---------------------------------------------------------------------------

/// The 12 significant digits of a houjin number, without the check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseNumber([u8; BASE_NUMBER_LEN]);

impl BaseNumber {
    /// Parse a 12-digit base number.
    pub fn parse(input: &str) -> Result<Self, HoujinError> {
        parse_digits(input).map(Self)
    }

    /// Wrap digits the caller has already checked to be ASCII '0'-'9'.
    pub(crate) fn from_ascii(digits: [u8; BASE_NUMBER_LEN]) -> Self {
        debug_assert!(digits.iter().all(u8::is_ascii_digit));
        Self(digits)
    }

    /// Digit values (0-9), left to right.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().map(|b| b - b'0')
    }

    /// The base number as a string.
    pub fn as_str(&self) -> &str {
        ascii(&self.0)
    }

    /// Check digit of this base number.
    pub fn check_digit(&self) -> u8 {
        compute_check_digit(self)
    }

    /// Prepend the check digit, producing a checksum-valid houjin number.
    pub fn with_check_digit(self) -> HoujinNumber {
        HoujinNumber::from_base(self)
    }
}

impl fmt::Display for BaseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseNumber {
    type Err = HoujinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ---------------------------------------------------------------------------
// HoujinNumber
// ---------------------------------------------------------------------------

/// A 13-digit Japanese corporate number.
///
/// Digit 0 is the check digit, digits 1-12 the base number. Digit 1 selects
/// the category; see [`CodeTables::categorize`](super::CodeTables::categorize).
///
/// [`parse`](Self::parse), `FromStr` and the serde impls verify the check
/// digit. [`from_digits`](Self::from_digits) only checks the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HoujinNumber([u8; HOUJIN_NUMBER_LEN]);

impl HoujinNumber {
    /// Parse a houjin number, checking length, characters and check digit
    /// in that order.
    pub fn parse(input: &str) -> Result<Self, HoujinError> {
        let number = Self::from_digits(input)?;
        let expected = number.base().check_digit();
        if number.check_digit() != expected {
            return Err(HoujinError::InvalidCheckDigit {
                expected: digit_char(expected),
                found: digit_char(number.check_digit()),
            });
        }
        Ok(number)
    }

    /// Accept any 13 ASCII digits without looking at the check digit.
    pub fn from_digits(input: &str) -> Result<Self, HoujinError> {
        parse_digits(input).map(Self)
    }

    /// Build a number from its base, computing the check digit.
    pub fn from_base(base: BaseNumber) -> Self {
        let mut digits = [0u8; HOUJIN_NUMBER_LEN];
        digits[CHECK_DIGIT] = b'0' + base.check_digit();
        digits[CHECK_DIGIT + 1..].copy_from_slice(&base.0);
        Self(digits)
    }

    /// Parse a qualified-invoice registration number such as `T8700110005901`.
    pub fn from_registration_number(input: &str) -> Result<Self, HoujinError> {
        let digits = input
            .strip_prefix(REGISTRATION_PREFIX)
            .ok_or(HoujinError::MissingRegistrationPrefix)?;
        Self::parse(digits)
    }

    /// Render as a qualified-invoice registration number (`T` + 13 digits).
    pub fn registration_number(&self) -> String {
        format!("{REGISTRATION_PREFIX}{self}")
    }

    /// Digit 0.
    pub fn check_digit(&self) -> u8 {
        self.0[CHECK_DIGIT] - b'0'
    }

    /// Digits 1-12.
    pub fn base(&self) -> BaseNumber {
        let mut base = [0u8; BASE_NUMBER_LEN];
        base.copy_from_slice(&self.0[CHECK_DIGIT + 1..]);
        BaseNumber(base)
    }

    /// Digit 1, which decides how the rest of the number is read.
    pub fn category_selector(&self) -> u8 {
        self.0[CATEGORY_SELECTOR] - b'0'
    }

    /// Digits 1-6, read as a government body code.
    pub fn government_code(&self) -> &str {
        ascii(&self.0[GOVERNMENT_CODE])
    }

    /// Digits 1-4, read as a registry office (legal affairs bureau) code.
    pub fn registry_office_code(&self) -> &str {
        ascii(&self.0[REGISTRY_OFFICE_CODE])
    }

    /// Digits 5-6, read as an organization code.
    pub fn organization_code(&self) -> &str {
        ascii(&self.0[ORGANIZATION_CODE])
    }

    /// Digits 7-12, the serial part of government and registered numbers.
    pub fn serial(&self) -> &str {
        ascii(&self.0[SERIAL])
    }

    /// All 13 digits as a string.
    pub fn as_str(&self) -> &str {
        ascii(&self.0)
    }
}

impl fmt::Display for HoujinNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoujinNumber {
    type Err = HoujinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HoujinNumber {
    type Error = HoujinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for HoujinNumber {
    type Error = HoujinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HoujinNumber> for String {
    fn from(number: HoujinNumber) -> Self {
        number.as_str().to_owned()
    }
}

impl AsRef<str> for HoujinNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Kind of entity a houjin number was issued to, derived from digit 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// National or local government body ('0' with a government code).
    Government,
    /// Corporation with an establishment registration ('0'-'5' with known
    /// registry office and organization codes).
    RegisteredCorporation,
    /// Organization without an establishment registration ('7').
    NonRegistered,
    /// Outside the issuance scheme.
    Invalid,
}

impl Category {
    /// Whether numbers of this category are ever issued.
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Japanese name of the category as used by the National Tax Agency.
    pub fn japanese_name(self) -> &'static str {
        match self {
            Self::Government => "国の機関・地方公共団体",
            Self::RegisteredCorporation => "設立登記法人",
            Self::NonRegistered => "設立登記のない法人",
            Self::Invalid => "無効",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Government => "government",
            Self::RegisteredCorporation => "registered corporation",
            Self::NonRegistered => "non-registered organization",
            Self::Invalid => "invalid",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let n = HoujinNumber::parse("5010001192707").unwrap();
        assert_eq!(n.check_digit(), 5);
        assert_eq!(n.base().as_str(), "010001192707");
        assert_eq!(n.category_selector(), 0);
        assert_eq!(n.government_code(), "010001");
        assert_eq!(n.registry_office_code(), "0100");
        assert_eq!(n.organization_code(), "01");
        assert_eq!(n.serial(), "192707");
        assert_eq!(n.as_str(), "5010001192707");
    }

    #[test]
    fn from_base_prepends_check_digit() {
        let base = BaseNumber::parse("700110005901").unwrap();
        let n = base.with_check_digit();
        assert_eq!(n.to_string(), "8700110005901");
        assert_eq!(n.base(), base);
    }

    #[test]
    fn parse_rejects_bad_check_digit() {
        assert_eq!(
            HoujinNumber::parse("1234567890123"),
            Err(HoujinError::InvalidCheckDigit {
                expected: '9',
                found: '1'
            })
        );
    }

    #[test]
    fn from_digits_ignores_check_digit() {
        assert!(HoujinNumber::from_digits("1234567890123").is_ok());
    }

    #[test]
    fn length_checked_before_characters() {
        assert!(matches!(
            HoujinNumber::parse("abc"),
            Err(HoujinError::InvalidLength {
                expected: 13,
                actual: 3
            })
        ));
    }

    #[test]
    fn first_bad_character_reported() {
        assert_eq!(
            HoujinNumber::parse("12x456789012a"),
            Err(HoujinError::InvalidCharacter {
                position: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn multibyte_input_is_measured_in_bytes() {
        // 4 ASCII digits plus three 3-byte characters = 13 bytes
        let input = "1234１２３";
        assert_eq!(input.len(), 13);
        assert_eq!(
            HoujinNumber::parse(input),
            Err(HoujinError::InvalidCharacter {
                position: 4,
                found: '１'
            })
        );
    }

    #[test]
    fn registration_number_round_trip() {
        let n = HoujinNumber::parse("8700110005901").unwrap();
        assert_eq!(n.registration_number(), "T8700110005901");
        assert_eq!(
            HoujinNumber::from_registration_number("T8700110005901").unwrap(),
            n
        );
    }

    #[test]
    fn registration_number_needs_prefix() {
        assert_eq!(
            HoujinNumber::from_registration_number("8700110005901"),
            Err(HoujinError::MissingRegistrationPrefix)
        );
        assert!(matches!(
            HoujinNumber::from_registration_number("T870011000590"),
            Err(HoujinError::InvalidLength { .. })
        ));
    }

    #[test]
    fn from_str_and_try_from() {
        let a: HoujinNumber = "8700110005901".parse().unwrap();
        let b = HoujinNumber::try_from("8700110005901").unwrap();
        let c = HoujinNumber::try_from(String::from("8700110005901")).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(String::from(a), "8700110005901");
    }

    #[test]
    fn base_number_parse() {
        assert!(BaseNumber::parse("700110005901").is_ok());
        assert!(matches!(
            "70011000590".parse::<BaseNumber>(),
            Err(HoujinError::InvalidLength {
                expected: 12,
                actual: 11
            })
        ));
        let digits: Vec<u8> = BaseNumber::parse("012345678901").unwrap().digits().collect();
        assert_eq!(digits, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]);
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Government.to_string(), "government");
        assert_eq!(
            Category::RegisteredCorporation.to_string(),
            "registered corporation"
        );
        assert!(Category::NonRegistered.is_valid());
        assert!(!Category::Invalid.is_valid());
        assert_eq!(Category::RegisteredCorporation.japanese_name(), "設立登記法人");
    }
}
