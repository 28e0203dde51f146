//! Check digit computation over the 12-digit base number.
//!
//! The check digit is `9 - ((2 * sum_even + sum_odd) mod 9)`, where
//! `sum_even` and `sum_odd` add up the base digits at even and odd
//! 0-indexed positions.

use super::error::HoujinError;
use super::types::{BaseNumber, HoujinNumber};

/// Compute the check digit (1-9) of an already validated base number.
pub fn compute_check_digit(base: &BaseNumber) -> u8 {
    let (sum_even, sum_odd) = base
        .digits()
        .enumerate()
        .fold((0u32, 0u32), |(even, odd), (i, d)| {
            if i % 2 == 0 {
                (even + u32::from(d), odd)
            } else {
                (even, odd + u32::from(d))
            }
        });

    // (2 * sum_even + sum_odd) % 9 is in 0..=8, so the result is a single digit.
    (9 - (sum_even * 2 + sum_odd) % 9) as u8
}

/// Whether digit 0 of `number` matches the check digit of digits 1-12.
pub fn verify_check_digit(number: &HoujinNumber) -> bool {
    number.check_digit() == compute_check_digit(&number.base())
}

/// Calculate the check digit of a 12-digit base number given as a string.
///
/// Fails with [`HoujinError::InvalidLength`] unless the input is exactly
/// 12 bytes long, and with [`HoujinError::InvalidCharacter`] if any
/// character is outside '0'-'9'.
pub fn calculate_check_digit(base: &str) -> Result<char, HoujinError> {
    let base = BaseNumber::parse(base)?;
    Ok(digit_char(compute_check_digit(&base)))
}

pub(crate) fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit)
}
