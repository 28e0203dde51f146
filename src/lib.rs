//! # houjin
//!
//! Validation and generation of Japanese corporate numbers (法人番号,
//! houjin bangou): 13-digit identifiers issued by the National Tax Agency
//! to government bodies, registered corporations and non-registered
//! organizations.
//!
//! A number is a check digit followed by a 12-digit base number. The check
//! digit is `9 - ((2 * sum_even + sum_odd) mod 9)` over the base digits.
//! On top of the checksum, digit 1 decides which code tables the number
//! must match.
//!
//! ## Quick Start
//!
//! ```rust
//! use houjin::{
//!     Category, HoujinError, HoujinNumber, calculate_check_digit, validate_checksum,
//! };
//!
//! assert_eq!(calculate_check_digit("700110005901").unwrap(), '8');
//! assert!(validate_checksum("8700110005901").is_ok());
//! assert!(matches!(
//!     validate_checksum("1234567890123"),
//!     Err(HoujinError::InvalidCheckDigit { .. })
//! ));
//!
//! let number: HoujinNumber = "5010001192707".parse().unwrap();
//! assert_eq!(number.category(), Category::RegisteredCorporation);
//! assert_eq!(number.registration_number(), "T5010001192707");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, check digit, code tables, validation |
//! | `generate` (default) | Random number generation with `rand` |
//! | `json` | Load custom code tables from JSON |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
