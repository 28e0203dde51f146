//! Random generation of valid houjin numbers.
//!
//! [`Generator`] takes its code tables and random source explicitly. The
//! free functions here are shortcuts over the built-in tables and the
//! thread-local RNG.
//!
//! # Example
//!
//! ```rust
//! use houjin::generate::*;
//! use houjin::{Category, validate_number};
//!
//! let n = generate_government();
//! assert_eq!(n.category(), Category::Government);
//! assert!(validate_number(n.as_str()).is_ok());
//! ```

mod generator;

pub use generator::Generator;

use crate::core::HoujinNumber;

/// Random number of any category (10% government, 10% non-registered,
/// 80% registered corporation).
pub fn generate() -> HoujinNumber {
    Generator::thread_local().generate()
}

/// Random government body number.
pub fn generate_government() -> HoujinNumber {
    Generator::thread_local().government()
}

/// Random registered corporation number.
pub fn generate_registered_corporation() -> HoujinNumber {
    Generator::thread_local().registered_corporation()
}

/// Random non-registered organization number.
pub fn generate_non_registered() -> HoujinNumber {
    Generator::thread_local().non_registered()
}
