//! Houjin number types, check digit, code tables and validation.
//!
//! Everything here is pure: no I/O, no randomness, no shared mutable state.

mod checksum;
mod codes;
mod error;
mod types;
mod validation;

pub use checksum::{calculate_check_digit, compute_check_digit, verify_check_digit};
pub use codes::{CodeTables, GOVERNMENT_CODES, ORGANIZATION_CODES, REGISTRY_OFFICE_CODES};
pub use error::*;
pub use types::*;
pub use validation::*;
