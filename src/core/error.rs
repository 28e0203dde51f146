use thiserror::Error;

/// Errors returned when a houjin number or base number fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HoujinError {
    /// Input does not have the fixed width of the operation
    /// (13 for full numbers, 12 for base numbers).
    #[error("invalid houjin number length: expected {expected} digits, got {actual}")]
    InvalidLength {
        /// Required number of digits.
        expected: usize,
        /// Byte length of the input.
        actual: usize,
    },

    /// A character outside '0'-'9' was found.
    #[error("invalid character {found:?} at position {position}")]
    InvalidCharacter {
        /// Byte offset of the first offending character.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Well-formed number whose check digit does not match the base number.
    #[error("invalid check digit: expected {expected}, found {found}")]
    InvalidCheckDigit {
        /// Check digit computed from digits 1-12.
        expected: char,
        /// Digit 0 of the input.
        found: char,
    },

    /// Checksum-valid number outside the issuance scheme
    /// (unknown prefix, registry office or organization code).
    #[error("invalid houjin number: not in any issued category")]
    InvalidCategory,

    /// Invoice registration number without the leading 'T'.
    #[error("registration number must start with 'T'")]
    MissingRegistrationPrefix,
}

/// Errors returned when building a [`CodeTables`](super::CodeTables) value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CodeTableError {
    /// A table has no entries, so nothing could be generated from it.
    #[error("{table} code table is empty")]
    EmptyTable {
        /// Name of the table.
        table: &'static str,
    },

    /// A code has the wrong width or contains a non-digit.
    #[error("malformed {table} code '{code}': expected {width} ASCII digits")]
    MalformedCode {
        /// Name of the table.
        table: &'static str,
        /// The rejected code.
        code: String,
        /// Required width of codes in this table.
        width: usize,
    },

    /// A code whose leading digit can never route to its table during validation.
    #[error("{table} code '{code}' can never be matched: leading digit must be {allowed}")]
    UnreachableCode {
        /// Name of the table.
        table: &'static str,
        /// The rejected code.
        code: String,
        /// Accepted leading digits, for the message.
        allowed: &'static str,
    },

    /// Serialized tables could not be parsed.
    #[error("code table JSON error: {0}")]
    Json(String),
}
