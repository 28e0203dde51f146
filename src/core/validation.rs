use super::codes::CodeTables;
use super::error::HoujinError;
use super::types::{Category, HoujinNumber};

/// Check length, characters and check digit of a houjin number, in that order.
///
/// Does not look at the category; see [`validate_number`].
pub fn validate_checksum(input: &str) -> Result<(), HoujinError> {
    HoujinNumber::parse(input).map(|_| ())
}

/// Fully validate a houjin number against the built-in code tables.
///
/// Runs [`validate_checksum`] first and returns its error unchanged, then
/// fails with [`HoujinError::InvalidCategory`] if the number is outside
/// the issuance scheme.
pub fn validate_number(input: &str) -> Result<(), HoujinError> {
    CodeTables::builtin().validate_number(input)
}

/// Validate against the built-in code tables and return the category.
pub fn classify(input: &str) -> Result<Category, HoujinError> {
    CodeTables::builtin().classify(input)
}

impl CodeTables {
    /// Category of a checksum-valid number under these tables.
    ///
    /// Digit 1 selects the rule:
    /// - '0': government if digits 1-6 are a government code, otherwise read
    ///   as a registered corporation
    /// - '1'-'5': registered corporation if digits 1-4 are a registry office
    ///   code and digits 5-6 an organization code
    /// - '7': non-registered organization
    /// - anything else, or a failed code lookup: [`Category::Invalid`]
    pub fn categorize(&self, number: &HoujinNumber) -> Category {
        match number.category_selector() {
            0 if self.is_government_code(number.government_code()) => Category::Government,
            0..=5 if self.is_registered(number) => Category::RegisteredCorporation,
            7 => Category::NonRegistered,
            _ => Category::Invalid,
        }
    }

    /// Validate `input` against these tables and return its category.
    pub fn classify(&self, input: &str) -> Result<Category, HoujinError> {
        let number = HoujinNumber::parse(input)?;
        match self.categorize(&number) {
            Category::Invalid => Err(HoujinError::InvalidCategory),
            category => Ok(category),
        }
    }

    /// Validate `input` against these tables.
    pub fn validate_number(&self, input: &str) -> Result<(), HoujinError> {
        self.classify(input).map(|_| ())
    }

    fn is_registered(&self, number: &HoujinNumber) -> bool {
        self.is_registry_office_code(number.registry_office_code())
            && self.is_organization_code(number.organization_code())
    }
}

impl HoujinNumber {
    /// Category under the built-in code tables.
    pub fn category(&self) -> Category {
        CodeTables::builtin().categorize(self)
    }
}
