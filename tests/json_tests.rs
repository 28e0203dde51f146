//! Loading custom code tables from JSON.
//!
//! Run with: `cargo test --features json --test json_tests`

#![cfg(feature = "json")]

use houjin::core::*;

const TABLES: &str = r#"{
    "government": ["000040", "000011"],
    "registry_office": ["0100", "2900", "0100"],
    "organization": ["01", "02"]
}"#;

#[test]
fn load_tables() {
    let tables = CodeTables::from_json(TABLES).unwrap();
    assert_eq!(tables.government_codes(), ["000011", "000040"]);
    assert_eq!(tables.registry_office_codes(), ["0100", "2900"]);
    assert!(tables.is_organization_code("02"));
    assert!(!tables.is_organization_code("03"));
}

#[test]
fn loaded_tables_drive_validation() {
    let tables = CodeTables::from_json(TABLES).unwrap();
    let gov = BaseNumber::parse("000040000001").unwrap().with_check_digit();
    let reg = BaseNumber::parse("290002000001").unwrap().with_check_digit();
    assert_eq!(tables.classify(gov.as_str()), Ok(Category::Government));
    assert_eq!(
        tables.classify(reg.as_str()),
        Ok(Category::RegisteredCorporation)
    );
    assert_eq!(
        tables.classify("5010001192707"),
        Ok(Category::RegisteredCorporation)
    );
    assert_eq!(
        tables.validate_number("1180301018771"),
        Err(HoujinError::InvalidCategory)
    );
}

#[test]
fn syntax_error() {
    let err = CodeTables::from_json("{not json").unwrap_err();
    assert!(matches!(err, CodeTableError::Json(_)));
}

#[test]
fn missing_table() {
    let err = CodeTables::from_json(r#"{"government": ["000011"], "organization": ["01"]}"#)
        .unwrap_err();
    assert!(matches!(err, CodeTableError::Json(_)));
}

#[test]
fn rule_violations_keep_their_kind() {
    let err = CodeTables::from_json(
        r#"{"government": ["000011"], "registry_office": ["7100"], "organization": ["01"]}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CodeTableError::UnreachableCode {
            table: "registry office",
            ..
        }
    ));

    let err = CodeTables::from_json(
        r#"{"government": [], "registry_office": ["0100"], "organization": ["01"]}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CodeTableError::EmptyTable {
            table: "government"
        }
    ));
}
