//! Code tables behind the category rules.
//!
//! Government body codes (6 digits), registry office codes (4 digits) and
//! organization codes (2 digits). [`CodeTables`] bundles the three sets into
//! one immutable value that the validator and generator read from.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::error::CodeTableError;

/// Built-in government body codes. Sorted for binary search.
pub static GOVERNMENT_CODES: &[&str] = &["000011", "000012", "000013", "000020", "000030"];

/// Built-in organization codes. Sorted for binary search.
pub static ORGANIZATION_CODES: &[&str] = &["01", "02", "03", "04", "05"];

/// Built-in registry office codes: legal affairs bureau (first two digits)
/// and branch office (last two). Sorted for binary search.
///
/// This is an approximation of the bureau/branch grid, not the official
/// registry office list. Callers that need the authoritative codes should
/// pass their own [`CodeTables`].
pub static REGISTRY_OFFICE_CODES: &[&str] = &[
    "0100", "0101", "0102", "0103", "0104", "0105", "0106", "0107", "0108", "0109", "0110", "0200",
    "0201", "0202", "0203", "0204", "0205", "0206", "0300", "0301", "0302", "0303", "0304", "0305",
    "0306", "0307", "0308", "0309", "0310", "0311", "0312", "0313", "0400", "0401", "0402", "0403",
    "0404", "0405", "0406", "0407", "0408", "0409", "0500", "0501", "0502", "0503", "0504", "0505",
    "0600", "0601", "0602", "0603", "0604", "0605", "0606", "0607", "0608", "0609", "0610", "0611",
    "0612", "0700", "0701", "0702", "0703", "0704", "0705", "0706", "0707", "0708", "0800", "0801",
    "0802", "0803", "0804", "0900", "0901", "0902", "0903", "0904", "0905", "0906", "0907", "0908",
    "0909", "0910", "0911", "1000", "1001", "1002", "1003", "1004", "1005", "1006", "1007", "1100",
    "1101", "1102", "1103", "1200", "1201", "1202", "1203", "1204", "1205", "1206", "1207", "1208",
    "1209", "1210", "1300", "1301", "1302", "1303", "1304", "1305", "1306", "1400", "1401", "1402",
    "1403", "1404", "1405", "1406", "1407", "1408", "1409", "1410", "1411", "1412", "1413", "1500",
    "1501", "1502", "1503", "1504", "1505", "1506", "1507", "1508", "1509", "1600", "1601", "1602",
    "1603", "1604", "1605", "1700", "1701", "1702", "1703", "1704", "1705", "1706", "1707", "1708",
    "1709", "1710", "1711", "1712", "1800", "1801", "1802", "1803", "1804", "1805", "1806", "1807",
    "1808", "1900", "1901", "1902", "1903", "1904", "2000", "2001", "2002", "2003", "2004", "2005",
    "2006", "2007", "2008", "2009", "2010", "2011", "2100", "2101", "2102", "2103", "2104", "2105",
    "2106", "2107", "2200", "2201", "2202", "2203", "2300", "2301", "2302", "2303", "2304", "2305",
    "2306", "2307", "2308", "2309", "2310", "2400", "2401", "2402", "2403", "2404", "2405", "2406",
    "2500", "2501", "2502", "2503", "2504", "2505", "2506", "2507", "2508", "2509", "2510", "2511",
    "2512", "2513", "2600", "2601", "2602", "2603", "2604", "2605", "2606", "2607", "2608", "2609",
    "2700", "2701", "2702", "2703", "2704", "2705", "2800", "2801", "2802", "2803", "2804", "2805",
    "2806", "2807", "2808", "2809", "2810", "2811", "2812", "2900", "2901", "2902", "2903", "2904",
    "2905", "2906", "2907", "2908", "3000", "3001", "3002", "3003", "3004", "3100", "3101", "3102",
    "3103", "3104", "3105", "3106", "3107", "3108", "3109", "3110", "3111", "3200", "3201", "3202",
    "3203", "3204", "3205", "3206", "3207", "3300", "3301", "3302", "3303", "3400", "3401", "3402",
    "3403", "3404", "3405", "3406", "3407", "3408", "3409", "3410", "3500", "3501", "3502", "3503",
    "3504", "3505", "3506", "3600", "3601", "3602", "3603", "3604", "3605", "3606", "3607", "3608",
    "3609", "3610", "3611", "3612", "3613", "3700", "3701", "3702", "3703", "3704", "3705", "3706",
    "3707", "3708", "3709", "3800", "3801", "3802", "3803", "3804", "3805", "3900", "3901", "3902",
    "3903", "3904", "3905", "3906", "3907", "3908", "3909", "3910", "3911", "3912", "4000", "4001",
    "4002", "4003", "4004", "4005", "4006", "4007", "4008", "4100", "4101", "4102", "4103", "4104",
    "4200", "4201", "4202", "4203", "4204", "4205", "4206", "4207", "4208", "4209", "4210", "4211",
    "4300", "4301", "4302", "4303", "4304", "4305", "4306", "4307", "4400", "4401", "4402", "4403",
    "4500", "4501", "4502", "4503", "4504", "4505", "4506", "4507", "4508", "4509", "4510", "4600",
    "4601", "4602", "4603", "4604", "4605", "4606", "4700", "4701", "4702", "4703", "4704", "4705",
    "4706", "4707", "4708", "4709", "4710", "4711", "4712", "4713", "4800", "4801", "4802", "4803",
    "4804", "4805", "4806", "4807", "4808", "4809", "4900", "4901", "4902", "4903", "4904", "4905",
    "5000", "5001", "5002", "5003", "5004", "5005", "5006", "5007", "5008", "5009", "5010", "5011",
    "5012", "5100", "5101", "5102", "5103", "5104", "5105", "5106", "5107", "5108", "5200", "5201",
    "5202", "5203", "5204", "5300", "5301", "5302", "5303", "5304", "5305", "5306", "5307", "5308",
    "5309", "5310", "5311", "5400", "5401", "5402", "5403", "5404", "5405", "5406", "5407", "5500",
    "5501", "5502", "5503", "5600", "5601", "5602", "5603", "5604", "5605", "5606", "5607", "5608",
    "5609", "5610", "5700", "5701", "5702", "5703", "5704", "5705", "5706", "5800", "5801", "5802",
    "5803", "5804", "5805", "5806", "5807", "5808", "5809", "5810", "5811", "5812", "5813", "5900",
    "5901", "5902", "5903", "5904", "5905", "5906", "5907", "5908", "5909",
];

/// Shape and reachability rules for one table.
struct TableSpec {
    name: &'static str,
    width: usize,
    leading: std::ops::RangeInclusive<u8>,
    allowed: &'static str,
}

// Government codes are only consulted when digit 1 is '0'; registry office
// codes only when digit 1 is '0'-'5'.
const GOVERNMENT: TableSpec = TableSpec {
    name: "government",
    width: 6,
    leading: b'0'..=b'0',
    allowed: "'0'",
};
const REGISTRY_OFFICE: TableSpec = TableSpec {
    name: "registry office",
    width: 4,
    leading: b'0'..=b'5',
    allowed: "'0'-'5'",
};
const ORGANIZATION: TableSpec = TableSpec {
    name: "organization",
    width: 2,
    leading: b'0'..=b'9',
    allowed: "'0'-'9'",
};

impl TableSpec {
    fn build<I, S>(&self, codes: I) -> Result<Vec<String>, CodeTableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Vec::new();
        for code in codes {
            let code: String = code.into();
            if code.len() != self.width || !code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CodeTableError::MalformedCode {
                    table: self.name,
                    code,
                    width: self.width,
                });
            }
            if !self.leading.contains(&code.as_bytes()[0]) {
                return Err(CodeTableError::UnreachableCode {
                    table: self.name,
                    code,
                    allowed: self.allowed,
                });
            }
            table.push(code);
        }
        if table.is_empty() {
            return Err(CodeTableError::EmptyTable { table: self.name });
        }
        table.sort_unstable();
        table.dedup();
        Ok(table)
    }
}

static BUILTIN: LazyLock<CodeTables> = LazyLock::new(|| CodeTables {
    government: owned(GOVERNMENT_CODES),
    registry_office: owned(REGISTRY_OFFICE_CODES),
    organization: owned(ORGANIZATION_CODES),
});

fn owned(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| (*c).to_owned()).collect()
}

fn contains(table: &[String], code: &str) -> bool {
    table.binary_search_by(|c| c.as_str().cmp(code)).is_ok()
}

/// The government, registry office and organization code sets.
///
/// Every table is non-empty, sorted and free of duplicates, and every code
/// can be reached by the category rules, so numbers generated from a
/// `CodeTables` always validate against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCodeTables", into = "RawCodeTables")]
pub struct CodeTables {
    government: Vec<String>,
    registry_office: Vec<String>,
    organization: Vec<String>,
}

/// Unchecked serde shape of [`CodeTables`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCodeTables {
    government: Vec<String>,
    registry_office: Vec<String>,
    organization: Vec<String>,
}

impl CodeTables {
    /// Build custom tables.
    ///
    /// Codes are sorted and de-duplicated. Fails if a table is empty, a code
    /// has the wrong width, or a code could never be matched (government
    /// codes must start with '0', registry office codes with '0'-'5').
    pub fn new<G, R, O>(
        government: G,
        registry_office: R,
        organization: O,
    ) -> Result<Self, CodeTableError>
    where
        G: IntoIterator,
        G::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Ok(Self {
            government: GOVERNMENT.build(government)?,
            registry_office: REGISTRY_OFFICE.build(registry_office)?,
            organization: ORGANIZATION.build(organization)?,
        })
    }

    /// The built-in tables, shared process-wide.
    pub fn builtin() -> &'static CodeTables {
        &BUILTIN
    }

    /// Parse tables from JSON of the form
    /// `{"government": [...], "registry_office": [...], "organization": [...]}`.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, CodeTableError> {
        let raw: RawCodeTables =
            serde_json::from_str(json).map_err(|e| CodeTableError::Json(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Whether `code` is a known government body code.
    pub fn is_government_code(&self, code: &str) -> bool {
        contains(&self.government, code)
    }

    /// Whether `code` is a known registry office code.
    pub fn is_registry_office_code(&self, code: &str) -> bool {
        contains(&self.registry_office, code)
    }

    /// Whether `code` is a known organization code.
    pub fn is_organization_code(&self, code: &str) -> bool {
        contains(&self.organization, code)
    }

    /// Government body codes, sorted.
    pub fn government_codes(&self) -> &[String] {
        &self.government
    }

    /// Registry office codes, sorted.
    pub fn registry_office_codes(&self) -> &[String] {
        &self.registry_office
    }

    /// Organization codes, sorted.
    pub fn organization_codes(&self) -> &[String] {
        &self.organization
    }
}

impl Default for CodeTables {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl TryFrom<RawCodeTables> for CodeTables {
    type Error = CodeTableError;

    fn try_from(raw: RawCodeTables) -> Result<Self, Self::Error> {
        Self::new(raw.government, raw.registry_office, raw.organization)
    }
}

impl From<CodeTables> for RawCodeTables {
    fn from(tables: CodeTables) -> Self {
        Self {
            government: tables.government,
            registry_office: tables.registry_office,
            organization: tables.organization,
        }
    }
}
