#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(number) = s.parse::<houjin::HoujinNumber>() {
            assert_eq!(number.to_string(), s);
            assert!(houjin::validate_checksum(s).is_ok());
        }
    }
});
