#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let _ = houjin::validate_number(s);
        let _ = houjin::calculate_check_digit(s);
        let _ = houjin::HoujinNumber::from_registration_number(s);
    }
});
