//! Fuzz target for the checksum.
//!
//! Tests that the check digit always completes a valid sequence.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pan_info::luhn;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let _ = luhn::validate(&digits);

    if digits.len() <= 18 {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "adding check digit should make valid");
    }

    if digits.len() == 15 {
        let body: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        if let Ok(pan) = pan_info::parse::complete(&body) {
            assert!(pan.validate().is_valid());
        }
    }
});
