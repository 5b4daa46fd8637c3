//! Fuzz target for PAN construction.
//!
//! Tests that every constructor rejects bad input with an error, never a
//! panic, and that accepted PANs hold their invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pan_info::{from_dashed, from_fragments, from_masked, from_raw, Pan, ValidationOutcome};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    fragments: Vec<&'a str>,
    first6: &'a str,
    last4: &'a str,
}

fn check(pan: &Pan) {
    let raw = pan.raw_pan();
    assert_eq!(raw.len(), 16);
    assert!(raw.bytes().all(|b| b.is_ascii_digit() || b == b'*'));
    assert_eq!(from_raw(&raw).as_ref(), Ok(pan), "raw round trip");
    assert_eq!(from_dashed(&pan.pan()).as_ref(), Ok(pan), "dashed round trip");

    if pan.is_masked() {
        assert_eq!(pan.validate(), ValidationOutcome::CannotValidateMasked);
    }
    let _ = pan.masked();
    let _ = format!("{:?}", pan);
}

fuzz_target!(|input: Input| {
    let results = [
        from_raw(input.text),
        from_dashed(input.text),
        from_fragments(&input.fragments),
        from_masked(input.first6, input.last4),
    ];

    for pan in results.iter().flatten() {
        check(pan);
    }
});
