//! Masked renderings of a PAN.
//!
//! Display formats that keep the first six and/or last four characters and
//! hide everything else:
//!
//! | Function | Output |
//! |----------|--------|
//! | [`masked`] | `1234-56**-****-3456` |
//! | [`raw_masked`] | `123456******3456` |
//! | [`full_first6`] | `1234-56**-****-****` |
//! | [`full_last4`] | `****-****-****-3456` |
//!
//! Characters that are already `*` in the PAN stay `*`.

use crate::Pan;

/// Hidden middle of a raw masked PAN (positions 6 to 11).
const RAW_MIDDLE: &str = "******";

/// Formats `first6` and `last4` with separators: `1234-56**-****-3456`.
pub fn masked(pan: &Pan) -> String {
    let first6 = pan.first6();
    let mut result = String::with_capacity(19);
    result.push_str(&first6[..4]);
    result.push('-');
    result.push_str(&first6[4..]);
    result.push_str("**-****-");
    result.push_str(&pan.last4());
    result
}

/// Formats `first6` and `last4` without separators: `123456******3456`.
pub fn raw_masked(pan: &Pan) -> String {
    let mut result = String::with_capacity(16);
    result.push_str(&pan.first6());
    result.push_str(RAW_MIDDLE);
    result.push_str(&pan.last4());
    result
}

/// Shows only the first six characters: `1234-56**-****-****`.
pub fn full_first6(pan: &Pan) -> String {
    let first6 = pan.first6();
    format!("{}-{}**-****-****", &first6[..4], &first6[4..])
}

/// Shows only the last section: `****-****-****-3456`.
pub fn full_last4(pan: &Pan) -> String {
    format!("****-****-****-{}", pan.last4())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Pan {
        Pan::from_raw("1234567890123456").unwrap()
    }

    #[test]
    fn test_masked() {
        assert_eq!(masked(&sample()), "1234-56**-****-3456");
    }

    #[test]
    fn test_raw_masked() {
        assert_eq!(raw_masked(&sample()), "123456******3456");
    }

    #[test]
    fn test_full_first6() {
        assert_eq!(full_first6(&sample()), "1234-56**-****-****");
    }

    #[test]
    fn test_full_last4() {
        assert_eq!(full_last4(&sample()), "****-****-****-3456");
    }

    #[test]
    fn test_masked_never_leaks_middle() {
        let pan = Pan::from_raw("4000123456789010").unwrap();
        for out in [
            masked(&pan),
            raw_masked(&pan),
            full_first6(&pan),
            full_last4(&pan),
        ] {
            assert!(!out.contains("345678"), "{}", out);
        }
    }

    #[test]
    fn test_existing_masks_preserved() {
        let pan = Pan::from_fragments(&["12"]).unwrap();
        assert_eq!(masked(&pan), "12**-****-****-****");
        assert_eq!(raw_masked(&pan), "12**************");
    }
}
