//! Luhn (mod 10) checksum over a 16-character PAN.
//!
//! The last digit is the declared check digit. The 15 digits before it are
//! weighted from the most significant end: index 0 is taken as-is, index 1
//! is doubled, index 2 as-is, and so on. A doubled digit above 9 has 9
//! subtracted. The number is valid when the weighted sum plus the check
//! digit is a multiple of 10.
//!
//! Masked PANs are never validated.

use crate::card::PAN_LENGTH;
use crate::section::MASK_BYTE;
use crate::Pan;

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Result of checking a PAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationOutcome {
    /// The checksum holds.
    Valid,
    /// The check digit does not match the other digits.
    InvalidChecksum,
    /// At least one character is masked, so there is nothing to check.
    CannotValidateMasked,
}

impl ValidationOutcome {
    /// Returns true only for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Short description of the outcome.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::InvalidChecksum => "invalid checksum (Luhn check failed)",
            Self::CannotValidateMasked => "masked pan cannot be validated",
        }
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Checks the PAN's digits.
///
/// # Example
///
/// ```
/// use pan_info::{Pan, ValidationOutcome};
/// use pan_info::luhn::validate_pan;
///
/// let pan = Pan::from_raw("0000000000000019").unwrap();
/// assert_eq!(validate_pan(&pan), ValidationOutcome::Valid);
///
/// let pan = Pan::from_raw("0000000000000001").unwrap();
/// assert_eq!(validate_pan(&pan), ValidationOutcome::InvalidChecksum);
///
/// let pan = Pan::from_masked("123456", "3456").unwrap();
/// assert_eq!(validate_pan(&pan), ValidationOutcome::CannotValidateMasked);
/// ```
pub fn validate_pan(pan: &Pan) -> ValidationOutcome {
    let chars = pan.chars();
    if chars.contains(&MASK_BYTE) {
        return ValidationOutcome::CannotValidateMasked;
    }

    let mut digits = [0u8; PAN_LENGTH];
    for (d, &c) in digits.iter_mut().zip(chars.iter()) {
        *d = c - b'0';
    }

    if validate(&digits) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::InvalidChecksum
    }
}

/// Computes the weighted sum of the digits that precede the check digit.
///
/// # Arguments
///
/// * `body` - Digits (0-9) without the check digit.
///
/// # Returns
///
/// The sum, not reduced modulo 10.
#[inline]
pub fn checksum_sum(body: &[u8]) -> u32 {
    body.iter()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Validates a digit sequence whose last element is the check digit.
///
/// # Example
///
/// ```
/// use pan_info::luhn::validate;
///
/// assert!(validate(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 8]));
/// assert!(!validate(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    let Some((&check, body)) = digits.split_last() else {
        return false;
    };

    (checksum_sum(body) + check as u32) % 10 == 0
}

/// Returns the check digit that makes `body` followed by it valid.
///
/// # Example
///
/// ```
/// use pan_info::luhn::{generate_check_digit, validate};
///
/// let body = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5];
/// let check = generate_check_digit(&body);
///
/// let mut full = body.to_vec();
/// full.push(check);
/// assert!(validate(&full));
/// ```
#[inline]
pub fn generate_check_digit(body: &[u8]) -> u8 {
    ((10 - (checksum_sum(body) % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pan(raw: &str) -> Pan {
        Pan::from_raw(raw).unwrap()
    }

    #[test]
    fn test_validate_pan() {
        let cases = [
            ("0000000000000000", ValidationOutcome::Valid),
            ("0000000000000001", ValidationOutcome::InvalidChecksum),
            ("00000000000000*0", ValidationOutcome::CannotValidateMasked),
            ("0000000000000019", ValidationOutcome::Valid),
            ("0000000000000108", ValidationOutcome::Valid),
        ];

        for (raw, expected) in cases {
            assert_eq!(validate_pan(&pan(raw)), expected, "{}", raw);
        }
    }

    #[test]
    fn test_check_digit_position_weights() {
        // Index 13 is doubled, index 14 is not
        assert!(validate(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 8]));
        assert!(validate(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 9]));
        // Doubled 9 counts as 9
        assert!(validate(&[0, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]));
    }

    #[test]
    fn test_sample_pan() {
        // 68 from the body plus 6 leaves 74
        assert_eq!(checksum_sum(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5]), 68);
        assert_eq!(
            validate_pan(&pan("1234567890123456")),
            ValidationOutcome::InvalidChecksum
        );
        assert_eq!(validate_pan(&pan("1234567890123452")), ValidationOutcome::Valid);
    }

    #[test]
    fn test_generate_check_digit() {
        let body = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5];
        assert_eq!(generate_check_digit(&body), 2);

        let body = [0; 15];
        assert_eq!(generate_check_digit(&body), 0);
    }

    #[test]
    fn test_any_mask_blocks_validation() {
        for i in 0..PAN_LENGTH {
            let mut raw = *b"0000000000000000";
            raw[i] = b'*';
            let raw = std::str::from_utf8(&raw).unwrap();
            assert_eq!(
                validate_pan(&pan(raw)),
                ValidationOutcome::CannotValidateMasked,
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(!validate(&[]));
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(ValidationOutcome::Valid.is_valid());
        assert!(!ValidationOutcome::InvalidChecksum.is_valid());
        assert!(!ValidationOutcome::CannotValidateMasked.is_valid());
        assert_eq!(
            ValidationOutcome::CannotValidateMasked.to_string(),
            "masked pan cannot be validated"
        );
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }
}
