//! Test PAN generation.
//!
//! Builds 16-digit PANs that pass the checksum. These numbers are for tests
//! only and are not connected to real accounts.
//!
//! # Example
//!
//! ```
//! use pan_info::generate::generate_pan_deterministic;
//! use pan_info::{IssuerType, ValidationOutcome};
//!
//! // No randomness required
//! let pan = generate_pan_deterministic(IssuerType::Visa);
//! assert_eq!(pan.card_type(), IssuerType::Visa);
//! assert_eq!(pan.validate(), ValidationOutcome::Valid);
//! ```

use crate::card::PAN_LENGTH;
use crate::error::{PanError, SectionFault};
use crate::section::SECTION_LEN;
use crate::{luhn, IssuerType, Pan};

#[cfg(feature = "generate")]
use rand::Rng;

const VISA_PREFIX: &str = "4";
const MASTERCARD_PREFIX: &str = "51";
const AMEX_PREFIX: &str = "34";
const JCB_PREFIX: &str = "3528";
const UNIONPAY_PREFIX: &str = "62";
// Matches no rule
const UNKNOWN_PREFIX: &str = "9";

/// Returns a prefix that classifies as `issuer`.
pub const fn prefix_for_issuer(issuer: IssuerType) -> &'static str {
    match issuer {
        IssuerType::Visa => VISA_PREFIX,
        IssuerType::MasterCard => MASTERCARD_PREFIX,
        IssuerType::AmericanExpress => AMEX_PREFIX,
        IssuerType::Jcb => JCB_PREFIX,
        IssuerType::UnionPay => UNIONPAY_PREFIX,
        IssuerType::Unknown => UNKNOWN_PREFIX,
    }
}

/// Generates a valid PAN for `issuer` with zero-filled middle digits.
///
/// Same input, same output.
pub fn generate_pan_deterministic(issuer: IssuerType) -> Pan {
    let digits = prefix_digits(prefix_for_issuer(issuer));
    // Built-in prefixes are short digit strings
    finish(digits.unwrap_or_default(), |_| 0)
}

/// Generates a valid PAN that starts with `prefix`, zero-filling the rest.
///
/// The prefix must be at most 15 digits.
///
/// # Example
///
/// ```
/// use pan_info::generate::generate_pan_deterministic_with_prefix;
///
/// let pan = generate_pan_deterministic_with_prefix("411111").unwrap();
/// assert!(pan.raw_pan().starts_with("411111"));
/// assert!(generate_pan_deterministic_with_prefix("41x").is_err());
/// ```
pub fn generate_pan_deterministic_with_prefix(prefix: &str) -> Result<Pan, PanError> {
    Ok(finish(prefix_digits(prefix)?, |_| 0))
}

/// Generates a random valid PAN for `issuer`.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
#[cfg(feature = "generate")]
pub fn generate_pan(issuer: IssuerType) -> Pan {
    let mut rng = rand::thread_rng();
    let digits = prefix_digits(prefix_for_issuer(issuer)).unwrap_or_default();
    finish(digits, |_| rng.gen_range(0..10))
}

/// Generates a random valid PAN that starts with `prefix`.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_pan_with_prefix(prefix: &str) -> Result<Pan, PanError> {
    let mut rng = rand::thread_rng();
    generate_pan_with_rng(prefix, &mut rng)
}

/// Generates a valid PAN using a provided RNG.
///
/// Useful for reproducible generation with seeded RNGs.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_pan_with_rng<R: Rng>(prefix: &str, rng: &mut R) -> Result<Pan, PanError> {
    let digits = prefix_digits(prefix)?;
    Ok(finish(digits, |_| rng.gen_range(0..10)))
}

/// Generates `count` random valid PANs for `issuer`.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_pans(issuer: IssuerType, count: usize) -> Vec<Pan> {
    (0..count).map(|_| generate_pan(issuer)).collect()
}

fn prefix_digits(prefix: &str) -> Result<Vec<u8>, PanError> {
    if prefix.len() >= PAN_LENGTH {
        return Err(PanError::RawFormat {
            length: prefix.len(),
        });
    }

    prefix
        .chars()
        .enumerate()
        .map(|(i, c)| {
            c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                PanError::from(SectionFault::InvalidCharacter {
                    section: i / SECTION_LEN,
                    position: i % SECTION_LEN,
                    character: c,
                })
            })
        })
        .collect()
}

/// Fills the body up to 15 digits, appends the check digit and builds the PAN.
fn finish(mut digits: Vec<u8>, mut fill: impl FnMut(usize) -> u8) -> Pan {
    while digits.len() < PAN_LENGTH - 1 {
        digits.push(fill(digits.len()));
    }
    let check = luhn::generate_check_digit(&digits);
    digits.push(check);

    let mut sections = [[0u8; SECTION_LEN]; PAN_LENGTH / SECTION_LEN];
    for (i, &d) in digits.iter().enumerate() {
        sections[i / SECTION_LEN][i % SECTION_LEN] = b'0' + d;
    }
    Pan::from_sections(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationOutcome;

    #[test]
    fn test_generate_deterministic_all_issuers() {
        for issuer in IssuerType::KNOWN {
            let pan = generate_pan_deterministic(issuer);
            assert_eq!(pan.card_type(), issuer);
            assert!(pan.raw_pan().starts_with(prefix_for_issuer(issuer)));
            assert_eq!(pan.validate(), ValidationOutcome::Valid);
        }
    }

    #[test]
    fn test_generate_deterministic_unknown() {
        let pan = generate_pan_deterministic(IssuerType::Unknown);
        assert_eq!(pan.card_type(), IssuerType::Unknown);
        assert_eq!(pan.validate(), ValidationOutcome::Valid);
    }

    #[test]
    fn test_generate_deterministic_is_reproducible() {
        assert_eq!(
            generate_pan_deterministic(IssuerType::Jcb),
            generate_pan_deterministic(IssuerType::Jcb)
        );
    }

    #[test]
    fn test_generate_deterministic_with_prefix() {
        let pan = generate_pan_deterministic_with_prefix("000000000000010").unwrap();
        assert_eq!(pan.raw_pan(), "0000000000000108");

        assert_eq!(
            generate_pan_deterministic_with_prefix("1234567890123456")
                .unwrap_err()
                .kind(),
            crate::error::ErrorKind::RawFormat
        );
        assert_eq!(
            generate_pan_deterministic_with_prefix("12*4").unwrap_err(),
            PanError::SectionFormat(SectionFault::InvalidCharacter {
                section: 0,
                position: 2,
                character: '*'
            })
        );
    }

    #[cfg(feature = "generate")]
    mod random_tests {
        use super::*;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        #[test]
        fn test_generate_pan_all_issuers() {
            for issuer in IssuerType::KNOWN {
                let pan = generate_pan(issuer);
                assert_eq!(pan.card_type(), issuer);
                assert_eq!(pan.validate(), ValidationOutcome::Valid);
            }
        }

        #[test]
        fn test_generate_pans_are_unique() {
            let pans = generate_pans(IssuerType::Visa, 100);
            let unique: std::collections::HashSet<String> =
                pans.iter().map(Pan::raw_pan).collect();
            assert!(unique.len() >= 90);
        }

        #[test]
        fn test_seeded_rng_is_reproducible() {
            let a = generate_pan_with_rng("5", &mut StdRng::seed_from_u64(7)).unwrap();
            let b = generate_pan_with_rng("5", &mut StdRng::seed_from_u64(7)).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.validate(), ValidationOutcome::Valid);
        }

        #[test]
        fn test_generate_with_prefix() {
            let pan = generate_pan_with_prefix("3589").unwrap();
            assert_eq!(pan.card_type(), IssuerType::Jcb);
            assert!(generate_pan_with_prefix("35a").is_err());
        }
    }
}
