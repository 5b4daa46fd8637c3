//! # pan_info
//!
//! Construction, issuer detection, checksum validation and masking of
//! 16-digit Primary Account Numbers (PANs).
//!
//! A [`Pan`] is four sections of four characters. Every character is a
//! digit or the mask character `*`. Short input is padded with `*`, so a
//! PAN can be partial: `1234-56**-****-3456` is a valid value.
//!
//! ## Quick Start
//!
//! ```rust
//! use pan_info::{IssuerType, Pan, ValidationOutcome};
//!
//! let pan = Pan::from_raw("4000000000000002").unwrap();
//! assert_eq!(pan.card_type(), IssuerType::Visa);
//! assert_eq!(pan.pan(), "4000-0000-0000-0002");
//! assert_eq!(pan.masked(), "4000-00**-****-0002");
//!
//! // Safe for logging - Display never shows the middle digits
//! println!("Card: {}", pan);
//! ```
//!
//! ## Constructors
//!
//! ```rust
//! use pan_info::Pan;
//!
//! let a = Pan::from_fragments(&["1234", "56", "", "3456"]).unwrap();
//! let b = Pan::from_dashed("1234-56**-****-3456").unwrap();
//! let c = Pan::from_raw("123456******3456").unwrap();
//! let d = Pan::from_masked("123456", "3456").unwrap();
//!
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//! assert_eq!(c, d);
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use pan_info::{Pan, ValidationOutcome};
//!
//! assert_eq!(Pan::from_raw("0000000000000019").unwrap().validate(), ValidationOutcome::Valid);
//! assert_eq!(Pan::from_raw("0000000000000001").unwrap().validate(), ValidationOutcome::InvalidChecksum);
//! assert_eq!(Pan::from_masked("123456", "3456").unwrap().validate(), ValidationOutcome::CannotValidateMasked);
//! ```
//!
//! ## Formats
//!
//! | Accessor | Output for `1234567890123456` |
//! |----------|-------------------------------|
//! | `pan()` | `1234-5678-9012-3456` |
//! | `raw_pan()` | `1234567890123456` |
//! | `masked()` | `1234-56**-****-3456` |
//! | `raw_masked()` | `123456******3456` |
//! | `full_first6()` | `1234-56**-****-****` |
//! | `full_last4()` | `****-****-****-3456` |
//! | `first6()` | `123456` |
//! | `last4()` | `3456` |
//! | `checksum()` | `6` |
//!
//! ## Supported Issuers
//!
//! | Issuer | Prefix |
//! |--------|--------|
//! | Visa | 4 |
//! | MasterCard | 51-55, 2221-2720 |
//! | American Express | 34, 37 |
//! | JCB | 3528-3589 |
//! | UnionPay | 62, 81 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for issuer, outcome and summaries |
//! | `parallel` | Rayon-based batch parsing |
//! | `generate` | Random test PAN generation |
//! | `cli` | `pan-info` command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod detect;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod parse;
pub mod section;
pub mod stream;

// Re-export main types at crate root
pub use batch::BatchParser;
pub use card::{IssuerType, Pan, PanSummary, PAN_LENGTH};
pub use error::{ErrorKind, PanError, Result, SectionFault};
pub use luhn::ValidationOutcome;
pub use parse::{from_dashed, from_fragments, from_masked, from_raw};
pub use section::MASK_CHAR;
