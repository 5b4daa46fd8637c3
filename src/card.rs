//! Core PAN types.
//!
//! This module provides the `IssuerType` enum for identifying card networks
//! and the immutable `Pan` value with its formatting accessors.

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroize;

use crate::error::PanError;
use crate::luhn::ValidationOutcome;
use crate::section::{MASK_BYTE, SECTION_COUNT, SECTION_LEN};

/// Number of characters in a PAN.
pub const PAN_LENGTH: usize = SECTION_COUNT * SECTION_LEN;

/// Supported card issuers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssuerType {
    /// No rule matched, or the prefix is masked.
    #[default]
    Unknown,
    /// Visa - Prefix 4
    Visa,
    /// MasterCard - Prefix 51-55, 2221-2720
    MasterCard,
    /// JCB - Prefix 3528-3589
    Jcb,
    /// American Express - Prefix 34, 37
    AmericanExpress,
    /// China UnionPay - Prefix 62, 81
    UnionPay,
}

impl IssuerType {
    /// Every known issuer, in classification order.
    pub const KNOWN: [IssuerType; 5] = [
        Self::Visa,
        Self::MasterCard,
        Self::AmericanExpress,
        Self::Jcb,
        Self::UnionPay,
    ];

    /// Returns a human-readable name for the issuer.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Jcb => "JCB",
            Self::AmericanExpress => "American Express",
            Self::UnionPay => "UnionPay",
        }
    }

    /// Returns true for every variant except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for IssuerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A Primary Account Number split into four sections of four characters.
///
/// Every character is a decimal digit or `*`. The issuer is resolved once
/// when the value is built and never changes. There is no way to mutate a
/// `Pan` after construction; build one with [`Pan::from_fragments`],
/// [`Pan::from_dashed`], [`Pan::from_raw`] or [`Pan::from_masked`].
///
/// `Debug` and `Display` print the masked form only. The character buffer
/// is zeroed on drop.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pan {
    chars: [u8; PAN_LENGTH],
    issuer: IssuerType,
}

impl Pan {
    /// Assembles a PAN from already validated sections.
    pub(crate) fn from_sections(sections: [[u8; SECTION_LEN]; SECTION_COUNT]) -> Self {
        let mut chars = [MASK_BYTE; PAN_LENGTH];
        for (i, section) in sections.iter().enumerate() {
            chars[i * SECTION_LEN..(i + 1) * SECTION_LEN].copy_from_slice(section);
        }
        let issuer = crate::detect::detect_issuer(&chars[..SECTION_LEN]);
        Self { chars, issuer }
    }

    /// Builds a PAN from up to four fragments. See [`crate::parse::from_fragments`].
    #[inline]
    pub fn from_fragments<S: AsRef<str>>(fragments: &[S]) -> Result<Self, PanError> {
        crate::parse::from_fragments(fragments)
    }

    /// Builds a PAN from a dash-separated string. See [`crate::parse::from_dashed`].
    #[inline]
    pub fn from_dashed(input: &str) -> Result<Self, PanError> {
        crate::parse::from_dashed(input)
    }

    /// Builds a PAN from a 16-character string. See [`crate::parse::from_raw`].
    #[inline]
    pub fn from_raw(input: &str) -> Result<Self, PanError> {
        crate::parse::from_raw(input)
    }

    /// Builds a PAN from its first 6 and last 4 characters. See [`crate::parse::from_masked`].
    #[inline]
    pub fn from_masked(first6: &str, last4: &str) -> Result<Self, PanError> {
        crate::parse::from_masked(first6, last4)
    }

    /// Returns the issuer resolved at construction.
    #[inline]
    pub const fn card_type(&self) -> IssuerType {
        self.issuer
    }

    /// Runs the Luhn check. See [`crate::luhn::validate_pan`].
    #[inline]
    pub fn validate(&self) -> ValidationOutcome {
        crate::luhn::validate_pan(self)
    }

    /// Returns true if any character is masked.
    #[inline]
    pub fn is_masked(&self) -> bool {
        self.chars.contains(&MASK_BYTE)
    }

    /// Returns section `index`, or `None` past the fourth section.
    pub fn section(&self, index: usize) -> Option<String> {
        if index >= SECTION_COUNT {
            return None;
        }
        Some(self.text(index * SECTION_LEN, (index + 1) * SECTION_LEN))
    }

    /// Returns all four sections.
    pub fn sections(&self) -> [String; SECTION_COUNT] {
        std::array::from_fn(|i| self.text(i * SECTION_LEN, (i + 1) * SECTION_LEN))
    }

    /// Returns the last section, e.g. `"3456"`.
    #[inline]
    pub fn last4(&self) -> String {
        self.text(12, 16)
    }

    /// Returns the first six characters, e.g. `"123456"`.
    #[inline]
    pub fn first6(&self) -> String {
        self.text(0, 6)
    }

    /// Returns the declared check digit (last character), e.g. `"6"`.
    #[inline]
    pub fn checksum(&self) -> String {
        self.text(15, 16)
    }

    /// Returns only the last section visible: `"****-****-****-3456"`.
    #[inline]
    pub fn full_last4(&self) -> String {
        crate::mask::full_last4(self)
    }

    /// Returns only the first six visible: `"1234-56**-****-****"`.
    #[inline]
    pub fn full_first6(&self) -> String {
        crate::mask::full_first6(self)
    }

    /// Returns first six and last four without separators: `"123456******3456"`.
    #[inline]
    pub fn raw_masked(&self) -> String {
        crate::mask::raw_masked(self)
    }

    /// Returns first six and last four with separators: `"1234-56**-****-3456"`.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::masked(self)
    }

    /// Returns the 16 characters without separators.
    ///
    /// # Security Warning
    ///
    /// This exposes every unmasked digit. Prefer `masked()` for display.
    #[inline]
    pub fn raw_pan(&self) -> String {
        self.text(0, PAN_LENGTH)
    }

    /// Returns the four sections joined by `-`: `"1234-5678-9012-3456"`.
    ///
    /// # Security Warning
    ///
    /// This exposes every unmasked digit. Prefer `masked()` for display.
    pub fn pan(&self) -> String {
        let mut result = String::with_capacity(PAN_LENGTH + SECTION_COUNT - 1);
        for (i, &c) in self.chars.iter().enumerate() {
            if i > 0 && i % SECTION_LEN == 0 {
                result.push('-');
            }
            result.push(char::from(c));
        }
        result
    }

    /// Returns a summary that is safe to log or serialize.
    pub fn summary(&self) -> PanSummary {
        PanSummary {
            card_type: self.issuer,
            masked: self.masked(),
            outcome: self.validate(),
        }
    }

    /// Raw ASCII characters, for the checksum and masking code.
    #[inline]
    pub(crate) fn chars(&self) -> &[u8; PAN_LENGTH] {
        &self.chars
    }

    fn text(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().map(|&c| char::from(c)).collect()
    }
}

impl FromStr for Pan {
    type Err = PanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::from_raw(s)
    }
}

impl fmt::Debug for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pan")
            .field("card_type", &self.issuer)
            .field("number", &self.masked())
            .finish()
    }
}

impl fmt::Display for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl Drop for Pan {
    fn drop(&mut self) {
        self.chars.zeroize();
    }
}

/// Masked view of a PAN with its issuer and checksum outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanSummary {
    /// Issuer resolved at construction.
    pub card_type: IssuerType,
    /// `Pan::masked()` output.
    pub masked: String,
    /// `Pan::validate()` output.
    pub outcome: ValidationOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Pan {
        Pan::from_sections([*b"1234", *b"5678", *b"9012", *b"3456"])
    }

    #[test]
    fn test_issuer_names() {
        assert_eq!(IssuerType::Visa.name(), "Visa");
        assert_eq!(IssuerType::AmericanExpress.name(), "American Express");
        assert_eq!(IssuerType::Jcb.to_string(), "JCB");
        assert_eq!(IssuerType::default(), IssuerType::Unknown);
    }

    #[test]
    fn test_issuer_is_known() {
        assert!(!IssuerType::Unknown.is_known());
        assert!(IssuerType::KNOWN.iter().all(|i| i.is_known()));
    }

    #[test]
    fn test_accessors() {
        let pan = sample();
        assert_eq!(pan.pan(), "1234-5678-9012-3456");
        assert_eq!(pan.raw_pan(), "1234567890123456");
        assert_eq!(pan.first6(), "123456");
        assert_eq!(pan.last4(), "3456");
        assert_eq!(pan.checksum(), "6");
        assert_eq!(pan.card_type(), IssuerType::Unknown);
        assert!(!pan.is_masked());
    }

    #[test]
    fn test_sections() {
        let pan = sample();
        assert_eq!(pan.section(0).as_deref(), Some("1234"));
        assert_eq!(pan.section(3).as_deref(), Some("3456"));
        assert_eq!(pan.section(4), None);
        assert_eq!(pan.sections(), ["1234", "5678", "9012", "3456"]);
    }

    #[test]
    fn test_issuer_resolved_at_construction() {
        let pan = Pan::from_sections([*b"4111", *b"1111", *b"1111", *b"1111"]);
        assert_eq!(pan.card_type(), IssuerType::Visa);

        let pan = Pan::from_sections([*b"****", *b"1111", *b"1111", *b"1111"]);
        assert_eq!(pan.card_type(), IssuerType::Unknown);
        assert!(pan.is_masked());
    }

    #[test]
    fn test_debug_is_masked() {
        let pan = sample();
        let debug = format!("{:?}", pan);
        assert!(!debug.contains("1234567890123456"));
        assert!(!debug.contains("1234-5678-9012-3456"));
        assert!(debug.contains("1234-56**-****-3456"));
    }

    #[test]
    fn test_display_is_masked() {
        assert_eq!(sample().to_string(), "1234-56**-****-3456");
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.card_type, IssuerType::Unknown);
        assert_eq!(summary.masked, "1234-56**-****-3456");
        assert_eq!(summary.outcome, ValidationOutcome::InvalidChecksum);
    }

    #[test]
    fn test_pan_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pan>();
        assert_send_sync::<IssuerType>();
    }
}
