//! Issuer detection using ordered prefix rules.
//!
//! The issuing network is decided by the leading digits of the PAN. Rules
//! are tried top to bottom and the first match wins:
//!
//! | Order | Prefix | Issuer |
//! |-------|--------|--------|
//! | 1 | 4 | Visa |
//! | 2 | 51-55, 2221-2720 | MasterCard |
//! | 3 | 34, 37 | American Express |
//! | 4 | 3528-3589 | JCB |
//! | 5 | 62, 81 | UnionPay |
//!
//! Only digits take part in a match. A mask character in a probed position
//! fails the rule, so an issuer is never guessed from a hidden prefix.

use crate::IssuerType;

/// An inclusive range over the first `width` digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRange {
    /// How many leading digits are compared.
    pub width: usize,
    /// Lowest accepted prefix value.
    pub low: u16,
    /// Highest accepted prefix value.
    pub high: u16,
}

impl PrefixRange {
    const fn new(width: usize, low: u16, high: u16) -> Self {
        Self { width, low, high }
    }

    /// Returns true if the leading characters fall inside this range.
    ///
    /// `leading` holds ASCII characters; anything other than a digit in the
    /// first `width` positions is a mismatch.
    pub fn matches(&self, leading: &[u8]) -> bool {
        if leading.len() < self.width {
            return false;
        }

        let mut value: u16 = 0;
        for &c in &leading[..self.width] {
            if !c.is_ascii_digit() {
                return false;
            }
            value = value * 10 + u16::from(c - b'0');
        }

        (self.low..=self.high).contains(&value)
    }
}

/// One row of the issuer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuerRule {
    /// Issuer reported when any range matches.
    pub issuer: IssuerType,
    /// Accepted prefixes.
    pub ranges: &'static [PrefixRange],
}

impl IssuerRule {
    /// Returns true if any of the rule's ranges match.
    #[inline]
    pub fn matches(&self, leading: &[u8]) -> bool {
        self.ranges.iter().any(|r| r.matches(leading))
    }
}

static ISSUER_RULES: [IssuerRule; 5] = [
    IssuerRule {
        issuer: IssuerType::Visa,
        ranges: &[PrefixRange::new(1, 4, 4)],
    },
    IssuerRule {
        issuer: IssuerType::MasterCard,
        ranges: &[PrefixRange::new(2, 51, 55), PrefixRange::new(4, 2221, 2720)],
    },
    IssuerRule {
        issuer: IssuerType::AmericanExpress,
        ranges: &[PrefixRange::new(2, 34, 34), PrefixRange::new(2, 37, 37)],
    },
    IssuerRule {
        issuer: IssuerType::Jcb,
        ranges: &[PrefixRange::new(4, 3528, 3589)],
    },
    IssuerRule {
        issuer: IssuerType::UnionPay,
        ranges: &[PrefixRange::new(2, 62, 62), PrefixRange::new(2, 81, 81)],
    },
];

/// Returns the issuer table in evaluation order.
#[inline]
pub fn rules() -> &'static [IssuerRule] {
    &ISSUER_RULES
}

/// Detects the issuer from the leading characters of a PAN.
///
/// # Example
///
/// ```
/// use pan_info::detect::detect_issuer;
/// use pan_info::IssuerType;
///
/// assert_eq!(detect_issuer(b"4111"), IssuerType::Visa);
/// assert_eq!(detect_issuer(b"2720"), IssuerType::MasterCard);
/// assert_eq!(detect_issuer(b"3590"), IssuerType::Unknown);
/// assert_eq!(detect_issuer(b"5***"), IssuerType::Unknown);
/// ```
pub fn detect_issuer(leading: &[u8]) -> IssuerType {
    ISSUER_RULES
        .iter()
        .find(|rule| rule.matches(leading))
        .map_or(IssuerType::Unknown, |rule| rule.issuer)
}
