//! PAN constructors.
//!
//! Every constructor splits its input into fragments and hands them to
//! [`from_fragments`], which owns the validation and padding rules:
//!
//! 1. At most four fragments are accepted
//! 2. Missing fragments are treated as empty
//! 3. Each fragment goes through [`crate::section`] (alphabet check, `*` padding)
//! 4. The sections are assembled and the issuer is resolved once
//!
//! A short input is padded; an oversized one is rejected.

use crate::card::PAN_LENGTH;
use crate::error::{PanError, SectionFault};
use crate::section::{parse_section, MASK_BYTE, SECTION_COUNT, SECTION_LEN};
use crate::Pan;

/// Length of the leading part accepted by [`from_masked`].
pub const FIRST6_LEN: usize = 6;

/// Length of the trailing part accepted by [`from_masked`].
pub const LAST4_LEN: usize = 4;

/// Builds a PAN from up to four fragments.
///
/// Each fragment holds at most four characters from `[0-9*]`. Short
/// fragments and missing fragments are padded with `*`.
///
/// # Example
///
/// ```
/// use pan_info::parse::from_fragments;
///
/// let pan = from_fragments(&["1234", "56", "", "3456"]).unwrap();
/// assert_eq!(pan.raw_pan(), "123456******3456");
///
/// let empty: [&str; 0] = [];
/// assert_eq!(from_fragments(&empty).unwrap().pan(), "****-****-****-****");
///
/// assert!(from_fragments(&["1", "2", "3", "4", "5"]).is_err());
/// ```
pub fn from_fragments<S: AsRef<str>>(fragments: &[S]) -> Result<Pan, PanError> {
    if fragments.len() > SECTION_COUNT {
        return Err(SectionFault::TooManySections {
            count: fragments.len(),
        }
        .into());
    }

    let mut sections = [[MASK_BYTE; SECTION_LEN]; SECTION_COUNT];
    for (index, section) in sections.iter_mut().enumerate() {
        let fragment = fragments.get(index).map_or("", |f| f.as_ref());
        *section = parse_section(index, fragment)?;
    }

    Ok(Pan::from_sections(sections))
}

/// Builds a PAN from a dash-separated string such as `1234-5678-9012-3456`.
///
/// This is `from_fragments` over `input.split('-')`, so every rule of
/// `from_fragments` applies: `"1234-56"` is padded, five groups are rejected.
///
/// # Example
///
/// ```
/// use pan_info::parse::from_dashed;
///
/// let pan = from_dashed("1234-5678-9012-3456").unwrap();
/// assert_eq!(pan.raw_pan(), "1234567890123456");
///
/// let pan = from_dashed("1234-56").unwrap();
/// assert_eq!(pan.pan(), "1234-56**-****-****");
/// ```
pub fn from_dashed(input: &str) -> Result<Pan, PanError> {
    let fragments: Vec<&str> = input.split('-').collect();
    from_fragments(&fragments)
}

/// Builds a PAN from exactly 16 characters such as `1234567890123456`.
///
/// Fails with [`PanError::RawFormat`] for any other length, before any
/// character is inspected.
///
/// # Example
///
/// ```
/// use pan_info::parse::from_raw;
/// use pan_info::PanError;
///
/// let pan = from_raw("1234567890123456").unwrap();
/// assert_eq!(pan.pan(), "1234-5678-9012-3456");
///
/// assert_eq!(from_raw("123").unwrap_err(), PanError::RawFormat { length: 3 });
/// ```
pub fn from_raw(input: &str) -> Result<Pan, PanError> {
    if input.len() != PAN_LENGTH {
        return Err(PanError::RawFormat {
            length: input.len(),
        });
    }

    let mut fragments = [""; SECTION_COUNT];
    for (index, fragment) in fragments.iter_mut().enumerate() {
        let start = index * SECTION_LEN;
        *fragment = slice(input, start, start + SECTION_LEN, index)?;
    }

    from_fragments(&fragments)
}

/// Builds a PAN from its first six and last four characters.
///
/// The middle is always hidden: the result is
/// `first6[..4]`, `first6[4..] + "**"`, `"****"`, `last4`.
///
/// # Example
///
/// ```
/// use pan_info::parse::from_masked;
///
/// let pan = from_masked("123456", "3456").unwrap();
/// assert_eq!(pan.raw_pan(), "123456******3456");
///
/// assert!(from_masked("12345", "3456").is_err());
/// ```
pub fn from_masked(first6: &str, last4: &str) -> Result<Pan, PanError> {
    if first6.len() != FIRST6_LEN || last4.len() != LAST4_LEN {
        return Err(PanError::MaskedFormat {
            first6: first6.len(),
            last4: last4.len(),
        });
    }

    let head = slice(first6, 0, SECTION_LEN, 0)?;
    let tail = slice(first6, SECTION_LEN, FIRST6_LEN, 1)?;
    let second = format!("{}**", tail);

    from_fragments(&[head, second.as_str(), "****", last4])
}

/// Completes a 15-digit body with its check digit.
///
/// # Example
///
/// ```
/// use pan_info::parse::complete;
/// use pan_info::ValidationOutcome;
///
/// let pan = complete("123456789012345").unwrap();
/// assert_eq!(pan.raw_pan(), "1234567890123452");
/// assert_eq!(pan.validate(), ValidationOutcome::Valid);
/// ```
pub fn complete(body: &str) -> Result<Pan, PanError> {
    if body.len() != PAN_LENGTH - 1 {
        return Err(PanError::RawFormat { length: body.len() });
    }

    let mut digits = [0u8; PAN_LENGTH - 1];
    for (position, (d, c)) in digits.iter_mut().zip(body.chars()).enumerate() {
        match c.to_digit(10) {
            Some(v) => *d = v as u8,
            None => {
                return Err(SectionFault::InvalidCharacter {
                    section: position / SECTION_LEN,
                    position: position % SECTION_LEN,
                    character: c,
                }
                .into());
            }
        }
    }

    let check = crate::luhn::generate_check_digit(&digits);
    let mut raw = String::with_capacity(PAN_LENGTH);
    raw.push_str(body);
    raw.push(char::from(b'0' + check));
    from_raw(&raw)
}

/// Byte slice of `input` that reports a broken UTF-8 boundary as a bad
/// character in section `index`.
fn slice(input: &str, start: usize, end: usize, index: usize) -> Result<&str, PanError> {
    input.get(start..end).ok_or_else(|| {
        let straddles = |i: usize, c: char, at: usize| i < at && i + c.len_utf8() > at;
        let (position, character) = input
            .char_indices()
            .find(|&(i, c)| straddles(i, c, start) || straddles(i, c, end))
            .map_or((0, char::REPLACEMENT_CHARACTER), |(i, c)| {
                (i.saturating_sub(start), c)
            });
        SectionFault::InvalidCharacter {
            section: index,
            position,
            character,
        }
        .into()
    })
}
