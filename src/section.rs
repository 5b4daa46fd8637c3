//! Section validation and padding.
//!
//! A PAN is made of four sections of four characters. Each character is a
//! decimal digit or the mask character `*`. Fragments shorter than four
//! characters are right-padded with `*`.

use crate::error::{PanError, SectionFault};

/// The character used to hide digits.
pub const MASK_CHAR: char = '*';

/// ASCII byte of [`MASK_CHAR`].
pub(crate) const MASK_BYTE: u8 = b'*';

/// Number of characters in a section.
pub const SECTION_LEN: usize = 4;

/// Number of sections in a PAN.
pub const SECTION_COUNT: usize = 4;

/// Validates one fragment and returns it padded to a full section.
///
/// # Example
///
/// ```
/// use pan_info::section::pad_section;
///
/// assert_eq!(pad_section("12").unwrap(), "12**");
/// assert_eq!(pad_section("").unwrap(), "****");
/// assert!(pad_section("12345").is_err());
/// assert!(pad_section("12a").is_err());
/// ```
pub fn pad_section(fragment: &str) -> Result<String, PanError> {
    let bytes = parse_section(0, fragment)?;
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}

/// Validates the fragment at `index` and returns its padded ASCII bytes.
pub(crate) fn parse_section(index: usize, fragment: &str) -> Result<[u8; SECTION_LEN], PanError> {
    let length = fragment.chars().count();
    if length > SECTION_LEN {
        return Err(SectionFault::TooLong {
            section: index,
            length,
        }
        .into());
    }

    let mut section = [MASK_BYTE; SECTION_LEN];
    for (position, c) in fragment.chars().enumerate() {
        match c {
            '0'..='9' | MASK_CHAR => section[position] = c as u8,
            _ => {
                return Err(SectionFault::InvalidCharacter {
                    section: index,
                    position,
                    character: c,
                }
                .into());
            }
        }
    }

    Ok(section)
}
