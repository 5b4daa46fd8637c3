//! Error types for PAN construction.
//!
//! Every error here is an input-format error detected while building a
//! [`Pan`](crate::Pan). Checksum failures are not errors; they are reported
//! as a [`ValidationOutcome`](crate::ValidationOutcome).

use thiserror::Error;

/// Why a fragment could not be used as a PAN section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionFault {
    /// More than four fragments were supplied.
    TooManySections {
        /// Number of fragments received.
        count: usize,
    },

    /// A fragment is longer than four characters.
    TooLong {
        /// Zero-based section index.
        section: usize,
        /// Length of the offending fragment.
        length: usize,
    },

    /// A fragment contains something other than a digit or `*`.
    InvalidCharacter {
        /// Zero-based section index.
        section: usize,
        /// Character position within the fragment.
        position: usize,
        /// The rejected character.
        character: char,
    },
}

impl std::fmt::Display for SectionFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManySections { count } => {
                write!(f, "expected at most 4 sections, got {}", count)
            }
            Self::TooLong { section, length } => {
                write!(
                    f,
                    "section {} has {} characters, at most 4 allowed",
                    section, length
                )
            }
            Self::InvalidCharacter {
                section,
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} of section {} (only digits and '*' allowed)",
                    character.escape_default(),
                    position,
                    section
                )
            }
        }
    }
}

/// Errors returned by the PAN constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanError {
    /// A fragment is malformed or too many fragments were given.
    #[error("incorrect pan section: {0}")]
    SectionFormat(SectionFault),

    /// A raw PAN was not exactly 16 characters long.
    #[error("raw pan must be 16 digits or asterisks, got {length} characters")]
    RawFormat {
        /// Length of the rejected input.
        length: usize,
    },

    /// A masked PAN was not made of a 6-character head and 4-character tail.
    #[error("masked pan must be first 6 and last 4 characters, got {first6} and {last4}")]
    MaskedFormat {
        /// Length of the `first6` argument.
        first6: usize,
        /// Length of the `last4` argument.
        last4: usize,
    },
}

/// Coarse classification of [`PanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`PanError::SectionFormat`].
    SectionFormat,
    /// See [`PanError::RawFormat`].
    RawFormat,
    /// See [`PanError::MaskedFormat`].
    MaskedFormat,
}

impl PanError {
    /// Returns the coarse kind of this error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SectionFormat(_) => ErrorKind::SectionFormat,
            Self::RawFormat { .. } => ErrorKind::RawFormat,
            Self::MaskedFormat { .. } => ErrorKind::MaskedFormat,
        }
    }
}

impl From<SectionFault> for PanError {
    fn from(fault: SectionFault) -> Self {
        Self::SectionFormat(fault)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PanError::RawFormat { length: 15 }.to_string(),
            "raw pan must be 16 digits or asterisks, got 15 characters"
        );

        assert_eq!(
            PanError::MaskedFormat {
                first6: 5,
                last4: 4
            }
            .to_string(),
            "masked pan must be first 6 and last 4 characters, got 5 and 4"
        );

        assert_eq!(
            PanError::SectionFormat(SectionFault::InvalidCharacter {
                section: 1,
                position: 3,
                character: 'a'
            })
            .to_string(),
            "incorrect pan section: invalid character 'a' at position 3 of section 1 (only digits and '*' allowed)"
        );

        assert_eq!(
            PanError::from(SectionFault::TooManySections { count: 5 }).to_string(),
            "incorrect pan section: expected at most 4 sections, got 5"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            PanError::from(SectionFault::TooLong {
                section: 0,
                length: 5
            })
            .kind(),
            ErrorKind::SectionFormat
        );
        assert_eq!(PanError::RawFormat { length: 0 }.kind(), ErrorKind::RawFormat);
        assert_eq!(
            PanError::MaskedFormat {
                first6: 6,
                last4: 3
            }
            .kind(),
            ErrorKind::MaskedFormat
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PanError>();
    }
}
