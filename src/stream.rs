//! Streaming PAN parsing.
//!
//! Iterator adapters that parse raw PANs as they arrive, without collecting
//! the input first.
//!
//! # Example
//!
//! ```
//! use pan_info::stream::ParseExt;
//!
//! let inputs = vec!["0000000000000019", "bad", "0000000000000108"];
//! let valid = inputs.into_iter().valid_pans().count();
//! assert_eq!(valid, 2);
//! ```

use crate::error::PanError;
use crate::parse::from_raw;
use crate::Pan;

/// Parses each item of the wrapped iterator with [`from_raw`].
///
/// Created by [`ParseExt::parse_pans`].
#[derive(Debug, Clone)]
pub struct PanStream<I> {
    inner: I,
}

impl<I> PanStream<I> {
    /// Wraps an iterator of raw PAN strings.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for PanStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Pan, PanError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| from_raw(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Yields only PANs that parse and pass the checksum.
///
/// Created by [`ParseExt::valid_pans`].
#[derive(Debug, Clone)]
pub struct ValidPanStream<I> {
    inner: PanStream<I>,
}

impl<I, S> Iterator for ValidPanStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Pan;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .filter_map(Result::ok)
            .find(|pan| pan.validate().is_valid())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Extension trait adding PAN parsing to iterators of strings.
pub trait ParseExt: Iterator + Sized {
    /// Parses every item as a raw PAN.
    fn parse_pans(self) -> PanStream<Self> {
        PanStream::new(self)
    }

    /// Keeps only items that parse and pass the checksum.
    fn valid_pans(self) -> ValidPanStream<Self> {
        ValidPanStream {
            inner: PanStream::new(self),
        }
    }
}

impl<I, S> ParseExt for I
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
}
