//! Batch parsing and checking of raw PANs.
//!
//! Parses many 16-character strings in one call, with optional parallel
//! processing using rayon (`parallel` feature).

use crate::error::PanError;
use crate::luhn::ValidationOutcome;
use crate::parse::from_raw;
use crate::Pan;

/// Batch parser for many raw PAN strings.
///
/// # Example
///
/// ```
/// use pan_info::BatchParser;
///
/// let batch = BatchParser::new();
/// let inputs = ["0000000000000019", "123456******3456", "bad"];
/// let results = batch.parse_all(&inputs);
///
/// assert!(results[0].is_ok());
/// assert!(results[1].is_ok());
/// assert!(results[2].is_err());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchParser {
    _private: (),
}

impl BatchParser {
    /// Creates a new batch parser.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every input; results keep the input order.
    pub fn parse_all<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<Result<Pan, PanError>> {
        parse_batch(inputs)
    }

    /// Returns only the PANs that parse and pass the checksum.
    pub fn valid_only<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<Pan> {
        inputs
            .iter()
            .filter_map(|s| from_raw(s.as_ref()).ok())
            .filter(|pan| pan.validate().is_valid())
            .collect()
    }

    /// Splits inputs into parsed PANs and `(index, error)` pairs.
    pub fn partitioned<S: AsRef<str>>(&self, inputs: &[S]) -> (Vec<Pan>, Vec<(usize, PanError)>) {
        let mut parsed = Vec::new();
        let mut failed = Vec::new();

        for (i, input) in inputs.iter().enumerate() {
            match from_raw(input.as_ref()) {
                Ok(pan) => parsed.push(pan),
                Err(e) => failed.push((i, e)),
            }
        }

        (parsed, failed)
    }

    /// Parses inputs in parallel.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn parse_parallel<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<Result<Pan, PanError>> {
        parse_batch_parallel(inputs)
    }
}

/// Parses a slice of raw PANs without creating a `BatchParser`.
#[inline]
pub fn parse_batch<S: AsRef<str>>(inputs: &[S]) -> Vec<Result<Pan, PanError>> {
    inputs.iter().map(|s| from_raw(s.as_ref())).collect()
}

/// Parses a slice of raw PANs in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn parse_batch_parallel<S: AsRef<str> + Sync>(inputs: &[S]) -> Vec<Result<Pan, PanError>> {
    use rayon::prelude::*;
    inputs.par_iter().map(|s| from_raw(s.as_ref())).collect()
}

/// Counts of each outcome over a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    /// Parsed and passed the checksum.
    pub valid: usize,
    /// Parsed, unmasked, failed the checksum.
    pub invalid_checksum: usize,
    /// Parsed but masked.
    pub masked: usize,
    /// Did not parse.
    pub malformed: usize,
}

impl Tally {
    /// Total number of inputs counted.
    #[inline]
    pub const fn total(&self) -> usize {
        self.valid + self.invalid_checksum + self.masked + self.malformed
    }

    fn record(&mut self, result: &Result<Pan, PanError>) {
        match result.as_ref().map(Pan::validate) {
            Ok(ValidationOutcome::Valid) => self.valid += 1,
            Ok(ValidationOutcome::InvalidChecksum) => self.invalid_checksum += 1,
            Ok(ValidationOutcome::CannotValidateMasked) => self.masked += 1,
            Err(_) => self.malformed += 1,
        }
    }

    #[cfg(feature = "parallel")]
    fn merge(mut self, other: Self) -> Self {
        self.valid += other.valid;
        self.invalid_checksum += other.invalid_checksum;
        self.masked += other.masked;
        self.malformed += other.malformed;
        self
    }
}

/// Counts outcomes without keeping the parsed PANs.
///
/// # Example
///
/// ```
/// use pan_info::batch::tally;
///
/// let inputs = ["0000000000000019", "0000000000000001", "123456******3456", "bad"];
/// let counts = tally(&inputs);
/// assert_eq!(counts.valid, 1);
/// assert_eq!(counts.invalid_checksum, 1);
/// assert_eq!(counts.masked, 1);
/// assert_eq!(counts.malformed, 1);
/// ```
pub fn tally<S: AsRef<str>>(inputs: &[S]) -> Tally {
    let mut counts = Tally::default();
    for input in inputs {
        counts.record(&from_raw(input.as_ref()));
    }
    counts
}

/// Counts outcomes in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn tally_parallel<S: AsRef<str> + Sync>(inputs: &[S]) -> Tally {
    use rayon::prelude::*;

    inputs
        .par_iter()
        .fold(Tally::default, |mut counts, input| {
            counts.record(&from_raw(input.as_ref()));
            counts
        })
        .reduce(Tally::default, Tally::merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "0000000000000019";
    const BAD_CHECKSUM: &str = "0000000000000001";
    const MASKED: &str = "123456******3456";
    const MALFORMED: &str = "12345";

    #[test]
    fn test_parse_all() {
        let batch = BatchParser::new();
        let results = batch.parse_all(&[VALID, MALFORMED, MASKED]);

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_valid_only() {
        let batch = BatchParser::new();
        let valid = batch.valid_only(&[VALID, BAD_CHECKSUM, MASKED, MALFORMED, VALID]);
        assert_eq!(valid.len(), 2);
    }

    #[test]
    fn test_partitioned() {
        let batch = BatchParser::new();
        let (parsed, failed) = batch.partitioned(&[VALID, MALFORMED, MASKED, "abcdabcdabcdabcd"]);

        assert_eq!(parsed.len(), 2);
        assert_eq!(failed.len(), 2);
        assert_eq!(failed[0].0, 1);
        assert_eq!(failed[1].0, 3);
    }

    #[test]
    fn test_tally() {
        let counts = tally(&[VALID, BAD_CHECKSUM, MASKED, MALFORMED, VALID]);
        assert_eq!(
            counts,
            Tally {
                valid: 2,
                invalid_checksum: 1,
                masked: 1,
                malformed: 1,
            }
        );
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_empty_batch() {
        let inputs: Vec<&str> = vec![];
        assert!(parse_batch(&inputs).is_empty());
        assert_eq!(tally(&inputs).total(), 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let inputs: Vec<String> = (0..1000)
            .map(|i| match i % 4 {
                0 => VALID.to_string(),
                1 => BAD_CHECKSUM.to_string(),
                2 => MASKED.to_string(),
                _ => MALFORMED.to_string(),
            })
            .collect();

        assert_eq!(tally_parallel(&inputs), tally(&inputs));
        assert_eq!(BatchParser::new().parse_parallel(&inputs), parse_batch(&inputs));
    }
}
