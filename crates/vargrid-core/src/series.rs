//! PnL series parsing.
//!
//! A PnL series is an ordered sequence of daily profit-and-loss observations,
//! chronological (oldest first) and ending at "today". The backend serializes
//! it as a bracketed, comma-separated string such as `"[120.5, -80, 42]"`.
//!
//! Parsing policy: a malformed token fails the whole parse. The engine layer
//! catches the error and degrades the affected row to an empty series; a bad
//! token must never silently become `NaN` in a risk number.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// An ordered sequence of daily PnL observations.
///
/// Index 0 is the oldest observation; the last element is "today".
/// A series may be empty (a position with no history yet).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PnlSeries(Vec<f64>);

impl PnlSeries {
    /// Creates an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a serialized PnL series.
    ///
    /// Strips surrounding brackets and whitespace, splits on commas, and
    /// parses each token as a float. Empty or blank input yields an empty
    /// series.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedSeriesToken`] if any token cannot be
    /// parsed as a number. The whole parse fails; no partial series is
    /// returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vargrid_core::PnlSeries;
    ///
    /// let series = PnlSeries::parse("[1, -2, 3.5]").unwrap();
    /// assert_eq!(series.as_slice(), &[1.0, -2.0, 3.5]);
    /// assert!(PnlSeries::parse("").unwrap().is_empty());
    /// ```
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let cleaned = raw
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .trim();
        if cleaned.is_empty() {
            return Ok(Self::new());
        }

        let mut values = Vec::new();
        for (position, token) in cleaned.split(',').enumerate() {
            let token = token.trim();
            let value: f64 = token
                .parse()
                .map_err(|_| CoreError::malformed_token(position, token))?;
            values.push(value);
        }
        Ok(Self(values))
    }

    /// Returns the observations as a slice, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the observations, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<f64>> for PnlSeries {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for PnlSeries {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let series = PnlSeries::parse("[1, -2, 3.5]").unwrap();
        assert_eq!(series.as_slice(), &[1.0, -2.0, 3.5]);
    }

    #[test]
    fn test_parse_without_brackets() {
        let series = PnlSeries::parse("1.5,2.5,-3").unwrap();
        assert_eq!(series.as_slice(), &[1.5, 2.5, -3.0]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(PnlSeries::parse("").unwrap().is_empty());
        assert!(PnlSeries::parse("   ").unwrap().is_empty());
        assert!(PnlSeries::parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_token_fails() {
        let err = PnlSeries::parse("[1, abc, 3]").unwrap_err();
        assert_eq!(err, CoreError::malformed_token(1, "abc"));
    }

    #[test]
    fn test_parse_empty_token_fails() {
        // A trailing comma leaves an empty token, which is not a number.
        assert!(PnlSeries::parse("[1, 2,]").is_err());
    }

    #[test]
    fn test_parse_scientific_notation() {
        let series = PnlSeries::parse("[1e3, -2.5e-2]").unwrap();
        assert_eq!(series.as_slice(), &[1000.0, -0.025]);
    }

    #[test]
    fn test_parse_fractional_precision() {
        use approx::assert_relative_eq;

        // Decimal strings land on the nearest f64, not an exact value.
        let series = PnlSeries::parse("[0.1, -1234.5678]").unwrap();
        assert_relative_eq!(series.as_slice()[0], 0.1);
        assert_relative_eq!(series.as_slice()[1], -1234.5678);
        assert_relative_eq!(series.iter().sum::<f64>(), -1234.4678, epsilon = 1e-9);
    }

    #[test]
    fn test_serde_transparent() {
        let series = PnlSeries::from(vec![1.0, -2.0]);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, "[1.0,-2.0]");
        let parsed: PnlSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, series);
    }
}
