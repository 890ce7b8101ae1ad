//! Historical-simulation Value-at-Risk.
//!
//! VaR here is the empirical loss quantile of a PnL series: sort the
//! trailing lookback window ascending (worst losses first) and pick the
//! observation at the confidence quantile. Because it is an order
//! statistic of the combined distribution, group VaR must always be
//! computed on a combined series, never summed from per-row VaR scalars.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Default lookback window: one trading year of daily observations.
pub const DEFAULT_LOOKBACK: usize = 251;

/// Default confidence quantile: 5% tail.
pub const DEFAULT_CONFIDENCE: f64 = 0.05;

/// Configuration for VaR computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarConfig {
    /// Number of trailing observations to use.
    pub lookback: usize,

    /// Tail quantile in (0, 1); 0.05 means the 5% worst-case loss level.
    pub confidence: f64,
}

impl Default for VarConfig {
    fn default() -> Self {
        Self {
            lookback: DEFAULT_LOOKBACK,
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

impl VarConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLookback`] if `lookback` is zero, or
    /// [`EngineError::InvalidConfidence`] if `confidence` is outside
    /// the open interval (0, 1).
    pub fn new(lookback: usize, confidence: f64) -> EngineResult<Self> {
        if lookback == 0 {
            return Err(EngineError::InvalidLookback { value: lookback });
        }
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(EngineError::InvalidConfidence { value: confidence });
        }
        Ok(Self {
            lookback,
            confidence,
        })
    }

    /// Returns a copy with a different lookback window.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLookback`] if `lookback` is zero.
    pub fn with_lookback(self, lookback: usize) -> EngineResult<Self> {
        Self::new(lookback, self.confidence)
    }

    /// Returns a copy with a different confidence quantile.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfidence`] if `confidence` is
    /// outside the open interval (0, 1).
    pub fn with_confidence(self, confidence: f64) -> EngineResult<Self> {
        Self::new(self.lookback, confidence)
    }
}

/// Computes historical-simulation VaR over a PnL series.
///
/// Takes the trailing `config.lookback` observations (all of them if the
/// series is shorter), sorts ascending, and returns the element at
/// `floor(window_len × confidence)`, clamped into the window.
///
/// Returns `None` for an empty window — the caller decides how to render
/// the absence of a risk number.
///
/// # Example
///
/// ```rust
/// use vargrid_engine::{compute_var, VarConfig};
///
/// let series: Vec<f64> = (0..20).map(f64::from).collect();
/// let var = compute_var(&series, &VarConfig::default());
/// // floor(20 * 0.05) = 1 -> second-smallest observation
/// assert_eq!(var, Some(1.0));
/// assert_eq!(compute_var(&[], &VarConfig::default()), None);
/// ```
#[must_use]
pub fn compute_var(series: &[f64], config: &VarConfig) -> Option<f64> {
    let start = series.len().saturating_sub(config.lookback);
    let window = &series[start..];
    if window.is_empty() {
        return None;
    }

    // Sort ascending - worst losses first
    let mut sorted = window.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let index = (sorted.len() as f64 * config.confidence).floor() as usize;
    let index = index.min(sorted.len() - 1);
    Some(sorted[index])
}
