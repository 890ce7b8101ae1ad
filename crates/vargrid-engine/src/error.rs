//! Error and warning types for the aggregation engine.
//!
//! The engine distinguishes contract violations (errors, returned as `Err`)
//! from data-quality issues (warnings, collected alongside a complete but
//! possibly degraded result).

use thiserror::Error;
use vargrid_core::RowId;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during ingestion and aggregation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Two rows share an id, which breaks override addressing.
    #[error("Duplicate row id '{id}'")]
    DuplicateRowId {
        /// The duplicated id.
        id: RowId,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("Invalid confidence level {value}: must be between 0 and 1")]
    InvalidConfidence {
        /// The rejected value.
        value: f64,
    },

    /// Zero lookback window.
    #[error("Invalid lookback {value}: must be at least 1")]
    InvalidLookback {
        /// The rejected value.
        value: usize,
    },
}

impl EngineError {
    /// Create a duplicate row id error.
    #[must_use]
    pub fn duplicate_row_id(id: impl Into<RowId>) -> Self {
        Self::DuplicateRowId { id: id.into() }
    }
}

/// Row-level data-quality warnings raised during ingestion.
///
/// Warnings never abort ingestion; the affected row is kept with a
/// degraded field so aggregation of unrelated rows proceeds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IngestWarning {
    /// The serialized PnL series could not be parsed; the row was kept
    /// with an empty series.
    #[error("Row '{id}': malformed PnL series ({detail})")]
    MalformedSeries {
        /// The affected row.
        id: RowId,
        /// Parser error detail.
        detail: String,
    },

    /// The contract month token could not be parsed; the row was kept
    /// with no delivery period.
    #[error("Row '{id}': invalid contract month '{value}'")]
    InvalidContractMonth {
        /// The affected row.
        id: RowId,
        /// The unparseable token.
        value: String,
    },

    /// The location field was absent; the row falls back to an empty
    /// location label.
    #[error("Row '{id}': missing location")]
    MissingLocation {
        /// The affected row.
        id: RowId,
    },
}

impl IngestWarning {
    /// Returns the id of the row the warning applies to.
    #[must_use]
    pub fn row_id(&self) -> &RowId {
        match self {
            Self::MalformedSeries { id, .. }
            | Self::InvalidContractMonth { id, .. }
            | Self::MissingLocation { id } => id,
        }
    }
}
