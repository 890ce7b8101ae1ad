//! Position rows and their wire-format records.

use super::ContractMonth;
use crate::error::{CoreError, CoreResult};
use crate::series::PnlSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable row identifier.
///
/// Unique across the dataset for the session; the override store and the
/// aggregation engine address rows exclusively through this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    /// Creates a new row id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An immutable position row as received from the backend fetch.
///
/// Rows are read-only to the engine; regrouping happens through the override
/// store, never by mutating the row itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRow {
    /// Stable row identifier, unique for the session.
    pub id: RowId,

    /// Categorical grouping dimension (venue/desk code).
    pub location: String,

    /// Delivery/expiry period, or the not-applicable sentinel.
    pub contract_month: ContractMonth,

    /// Signed delta position. Linearly additive across rows.
    pub exposure: f64,

    /// Daily PnL observations, chronological, ending at "today".
    pub pnl_series: PnlSeries,
}

impl PositionRow {
    /// Starts building a row.
    #[must_use]
    pub fn builder() -> PositionRowBuilder {
        PositionRowBuilder::default()
    }
}

/// Builder for [`PositionRow`].
///
/// # Example
///
/// ```rust
/// use vargrid_core::PositionRow;
///
/// let row = PositionRow::builder()
///     .id("R1")
///     .location("HOU")
///     .exposure(1_250_000.0)
///     .pnl_series(vec![10.0, -5.0, 3.0])
///     .build()
///     .unwrap();
/// assert_eq!(row.location, "HOU");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PositionRowBuilder {
    id: Option<RowId>,
    location: Option<String>,
    contract_month: ContractMonth,
    exposure: Option<f64>,
    pnl_series: PnlSeries,
}

impl PositionRowBuilder {
    /// Sets the row id.
    #[must_use]
    pub fn id(mut self, id: impl Into<RowId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the location code.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the contract month.
    #[must_use]
    pub fn contract_month(mut self, contract_month: ContractMonth) -> Self {
        self.contract_month = contract_month;
        self
    }

    /// Sets the exposure.
    #[must_use]
    pub fn exposure(mut self, exposure: f64) -> Self {
        self.exposure = Some(exposure);
        self
    }

    /// Sets the PnL series.
    #[must_use]
    pub fn pnl_series(mut self, series: impl Into<PnlSeries>) -> Self {
        self.pnl_series = series.into();
        self
    }

    /// Builds the row.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] if `id`, `location`, or
    /// `exposure` was not set. Contract month defaults to not-applicable
    /// and the PnL series defaults to empty.
    pub fn build(self) -> CoreResult<PositionRow> {
        Ok(PositionRow {
            id: self.id.ok_or_else(|| CoreError::missing_field("id"))?,
            location: self
                .location
                .ok_or_else(|| CoreError::missing_field("location"))?,
            contract_month: self.contract_month,
            exposure: self
                .exposure
                .ok_or_else(|| CoreError::missing_field("exposure"))?,
            pnl_series: self.pnl_series,
        })
    }
}

/// Wire-format record for one backend row.
///
/// Mirrors the JSON shape delivered by the fetch layer: the PnL series
/// arrives as a bracketed string and the optional fields may be absent or
/// null. Conversion into a [`PositionRow`] with degradation rules lives in
/// the engine's ingestion step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    /// Stable row identifier.
    pub id: String,

    /// Venue/desk code; absent on some feeds.
    #[serde(default)]
    pub location: Option<String>,

    /// Contract month token, e.g. `"2025-06-01"`; absent for equities.
    #[serde(default)]
    pub contract_month: Option<String>,

    /// Signed delta position.
    pub exposure: f64,

    /// Serialized PnL series, e.g. `"[120.5, -80, 42]"`.
    #[serde(default)]
    pub pnl_vector: Option<String>,
}
