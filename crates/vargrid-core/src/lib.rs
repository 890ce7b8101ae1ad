//! # Vargrid Core
//!
//! Row model and PnL series parsing for the Vargrid risk grid.
//!
//! The risk grid fetches position rows from a backend and aggregates them
//! into groups with re-derived Value-at-Risk. This crate holds everything
//! the engine and the UI layer share:
//!
//! - **Rows**: [`PositionRow`] (the immutable in-memory row) and
//!   [`RowRecord`] (the wire shape the fetch layer deserializes)
//! - **Contract months**: [`ContractMonth`] with the equity
//!   "not applicable" sentinel that renders as an empty label
//! - **PnL series**: [`PnlSeries`] with strict parsing of the backend's
//!   bracketed string form
//! - **Formatting**: [`format_finance_number`] for grid display
//!
//! ## Design Philosophy
//!
//! - **Pure types and parsers**: no I/O, no logging, no globals
//! - **Strict parsing**: malformed numeric tokens fail the parse rather
//!   than degrading into `NaN`; degradation decisions belong to the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use vargrid_core::{PnlSeries, PositionRow};
//!
//! let series = PnlSeries::parse("[120.5, -80, 42]")?;
//! let row = PositionRow::builder()
//!     .id("R1")
//!     .location("HOU")
//!     .exposure(1_000_000.0)
//!     .pnl_series(series)
//!     .build()?;
//! assert_eq!(row.pnl_series.len(), 3);
//! # Ok::<(), vargrid_core::CoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod format;
pub mod series;
pub mod types;

// Re-export error types at crate root
pub use error::{CoreError, CoreResult};

// Re-export main types
pub use format::format_finance_number;
pub use series::PnlSeries;
pub use types::{
    ContractMonth, PositionRow, PositionRowBuilder, RowId, RowRecord, NOT_APPLICABLE_SENTINEL,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use vargrid_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::format::format_finance_number;
    pub use crate::series::PnlSeries;
    pub use crate::types::{ContractMonth, PositionRow, PositionRowBuilder, RowId, RowRecord};
}
