//! # Vargrid Engine
//!
//! Grouping and risk aggregation for the Vargrid risk grid.
//!
//! The grid lets a user regroup position rows on the fly and shows, for
//! every group, the summed exposure and the group's Value-at-Risk. Group
//! VaR is *not* the sum of per-row VaRs: it is the loss quantile of the
//! group's combined PnL distribution, so this crate always combines
//! member series before computing the statistic.
//!
//! ## Components
//!
//! - [`compute_var`] / [`VarConfig`] — historical-simulation VaR over a
//!   PnL series
//! - [`GroupOverrideStore`] — session-scoped map from row id to a
//!   user-chosen group label, with atomic batch updates
//! - [`ingest`] — wire-record conversion with per-row degradation
//!   warnings and the duplicate-id check
//! - [`aggregate`] — bucketing by effective label plus per-group
//!   exposure and VaR
//!
//! ## Quick Start
//!
//! ```rust
//! use vargrid_core::{PositionRow, RowId};
//! use vargrid_engine::{aggregate_by_location, GroupOverrideStore, VarConfig};
//!
//! let rows = vec![
//!     PositionRow::builder().id("R1").location("HOU")
//!         .exposure(100.0).pnl_series(vec![-5.0, 2.0]).build().unwrap(),
//!     PositionRow::builder().id("R2").location("NYC")
//!         .exposure(-30.0).pnl_series(vec![1.0, -4.0]).build().unwrap(),
//! ];
//!
//! // Pull R2 into a custom group; the override survives selector swaps.
//! let store = GroupOverrideStore::new();
//! store.assign(&[RowId::from("R2")], "Spread Book");
//!
//! let groups = aggregate_by_location(&rows, &store, &VarConfig::default());
//! assert_eq!(groups[1].label, "Spread Book");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod error;
pub mod ingest;
pub mod overrides;
pub mod selector;
pub mod var;

// Re-export error types at crate root
pub use error::{EngineError, EngineResult, IngestWarning};

// Re-export main types and functions
pub use aggregate::{
    aggregate, aggregate_by_contract_month, aggregate_by_location, GroupAggregate,
};
pub use ingest::{ingest, Ingestion};
pub use overrides::GroupOverrideStore;
pub use selector::GroupSelector;
pub use var::{compute_var, VarConfig, DEFAULT_CONFIDENCE, DEFAULT_LOOKBACK};

/// Prelude module for convenient imports.
///
/// ```rust
/// use vargrid_engine::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{
        aggregate, aggregate_by_contract_month, aggregate_by_location, GroupAggregate,
    };
    pub use crate::error::{EngineError, EngineResult, IngestWarning};
    pub use crate::ingest::{ingest, Ingestion};
    pub use crate::overrides::GroupOverrideStore;
    pub use crate::selector::GroupSelector;
    pub use crate::var::{compute_var, VarConfig};

    // Re-export commonly used types from the core crate
    pub use vargrid_core::{ContractMonth, PnlSeries, PositionRow, RowId, RowRecord};
}
