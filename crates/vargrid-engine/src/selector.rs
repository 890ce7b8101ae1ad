//! Default grouping-key selectors.
//!
//! A selector is a pure function from a row to its default group label.
//! The aggregation API is generic over any `Fn(&PositionRow) -> String`;
//! this enum names the two policies the grid ships with.

use serde::{Deserialize, Serialize};
use vargrid_core::PositionRow;

/// Named grouping-key policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupSelector {
    /// Group by venue/desk code.
    Location,
    /// Group by formatted contract month; the not-applicable sentinel
    /// maps to an empty label.
    ContractMonth,
}

impl GroupSelector {
    /// Returns the default group label for a row under this policy.
    #[must_use]
    pub fn key(&self, row: &PositionRow) -> String {
        match self {
            Self::Location => row.location.clone(),
            Self::ContractMonth => row.contract_month.label(),
        }
    }
}
