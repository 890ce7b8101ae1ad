//! Core types for the risk grid.

mod contract;
mod row;

pub use contract::{ContractMonth, NOT_APPLICABLE_SENTINEL};
pub use row::{PositionRow, PositionRowBuilder, RowId, RowRecord};
