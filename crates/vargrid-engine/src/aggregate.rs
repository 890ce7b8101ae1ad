//! Per-group aggregation.
//!
//! Buckets rows by their effective group label (user override first, then
//! the default selector), sums exposures, combines PnL series elementwise,
//! and re-derives each group's VaR from the combined series. VaR is an
//! order statistic of the combined distribution, so it is never summed
//! from per-row VaR scalars.

use crate::overrides::GroupOverrideStore;
use crate::selector::GroupSelector;
use crate::var::{compute_var, VarConfig};
use serde::Serialize;
use std::collections::HashMap;
use vargrid_core::{PositionRow, RowId};

/// Aggregate view of one effective group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAggregate {
    /// Effective group label.
    pub label: String,

    /// Arithmetic sum of member exposures.
    pub total_exposure: f64,

    /// VaR of the combined member PnL series; `None` when the group has
    /// no observations to draw a quantile from.
    pub group_var: Option<f64>,

    /// Member row ids, in input order.
    pub member_ids: Vec<RowId>,
}

/// Buckets rows by effective label and aggregates each bucket.
///
/// The selector provides the default label for a row; an override in the
/// store wins over the selector. Buckets appear in first-seen order of
/// their labels, which is stable across repeated calls with unchanged
/// input. A single-row bucket goes through the same summation and VaR
/// pipeline as a multi-row bucket.
///
/// Rows with empty or degraded series contribute nothing to the combined
/// series of their bucket and never affect other buckets.
///
/// # Example
///
/// ```rust
/// use vargrid_core::PositionRow;
/// use vargrid_engine::{aggregate, GroupOverrideStore, GroupSelector, VarConfig};
///
/// let rows = vec![
///     PositionRow::builder().id("R1").location("HOU")
///         .exposure(100.0).pnl_series(vec![1.0, -2.0]).build().unwrap(),
///     PositionRow::builder().id("R2").location("HOU")
///         .exposure(-40.0).pnl_series(vec![-3.0, 5.0]).build().unwrap(),
/// ];
/// let store = GroupOverrideStore::new();
/// let groups = aggregate(
///     &rows,
///     |r| GroupSelector::Location.key(r),
///     &store,
///     &VarConfig::default(),
/// );
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].total_exposure, 60.0);
/// // Combined series [-2.0, 3.0], worst loss -2.0
/// assert_eq!(groups[0].group_var, Some(-2.0));
/// ```
#[must_use]
pub fn aggregate<F>(
    rows: &[PositionRow],
    selector: F,
    store: &GroupOverrideStore,
    config: &VarConfig,
) -> Vec<GroupAggregate>
where
    F: Fn(&PositionRow) -> String,
{
    // Bucket by effective label, preserving first-seen label order so the
    // grid does not reflow between identical calls.
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<&PositionRow>> = HashMap::new();

    for row in rows {
        let label = store.effective_label(&row.id, &selector(row));
        if !buckets.contains_key(&label) {
            order.push(label.clone());
        }
        buckets.entry(label).or_default().push(row);
    }

    order
        .into_iter()
        .map(|label| {
            let members = &buckets[&label];
            let total_exposure = members.iter().map(|r| r.exposure).sum();
            let combined = combine_series(members.iter().map(|r| r.pnl_series.as_slice()));
            let group_var = compute_var(&combined, config);
            let member_ids = members.iter().map(|r| r.id.clone()).collect();

            GroupAggregate {
                label,
                total_exposure,
                group_var,
                member_ids,
            }
        })
        .collect()
}

/// Aggregates with the location selector.
#[must_use]
pub fn aggregate_by_location(
    rows: &[PositionRow],
    store: &GroupOverrideStore,
    config: &VarConfig,
) -> Vec<GroupAggregate> {
    aggregate(rows, |r| GroupSelector::Location.key(r), store, config)
}

/// Aggregates with the contract-month selector.
#[must_use]
pub fn aggregate_by_contract_month(
    rows: &[PositionRow],
    store: &GroupOverrideStore,
    config: &VarConfig,
) -> Vec<GroupAggregate> {
    aggregate(rows, |r| GroupSelector::ContractMonth.key(r), store, config)
}

/// Elementwise sum of PnL series with trailing alignment.
///
/// All series end at "today", so their last elements coincide. A shorter
/// series has no observations at the older offsets and contributes zero
/// there; it is never truncated against a longer one.
fn combine_series<'a>(series: impl Iterator<Item = &'a [f64]>) -> Vec<f64> {
    let series: Vec<&[f64]> = series.collect();
    let max_len = series.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut combined = vec![0.0; max_len];

    for s in series {
        let offset = max_len - s.len();
        for (i, value) in s.iter().enumerate() {
            combined[offset + i] += value;
        }
    }
    combined
}
