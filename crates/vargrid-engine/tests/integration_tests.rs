//! End-to-end tests for the grouping and risk aggregation pipeline.
//!
//! These cover the behaviors the grid depends on:
//! - stable bucket order across identical calls
//! - overrides surviving selector swaps
//! - group VaR derived from the combined series, not summed scalars
//! - degraded rows never disturbing unrelated groups

use approx::assert_relative_eq;
use vargrid_core::{PositionRow, RowId, RowRecord};
use vargrid_engine::prelude::*;
use vargrid_engine::{aggregate_by_contract_month, aggregate_by_location, VarConfig};

fn row(id: &str, location: &str, exposure: f64, series: Vec<f64>) -> PositionRow {
    PositionRow::builder()
        .id(id)
        .location(location)
        .exposure(exposure)
        .pnl_series(series)
        .build()
        .unwrap()
}

/// A 20-element series whose two smallest values are `worst` and `second`.
fn series_with_tail(worst: f64, second: f64) -> Vec<f64> {
    let mut s = vec![0.0; 18];
    s.push(worst);
    s.push(second);
    s
}

// =============================================================================
// LABELING AND ORDER
// =============================================================================

#[test]
fn aggregate_is_idempotent() {
    let rows = vec![
        row("R1", "NYC", 10.0, vec![1.0, -2.0]),
        row("R2", "HOU", -5.0, vec![3.0, 4.0]),
        row("R3", "NYC", 2.5, vec![-1.0]),
    ];
    let store = GroupOverrideStore::new();
    store.assign(&[RowId::from("R3")], "Book A");
    let config = VarConfig::default();

    let first = aggregate_by_location(&rows, &store, &config);
    let second = aggregate_by_location(&rows, &store, &config);

    assert_eq!(first, second);
}

#[test]
fn override_persists_across_selector_change() {
    let rows = vec![
        row("R1", "NYC", 10.0, vec![1.0]),
        row("R2", "HOU", 20.0, vec![2.0]),
    ];
    let store = GroupOverrideStore::new();
    store.assign(&[RowId::from("R1")], "X");
    let config = VarConfig::default();

    let by_location = aggregate_by_location(&rows, &store, &config);
    assert!(by_location.iter().any(|g| g.label == "X"
        && g.member_ids == vec![RowId::from("R1")]));

    // Switching the grouping dimension must not evict R1 from "X".
    let by_month = aggregate_by_contract_month(&rows, &store, &config);
    assert!(by_month.iter().any(|g| g.label == "X"
        && g.member_ids == vec![RowId::from("R1")]));
}

#[test]
fn ungroup_restores_selector_default() {
    let rows = vec![row("R1", "NYC", 10.0, vec![1.0])];
    let store = GroupOverrideStore::new();
    let config = VarConfig::default();

    store.assign(&[RowId::from("R1")], "X");
    let grouped = aggregate_by_location(&rows, &store, &config);
    assert_eq!(grouped[0].label, "X");

    store.clear(&[RowId::from("R1")]);
    let restored = aggregate_by_location(&rows, &store, &config);
    assert_eq!(restored[0].label, "NYC");
}

// =============================================================================
// VAR SEMANTICS
// =============================================================================

#[test]
fn group_var_is_not_additive() {
    // Individually: each 20-element series has VaR at index 1 (the
    // second-smallest value).
    let series_a = series_with_tail(-100.0, -50.0);
    let series_b: Vec<f64> = series_a.iter().map(|v| -v).collect();

    let config = VarConfig::default();
    let v1 = compute_var(&series_a, &config).unwrap();
    let v2 = compute_var(&series_b, &config).unwrap();
    assert_relative_eq!(v1, -50.0);
    assert_relative_eq!(v2, 0.0);

    // Grouped: the positions hedge each other, so the combined series is
    // flat and the group VaR is zero - far from v1 + v2.
    let rows = vec![
        row("R1", "HOU", 10.0, series_a),
        row("R2", "HOU", -10.0, series_b),
    ];
    let store = GroupOverrideStore::new();
    let groups = aggregate_by_location(&rows, &store, &config);

    assert_eq!(groups.len(), 1);
    let group_var = groups[0].group_var.unwrap();
    assert_relative_eq!(group_var, 0.0);
    assert!((group_var - (v1 + v2)).abs() > 1.0);
}

#[test]
fn var_quantile_on_length_20_window() {
    // floor(20 * 0.05) = 1: the second-smallest value of the window.
    let series: Vec<f64> = (1..=20).map(f64::from).collect();
    let rows = vec![row("R1", "HOU", 0.0, series)];
    let store = GroupOverrideStore::new();

    let groups = aggregate_by_location(&rows, &store, &VarConfig::default());
    assert_eq!(groups[0].group_var, Some(2.0));
}

#[test]
fn poisoned_value_outside_lookback_is_ignored() {
    let mut series = vec![-1_000_000.0];
    series.extend((0..251).map(|i| f64::from(i % 7) - 3.0));
    let rows = vec![row("R1", "HOU", 0.0, series.clone())];
    let store = GroupOverrideStore::new();
    let config = VarConfig::default();

    let groups = aggregate_by_location(&rows, &store, &config);
    let var = groups[0].group_var.unwrap();
    assert!(var > -1_000_000.0);
    assert_eq!(Some(var), compute_var(&series[1..], &config));
}

// =============================================================================
// INGEST TO AGGREGATE
// =============================================================================

#[test]
fn backend_records_flow_through_pipeline() {
    let json = r#"[
        {"id": "1", "location": "HOU", "contract_month": "2025-06-01",
         "exposure": 500.0, "pnl_vector": "[10, -20, 30]"},
        {"id": "2", "location": "HOU", "contract_month": "2025-06-01",
         "exposure": 250.0, "pnl_vector": "[-5, 15, -25]"},
        {"id": "3", "location": "NYC", "contract_month": "2006-06-01",
         "exposure": -100.0, "pnl_vector": "not a vector"}
    ]"#;
    let records: Vec<RowRecord> = serde_json::from_str(json).unwrap();
    let ingestion = ingest(records).unwrap();
    assert_eq!(ingestion.warnings.len(), 1);

    let config = VarConfig::default();
    let store = GroupOverrideStore::new();
    let groups = aggregate_by_location(&ingestion.rows, &store, &config);

    // HOU combines cleanly: series [5, -5, 5], worst loss -5.
    let hou = groups.iter().find(|g| g.label == "HOU").unwrap();
    assert_relative_eq!(hou.total_exposure, 750.0);
    assert_eq!(hou.group_var, Some(-5.0));

    // The degraded NYC row still aggregates its exposure, with no VaR.
    let nyc = groups.iter().find(|g| g.label == "NYC").unwrap();
    assert_relative_eq!(nyc.total_exposure, -100.0);
    assert_eq!(nyc.group_var, None);
}

#[test]
fn duplicate_id_rejected_at_ingestion() {
    let records = vec![
        RowRecord {
            id: "7".to_string(),
            location: Some("HOU".to_string()),
            contract_month: None,
            exposure: 1.0,
            pnl_vector: None,
        };
        2
    ];
    assert!(matches!(
        ingest(records),
        Err(EngineError::DuplicateRowId { .. })
    ));
}

#[test]
fn mixed_series_lengths_align_at_today() {
    // R2's short series shares its last observation date with R1's, so
    // the combined tail is the sum of tails and the old head is R1 alone.
    let rows = vec![
        row("R1", "HOU", 0.0, vec![-40.0, 1.0, 2.0]),
        row("R2", "HOU", 0.0, vec![3.0, 4.0]),
    ];
    let store = GroupOverrideStore::new();
    let groups = aggregate_by_location(&rows, &store, &VarConfig::default());

    // Combined: [-40, 4, 6]; worst loss -40 at floor(3 * 0.05) = 0.
    assert_eq!(groups[0].group_var, Some(-40.0));
}
