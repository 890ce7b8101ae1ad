//! Row ingestion.
//!
//! Converts wire-format [`RowRecord`]s into [`PositionRow`]s, enforcing the
//! id-uniqueness invariant and degrading bad fields per row instead of
//! failing the whole batch. Data-quality issues become [`IngestWarning`]s;
//! only a duplicate row id is a hard error, because it breaks override
//! addressing and stable bucketing.

use crate::error::{EngineError, EngineResult, IngestWarning};
use std::collections::HashSet;
use vargrid_core::{ContractMonth, PnlSeries, PositionRow, RowId, RowRecord};

/// Result of ingesting a batch of records: the usable rows plus the
/// warnings raised while degrading bad fields.
#[derive(Debug, Clone, Default)]
pub struct Ingestion {
    /// Rows ready for aggregation, in input order.
    pub rows: Vec<PositionRow>,

    /// Row-level data-quality warnings.
    pub warnings: Vec<IngestWarning>,
}

impl Ingestion {
    /// Returns true if every record ingested cleanly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Ingests a batch of backend records.
///
/// Degradation rules, applied per row:
/// - missing `location` → empty location label, [`IngestWarning::MissingLocation`]
/// - unparseable `contract_month` → not-applicable, [`IngestWarning::InvalidContractMonth`]
/// - missing or malformed `pnl_vector` → empty series,
///   [`IngestWarning::MalformedSeries`] (only when malformed; absence is
///   legal and silent)
///
/// Every warning is also emitted through `tracing::warn!`.
///
/// # Errors
///
/// Returns [`EngineError::DuplicateRowId`] if two records share an id.
pub fn ingest(records: Vec<RowRecord>) -> EngineResult<Ingestion> {
    let mut seen: HashSet<RowId> = HashSet::with_capacity(records.len());
    let mut ingestion = Ingestion {
        rows: Vec::with_capacity(records.len()),
        warnings: Vec::new(),
    };

    for record in records {
        let id = RowId::from(record.id);
        if !seen.insert(id.clone()) {
            return Err(EngineError::DuplicateRowId { id });
        }

        let location = match record.location {
            Some(location) => location,
            None => {
                tracing::warn!(row_id = %id, "Missing location, using empty label");
                ingestion
                    .warnings
                    .push(IngestWarning::MissingLocation { id: id.clone() });
                String::new()
            }
        };

        let contract_month = match record.contract_month.as_deref() {
            None => ContractMonth::NotApplicable,
            Some(value) => match ContractMonth::parse(value) {
                Ok(cm) => cm,
                Err(_) => {
                    tracing::warn!(row_id = %id, value, "Invalid contract month, treating as not applicable");
                    ingestion.warnings.push(IngestWarning::InvalidContractMonth {
                        id: id.clone(),
                        value: value.to_string(),
                    });
                    ContractMonth::NotApplicable
                }
            },
        };

        let pnl_series = match record.pnl_vector.as_deref() {
            None => PnlSeries::new(),
            Some(raw) => match PnlSeries::parse(raw) {
                Ok(series) => series,
                Err(e) => {
                    tracing::warn!(row_id = %id, error = %e, "Malformed PnL series, degrading to empty");
                    ingestion.warnings.push(IngestWarning::MalformedSeries {
                        id: id.clone(),
                        detail: e.to_string(),
                    });
                    PnlSeries::new()
                }
            },
        };

        ingestion.rows.push(PositionRow {
            id,
            location,
            contract_month,
            exposure: record.exposure,
            pnl_series,
        });
    }

    Ok(ingestion)
}
