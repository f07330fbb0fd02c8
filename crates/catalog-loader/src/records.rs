//! Keyed record datasets: `carnames`, `sets`, `cars` and `extras`.
//!
//! The leading key column(s) of each row form the record key; every remaining
//! column becomes a field named by its header.

use std::io::Read;

use catalog_types::{car_key, Dataset, Record, RecordMap};
use tracing::{debug, warn};

use crate::parser::{CsvTable, Row};
use crate::types::{DuplicatePolicy, LoadError, LoadResult, ParseStats};

/// Builds the record key for a row.
fn record_key(dataset: Dataset, row: &Row) -> String {
    match dataset {
        Dataset::Cars => car_key(row.get(0), row.get(1)),
        _ => row.get(0).to_string(),
    }
}

/// Builds the field mapping for a row, skipping the key column(s).
fn record_fields(dataset: Dataset, headers: &csv::StringRecord, row: &Row) -> Record {
    headers
        .iter()
        .zip(row.fields.iter())
        .skip(dataset.key_columns())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Loads a keyed record dataset from an open table.
///
/// # Errors
/// Returns an error if the header is too narrow for the dataset's key, if
/// any row is malformed, or if a key repeats under [`DuplicatePolicy::Reject`].
pub fn parse_records<R: Read>(
    mut table: CsvTable<R>,
    dataset: Dataset,
    duplicates: DuplicatePolicy,
) -> LoadResult<(RecordMap, ParseStats)> {
    table.require_columns(dataset.key_columns())?;

    let headers = table.headers().clone();
    let source_name = table.source_name().to_string();
    let mut records = RecordMap::new();
    let mut stats = ParseStats::default();

    for row in table.by_ref() {
        let row = row?;
        debug!(%dataset, line = row.line, fields = ?row.fields.iter().collect::<Vec<_>>(), "row");

        let key = record_key(dataset, &row);
        let fields = record_fields(dataset, &headers, &row);

        if records.contains_key(&key) {
            stats.duplicate_keys += 1;
            match duplicates {
                DuplicatePolicy::Reject => {
                    return Err(LoadError::DuplicateKey {
                        source_name,
                        key,
                        line: row.line,
                    });
                }
                DuplicatePolicy::Overwrite => {
                    warn!(%dataset, %key, line = row.line, "duplicate key, later row wins");
                }
            }
        }

        records.insert(key, fields);
    }

    stats.rows_read = table.rows_read();
    stats.entries = records.len();
    Ok((records, stats))
}
