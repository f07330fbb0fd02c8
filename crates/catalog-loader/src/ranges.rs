//! Car number ranges, `data_ranges.csv`.
//!
//! Columns are located by header name. Rows are grouped by their `type`
//! column, keeping input order within each group.

use std::io::Read;

use catalog_types::{RangeEntry, RangeMap};
use tracing::debug;

use crate::parser::{parse, CsvTable, Row};
use crate::types::{LoadError, LoadResult, ParseStats};

/// Columns every ranges file must carry.
const RANGE_COLUMNS: &[&str] = &["type", "set", "start", "end", "extra"];

/// Header positions of the range columns.
struct RangeColumns {
    letter: usize,
    set: usize,
    start: usize,
    end: usize,
    extra: usize,
}

impl RangeColumns {
    fn locate<R: Read>(table: &CsvTable<R>) -> LoadResult<Self> {
        Ok(Self {
            letter: table.column_index(RANGE_COLUMNS[0])?,
            set: table.column_index(RANGE_COLUMNS[1])?,
            start: table.column_index(RANGE_COLUMNS[2])?,
            end: table.column_index(RANGE_COLUMNS[3])?,
            extra: table.column_index(RANGE_COLUMNS[4])?,
        })
    }
}

fn integer_cell(row: &Row, index: usize, column: &str, source_name: &str) -> LoadResult<i64> {
    let value = row.get(index);
    parse::integer(value).ok_or_else(|| LoadError::InvalidInteger {
        source_name: source_name.to_string(),
        column: column.to_string(),
        value: value.to_string(),
        line: row.line,
    })
}

/// Loads the ranges dataset from an open table.
///
/// # Errors
/// Returns an error if a required column is missing, a row is malformed,
/// or `start`/`end` is not an integer.
pub fn parse_ranges<R: Read>(mut table: CsvTable<R>) -> LoadResult<(RangeMap, ParseStats)> {
    let columns = RangeColumns::locate(&table)?;
    let headers = table.headers().clone();
    let source_name = table.source_name().to_string();

    let mut ranges = RangeMap::new();
    let mut stats = ParseStats::default();

    for row in table.by_ref() {
        let row = row?;
        debug!(
            line = row.line,
            row = ?headers.iter().zip(row.fields.iter()).collect::<Vec<_>>(),
            "ranges row"
        );

        let letter = row.get(columns.letter).to_string();
        let entry = RangeEntry {
            set: row.get(columns.set).to_string(),
            start: integer_cell(&row, columns.start, "start", &source_name)?,
            end: integer_cell(&row, columns.end, "end", &source_name)?,
            extra: row.get(columns.extra).to_string(),
            letter: letter.clone(),
        };

        ranges.entry(letter).or_default().push(entry);
        stats.entries += 1;
    }

    stats.rows_read = table.rows_read();
    Ok((ranges, stats))
}
