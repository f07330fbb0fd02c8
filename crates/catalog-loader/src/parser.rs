//! Generic catalog CSV reader.
//!
//! Wraps a `csv::Reader` configured for the catalog's input files:
//! comma delimited, mandatory header row, every row as wide as the header.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{LoadError, LoadResult};

/// One data row together with its position in the source.
#[derive(Debug, Clone)]
pub struct Row {
    /// 1-based line number the row starts on.
    pub line: u64,
    /// The row's cells, as wide as the header.
    pub fields: StringRecord,
}

impl Row {
    /// Returns the cell at `index`, or an empty string if out of range.
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).unwrap_or("")
    }
}

/// A reader over one catalog CSV file.
///
/// The header row is read and validated on construction; iterating yields
/// the data rows in file order.
pub struct CsvTable<R: Read> {
    reader: Reader<R>,
    source_name: String,
    headers: StringRecord,
    rows_read: usize,
}

impl CsvTable<BufReader<File>> {
    /// Opens a table from a file path.
    ///
    /// # Errors
    /// Returns an error if the file does not exist, cannot be opened, or has
    /// no header row.
    pub fn from_path<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(LoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), path.display().to_string())
    }
}

impl<R: Read> CsvTable<R> {
    /// Creates a table from a reader, labelling errors with `source_name`.
    pub fn from_reader(reader: R, source_name: impl Into<String>) -> LoadResult<Self> {
        let source_name = source_name.into();
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|error| LoadError::Csv {
                source_name: source_name.clone(),
                error,
            })?
            .clone();

        if headers.is_empty() {
            return Err(LoadError::MissingHeader { source_name });
        }

        // Handle UTF-8 BOM at start of file
        let headers: StringRecord = headers
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
            .collect();

        Ok(Self {
            reader: csv_reader,
            source_name,
            headers,
            rows_read: 0,
        })
    }

    /// Returns the header row.
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Returns the label used in errors for this table.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Returns the number of data rows read so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Ensures the header has at least `min` columns.
    pub fn require_columns(&self, min: usize) -> LoadResult<()> {
        if self.headers.len() < min {
            return Err(LoadError::InvalidHeader {
                source_name: self.source_name.clone(),
                expected: min,
                found: self.headers.len(),
            });
        }
        Ok(())
    }

    /// Returns the index of the header named `column`.
    pub fn column_index(&self, column: &str) -> LoadResult<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| LoadError::MissingColumn {
                source_name: self.source_name.clone(),
                column: column.to_string(),
            })
    }
}

impl<R: Read> Iterator for CsvTable<R> {
    type Item = LoadResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    // Skip empty records
                    if record.is_empty() {
                        continue;
                    }

                    self.rows_read += 1;
                    let line = record.position().map(|p| p.line()).unwrap_or(0);
                    return Some(Ok(Row {
                        line,
                        fields: record,
                    }));
                }
                Ok(false) => return None, // End of file
                Err(error) => {
                    return Some(Err(LoadError::Csv {
                        source_name: self.source_name.clone(),
                        error,
                    }))
                }
            }
        }
    }
}

/// Helper functions for parsing cell values.
pub mod parse {
    use std::str::FromStr;

    /// Parses an integer, ignoring surrounding whitespace.
    pub fn integer<T: FromStr>(value: &str) -> Option<T> {
        value.trim().parse::<T>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> LoadResult<CsvTable<&[u8]>> {
        CsvTable::from_reader(text.as_bytes(), "test.csv")
    }

    #[test]
    fn test_reads_header_and_rows() {
        let mut t = table("id,name\nS1,Alpha\nS2,Beta\n").unwrap();
        assert_eq!(t.headers().iter().collect::<Vec<_>>(), vec!["id", "name"]);

        let first = t.next().unwrap().unwrap();
        assert_eq!(first.get(0), "S1");
        assert_eq!(first.get(1), "Alpha");
        assert_eq!(first.line, 2);

        let second = t.next().unwrap().unwrap();
        assert_eq!(second.get(1), "Beta");
        assert!(t.next().is_none());
        assert_eq!(t.rows_read(), 2);
    }

    #[test]
    fn test_quoted_fields() {
        let mut t = table("id,info\nVS,\"Part of set V$1, refurbished\"\n").unwrap();
        let row = t.next().unwrap().unwrap();
        assert_eq!(row.get(1), "Part of set V$1, refurbished");
    }

    #[test]
    fn test_strips_bom() {
        let t = table("\u{feff}id,name\n").unwrap();
        assert_eq!(t.headers().get(0), Some("id"));
    }

    #[test]
    fn test_empty_input_has_no_header() {
        assert!(matches!(table(""), Err(LoadError::MissingHeader { .. })));
    }

    #[test]
    fn test_short_row_is_error() {
        let mut t = table("make,model,year\nToyota,Corolla\n").unwrap();
        assert!(matches!(t.next(), Some(Err(LoadError::Csv { .. }))));
    }

    #[test]
    fn test_long_row_is_error() {
        let mut t = table("id,name\nS1,Alpha,extra\n").unwrap();
        assert!(matches!(t.next(), Some(Err(LoadError::Csv { .. }))));
    }

    #[test]
    fn test_require_columns() {
        let t = table("id\n").unwrap();
        assert!(t.require_columns(1).is_ok());
        assert!(matches!(
            t.require_columns(2),
            Err(LoadError::InvalidHeader {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_column_index() {
        let t = table("type,set,start\n").unwrap();
        assert_eq!(t.column_index("start").unwrap(), 2);
        assert!(matches!(
            t.column_index("end"),
            Err(LoadError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = CsvTable::from_path("/nonexistent/data_sets.csv");
        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse::integer::<i64>("10"), Some(10));
        assert_eq!(parse::integer::<i64>(" 20 "), Some(20));
        assert_eq!(parse::integer::<i64>("-3"), Some(-3));
        assert_eq!(parse::integer::<i64>("ten"), None);
        assert_eq!(parse::integer::<i64>(""), None);
    }
}
