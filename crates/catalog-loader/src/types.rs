//! Loader-specific types for catalog file processing.

use std::path::{Path, PathBuf};

use catalog_types::Dataset;
use thiserror::Error;

/// Name of the consolidated output file.
pub const OUTPUT_FILE_NAME: &str = "data.json";

/// Errors that can occur while loading or writing the catalog.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error without a more specific context.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error, including rows whose length differs from the header.
    #[error("CSV parsing error in {source_name}: {error}")]
    Csv {
        /// The file (or reader label) being parsed.
        source_name: String,
        /// The underlying CSV error.
        #[source]
        error: csv::Error,
    },

    /// Input file not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Data directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// One or more dataset files are absent from the data directory.
    #[error("Required data file(s) not found: {files} in {directory}")]
    RequiredFileMissing {
        /// Comma separated list of missing file names.
        files: String,
        /// The directory that was searched.
        directory: String,
    },

    /// The file has no header row.
    #[error("Missing header row in {source_name}")]
    MissingHeader {
        /// The file (or reader label) being parsed.
        source_name: String,
    },

    /// The header has fewer columns than the dataset's key needs.
    #[error("Invalid header in {source_name}: expected at least {expected} columns, found {found}")]
    InvalidHeader {
        /// The file (or reader label) being parsed.
        source_name: String,
        /// Minimum column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// A named column is absent from the header.
    #[error("Missing required column '{column}' in {source_name}")]
    MissingColumn {
        /// The file (or reader label) being parsed.
        source_name: String,
        /// The name of the missing column.
        column: String,
    },

    /// A cell that must hold an integer does not.
    #[error("Invalid integer value '{value}' in column '{column}' of {source_name} at line {line}")]
    InvalidInteger {
        /// The file (or reader label) being parsed.
        source_name: String,
        /// The column holding the value.
        column: String,
        /// The invalid value.
        value: String,
        /// 1-based line number of the row.
        line: u64,
    },

    /// A record key occurs twice while duplicates are rejected.
    #[error("Duplicate key '{key}' in {source_name} at line {line}")]
    DuplicateKey {
        /// The file (or reader label) being parsed.
        source_name: String,
        /// The repeated key.
        key: String,
        /// 1-based line number of the repeating row.
        line: u64,
    },

    /// A record loader was asked for a dataset that is not record keyed.
    #[error("Dataset '{dataset}' is not keyed by record")]
    NotRecordKeyed {
        /// The dataset name.
        dataset: String,
    },

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure writing the output file.
    #[error("Failed to write {path}: {error}")]
    Write {
        /// The output path.
        path: String,
        /// The underlying I/O error.
        #[source]
        error: std::io::Error,
    },
}

/// Result type for catalog loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// How repeated record keys within one dataset are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later row replaces the earlier one, keeping the key's first position.
    #[default]
    Overwrite,
    /// A repeated key is a fatal error.
    Reject,
}

/// Configuration for loading the catalog.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Directory holding the `data_<name>.csv` files.
    pub data_dir: PathBuf,
    /// Handling of repeated record keys.
    pub duplicates: DuplicatePolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            duplicates: DuplicatePolicy::Overwrite,
        }
    }
}

impl LoaderConfig {
    /// Creates a config reading from the given directory.
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }
}

/// Configuration for writing the serialized catalog.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory that receives the output file.
    pub dir: PathBuf,
    /// Whether the document is also written to standard output.
    pub echo_stdout: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            echo_stdout: true,
        }
    }
}

impl OutputConfig {
    /// Creates a config writing into the given directory.
    pub fn with_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// Creates a config writing next to the running executable.
    ///
    /// # Errors
    /// Returns an error if the executable path cannot be determined.
    pub fn next_to_executable() -> LoadResult<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self::with_dir(dir))
    }

    /// Full path of the output file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(OUTPUT_FILE_NAME)
    }
}

/// Statistics from loading one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Data rows read from the file (header excluded).
    pub rows_read: usize,
    /// Entries in the resulting collection.
    pub entries: usize,
    /// Rows whose key had already been seen.
    pub duplicate_keys: usize,
}

/// Located dataset files in a data directory.
#[derive(Debug, Clone, Default)]
pub struct DataFiles {
    /// Path to `data_carnames.csv`.
    pub carnames: Option<PathBuf>,
    /// Path to `data_sets.csv`.
    pub sets: Option<PathBuf>,
    /// Path to `data_cars.csv`.
    pub cars: Option<PathBuf>,
    /// Path to `data_extras.csv`.
    pub extras: Option<PathBuf>,
    /// Path to `data_ranges.csv`.
    pub ranges: Option<PathBuf>,
}

impl DataFiles {
    /// Creates a new empty DataFiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the located path for a dataset.
    pub fn path(&self, dataset: Dataset) -> Option<&Path> {
        self.slot(dataset).as_deref()
    }

    /// Records the path for a dataset.
    pub fn set_path(&mut self, dataset: Dataset, path: PathBuf) {
        *self.slot_mut(dataset) = Some(path);
    }

    /// Returns true if every dataset file is present.
    pub fn has_required_files(&self) -> bool {
        Dataset::ALL.iter().all(|d| self.path(*d).is_some())
    }

    /// Returns the datasets whose file is missing.
    pub fn missing_files(&self) -> Vec<Dataset> {
        Dataset::ALL
            .into_iter()
            .filter(|d| self.path(*d).is_none())
            .collect()
    }

    fn slot(&self, dataset: Dataset) -> &Option<PathBuf> {
        match dataset {
            Dataset::CarNames => &self.carnames,
            Dataset::Sets => &self.sets,
            Dataset::Cars => &self.cars,
            Dataset::Extras => &self.extras,
            Dataset::Ranges => &self.ranges,
        }
    }

    fn slot_mut(&mut self, dataset: Dataset) -> &mut Option<PathBuf> {
        match dataset {
            Dataset::CarNames => &mut self.carnames,
            Dataset::Sets => &mut self.sets,
            Dataset::Cars => &mut self.cars,
            Dataset::Extras => &mut self.extras,
            Dataset::Ranges => &mut self.ranges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_config_default() {
        let config = LoaderConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.duplicates, DuplicatePolicy::Overwrite);
    }

    #[test]
    fn test_output_path() {
        let output = OutputConfig::with_dir("/srv/app");
        assert_eq!(output.path(), PathBuf::from("/srv/app/data.json"));
        assert!(output.echo_stdout);
    }

    #[test]
    fn test_next_to_executable() {
        let output = OutputConfig::next_to_executable().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(output.dir.as_path()), exe.parent());
    }

    #[test]
    fn test_data_files_missing() {
        let mut files = DataFiles::new();
        files.set_path(Dataset::Sets, PathBuf::from("data_sets.csv"));
        files.set_path(Dataset::Cars, PathBuf::from("data_cars.csv"));
        files.set_path(Dataset::Extras, PathBuf::from("data_extras.csv"));

        assert!(!files.has_required_files());
        assert_eq!(
            files.missing_files(),
            vec![Dataset::CarNames, Dataset::Ranges]
        );
        assert_eq!(files.path(Dataset::Sets), Some(Path::new("data_sets.csv")));
    }
}
