//! Catalog assembly.
//!
//! Loads every dataset in the fixed order `carnames`, `sets`, `cars`,
//! `extras`, `ranges` and combines them into one [`Catalog`]. Each file is
//! opened, fully read, and closed before the next one; the first error
//! aborts the whole load.
//!
//! ```ignore
//! use catalog_loader::{discover_data_files, CatalogLoader, LoaderConfig};
//!
//! let config = LoaderConfig::with_data_dir("data");
//! let files = discover_data_files(&config.data_dir)?;
//! let mut loader = CatalogLoader::new(config);
//! let catalog = loader.load_all(&files)?;
//! ```

use std::path::Path;

use catalog_types::{Catalog, Dataset, RangeMap, RecordMap};
use tracing::info;

use crate::loader::discover_data_files;
use crate::parser::CsvTable;
use crate::ranges::parse_ranges;
use crate::records::parse_records;
use crate::types::{DataFiles, LoadError, LoadResult, LoaderConfig, ParseStats};

/// Loads catalog datasets and tracks per-dataset statistics.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    config: LoaderConfig,
    stats: Vec<(Dataset, ParseStats)>,
}

impl CatalogLoader {
    /// Creates a loader with the given configuration.
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            stats: Vec::new(),
        }
    }

    /// Returns the loader configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Statistics for every dataset loaded so far, in load order.
    pub fn stats(&self) -> &[(Dataset, ParseStats)] {
        &self.stats
    }

    /// Loads a keyed record dataset from a file.
    ///
    /// # Errors
    /// Returns an error if `dataset` is [`Dataset::Ranges`], or if the file
    /// cannot be read or parsed.
    pub fn load_records<P: AsRef<Path>>(
        &mut self,
        dataset: Dataset,
        path: P,
    ) -> LoadResult<RecordMap> {
        if dataset == Dataset::Ranges {
            return Err(LoadError::NotRecordKeyed {
                dataset: dataset.name().to_string(),
            });
        }

        let table = CsvTable::from_path(path)?;
        let (records, stats) = parse_records(table, dataset, self.config.duplicates)?;
        self.record_stats(dataset, stats);
        Ok(records)
    }

    /// Loads the ranges dataset from a file.
    pub fn load_ranges<P: AsRef<Path>>(&mut self, path: P) -> LoadResult<RangeMap> {
        let table = CsvTable::from_path(path)?;
        let (ranges, stats) = parse_ranges(table)?;
        self.record_stats(Dataset::Ranges, stats);
        Ok(ranges)
    }

    /// Loads every dataset from located files.
    ///
    /// # Errors
    /// Returns the first error encountered; nothing is returned for the
    /// datasets loaded before it.
    pub fn load_all(&mut self, files: &DataFiles) -> LoadResult<Catalog> {
        let mut catalog = Catalog::new();

        for dataset in Dataset::SIMPLE {
            let path = required_path(files, dataset, &self.config)?;
            let records = self.load_records(dataset, path)?;
            catalog.set_records(dataset, records);
        }

        let path = required_path(files, Dataset::Ranges, &self.config)?;
        let ranges = self.load_ranges(path)?;
        catalog.set_ranges(ranges);

        Ok(catalog)
    }

    fn record_stats(&mut self, dataset: Dataset, stats: ParseStats) {
        info!(
            %dataset,
            rows = stats.rows_read,
            entries = stats.entries,
            duplicates = stats.duplicate_keys,
            "loaded dataset"
        );
        self.stats.push((dataset, stats));
    }
}

fn required_path<'a>(
    files: &'a DataFiles,
    dataset: Dataset,
    config: &LoaderConfig,
) -> LoadResult<&'a Path> {
    files.path(dataset).ok_or_else(|| LoadError::RequiredFileMissing {
        files: dataset.file_name(),
        directory: config.data_dir.display().to_string(),
    })
}

/// Discovers and loads the whole catalog from `config.data_dir`.
pub fn load_catalog(config: &LoaderConfig) -> LoadResult<Catalog> {
    let files = discover_data_files(&config.data_dir)?;
    CatalogLoader::new(config.clone()).load_all(&files)
}
