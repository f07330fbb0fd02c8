//! # catalog-loader
//!
//! Loader for the train car catalog's CSV data files.
//!
//! Reads `data_carnames.csv`, `data_sets.csv`, `data_cars.csv`,
//! `data_extras.csv` and `data_ranges.csv` from a data directory, builds a
//! [`Catalog`](catalog_types::Catalog), and writes it as a single JSON
//! document.

#![warn(missing_docs)]

pub mod catalog;
pub mod loader;
pub mod parser;
pub mod ranges;
pub mod records;
pub mod types;
pub mod writer;

pub use catalog::{load_catalog, CatalogLoader};
pub use loader::discover_data_files;
pub use parser::{CsvTable, Row};
pub use types::{
    DataFiles, DuplicatePolicy, LoadError, LoadResult, LoaderConfig, OutputConfig, ParseStats,
    OUTPUT_FILE_NAME,
};
pub use writer::{to_json, write_catalog};

// Re-export catalog-types for convenience
pub use catalog_types;
