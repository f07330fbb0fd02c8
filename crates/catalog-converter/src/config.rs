//! Converter configuration from the environment.
//!
//! - `CATALOG_DATA_DIR`: directory holding the CSV files (default: `.`)
//! - `CATALOG_OUTPUT_DIR`: directory for `data.json` (default: next to the executable)
//! - `CATALOG_REJECT_DUPLICATES`: `1`/`true`/`yes` makes repeated keys fatal

use std::path::PathBuf;

use catalog_loader::{DuplicatePolicy, LoadResult, LoaderConfig, OutputConfig};

pub const DATA_DIR_VAR: &str = "CATALOG_DATA_DIR";
pub const OUTPUT_DIR_VAR: &str = "CATALOG_OUTPUT_DIR";
pub const REJECT_DUPLICATES_VAR: &str = "CATALOG_REJECT_DUPLICATES";

pub struct ConverterConfig {
    pub loader: LoaderConfig,
    pub output: OutputConfig,
}

impl ConverterConfig {
    pub fn from_env() -> LoadResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> LoadResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut loader = LoaderConfig::default();
        if let Some(dir) = var(DATA_DIR_VAR) {
            loader.data_dir = PathBuf::from(dir);
        }
        if var(REJECT_DUPLICATES_VAR).is_some_and(|v| is_truthy(&v)) {
            loader.duplicates = DuplicatePolicy::Reject;
        }

        let output = match var(OUTPUT_DIR_VAR) {
            Some(dir) => OutputConfig::with_dir(dir),
            None => OutputConfig::next_to_executable()?,
        };

        Ok(Self { loader, output })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
