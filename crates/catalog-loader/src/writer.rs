//! Catalog serialization and output.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use catalog_types::Catalog;
use tracing::info;

use crate::types::{LoadError, LoadResult, OutputConfig};

/// Serializes the catalog to compact JSON.
pub fn to_json(catalog: &Catalog) -> LoadResult<String> {
    Ok(serde_json::to_string(catalog)?)
}

/// Serializes the catalog and writes it to the output file, then to `stdout`
/// when enabled.
///
/// The document is fully serialized before the file is touched, so a
/// serialization failure leaves no output behind. Returns the written path.
pub fn write_catalog<W: Write>(
    catalog: &Catalog,
    output: &OutputConfig,
    mut stdout: W,
) -> LoadResult<PathBuf> {
    let json = to_json(catalog)?;
    let path = output.path();

    fs::write(&path, &json).map_err(|error| LoadError::Write {
        path: path.display().to_string(),
        error,
    })?;
    info!(path = %path.display(), bytes = json.len(), "wrote catalog");

    if output.echo_stdout {
        writeln!(stdout, "{json}")?;
        stdout.flush()?;
    }

    Ok(path)
}
