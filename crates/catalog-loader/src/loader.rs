//! Data file discovery.

use std::path::Path;

use catalog_types::Dataset;

use crate::types::{DataFiles, LoadError, LoadResult};

/// Locates every `data_<name>.csv` file in a data directory.
///
/// # Errors
/// Returns an error if the directory does not exist or any dataset file is
/// missing, naming every missing file.
pub fn discover_data_files<P: AsRef<Path>>(path: P) -> LoadResult<DataFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(LoadError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut files = DataFiles::new();
    for dataset in Dataset::ALL {
        let candidate = path.join(dataset.file_name());
        if candidate.is_file() {
            files.set_path(dataset, candidate);
        }
    }

    if !files.has_required_files() {
        let missing: Vec<String> = files
            .missing_files()
            .into_iter()
            .map(Dataset::file_name)
            .collect();
        return Err(LoadError::RequiredFileMissing {
            files: missing.join(", "),
            directory: path.display().to_string(),
        });
    }

    Ok(files)
}
