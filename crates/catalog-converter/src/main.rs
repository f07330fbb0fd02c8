//! Catalog converter binary.
//!
//! Reads the five catalog CSV files, writes `data.json` and echoes the same
//! document to standard output. Takes no arguments; the `config` module lists the
//! environment variables it honours. Logs go to standard error.

mod config;

use catalog_loader::{discover_data_files, write_catalog, CatalogLoader, LoadResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ConverterConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!("Catalog conversion failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

fn run() -> LoadResult<()> {
    let config = ConverterConfig::from_env()?;

    tracing::info!("Loading catalog data from: {}", config.loader.data_dir.display());
    let files = discover_data_files(&config.loader.data_dir)?;

    let mut loader = CatalogLoader::new(config.loader);
    let catalog = loader.load_all(&files)?;

    let path = write_catalog(&catalog, &config.output, std::io::stdout().lock())?;
    tracing::info!("Catalog written to {}", path.display());

    Ok(())
}
