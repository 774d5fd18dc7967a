//! Startup seeding orchestration.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{RepositoryError, SeedBatch, SeedRepository, SeedSummary};
use crate::sample_data::config::SampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Fixture file could not be read.
    #[error("failed to read fixture at {path}: {source}")]
    FixtureRead {
        /// Path to the fixture file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Fixture parsing failed.
    #[error("fixture parse error: {0}")]
    FixtureParse(#[from] serde_json::Error),
    /// Persisting the batch failed.
    #[error("sample data write error: {0}")]
    Apply(#[from] RepositoryError),
}

/// Apply the sample data fixture on startup when enabled.
///
/// The batch is written through a single unit of work: either every record
/// lands or none do. Seeding is not idempotent; restarting against a
/// populated persistent store surfaces a duplicate-id failure rather than
/// silently re-applying.
pub async fn seed_sample_data_on_startup(
    settings: &SampleDataSettings,
    repository: &dyn SeedRepository,
) -> Result<Option<SeedSummary>, StartupSeedingError> {
    if !settings.enabled {
        info!(reason = "disabled", "sample data seeding skipped");
        return Ok(None);
    }

    let fixture_path = settings.fixture_path();
    let batch = load_fixture(&fixture_path)?;
    let summary = repository.apply(batch).await?;

    info!(
        users = summary.users,
        orders = summary.orders,
        offers = summary.offers,
        "sample data seeding applied"
    );
    Ok(Some(summary))
}

fn load_fixture(path: &Path) -> Result<SeedBatch, StartupSeedingError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| StartupSeedingError::FixtureRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "fixture path must be a file",
            ),
        })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|source| {
        StartupSeedingError::FixtureRead {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let payload =
        dir.read(Path::new(file_name))
            .map_err(|source| StartupSeedingError::FixtureRead {
                path: path.to_path_buf(),
                source,
            })?;
    Ok(serde_json::from_slice(&payload)?)
}
