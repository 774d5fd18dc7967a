//! Sample data configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

fn default_fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("sample-data")
        .join("records.json")
}

/// Configuration values controlling sample data seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SAMPLE_DATA")]
pub struct SampleDataSettings {
    /// Enable sample data seeding on startup.
    #[ortho_config(default = true, skip_cli)]
    pub enabled: bool,
    /// Optional fixture path override.
    pub fixture_path: Option<PathBuf>,
}

impl SampleDataSettings {
    /// Return the configured fixture path, falling back to the bundled one.
    #[must_use]
    pub fn fixture_path(&self) -> PathBuf {
        self.fixture_path
            .clone()
            .unwrap_or_else(default_fixture_path)
    }
}
