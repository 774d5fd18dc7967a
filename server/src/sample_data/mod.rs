//! One-time sample data seeding applied at startup.

pub mod config;
pub mod startup;

pub use config::SampleDataSettings;
pub use startup::{StartupSeedingError, seed_sample_data_on_startup};
