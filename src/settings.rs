//! Runtime settings, read from `STUBGEN_*` environment variables.

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_ERROR_REPORT: &str = "JavaGeneratorErrors.txt";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Where command-line problems are written (`STUBGEN_ERROR_REPORT`)
    pub error_report: PathBuf,
    /// Print each parsed line after generation (`STUBGEN_SUMMARY`)
    pub summary: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix("STUBGEN"))
    }

    fn from_env(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("error_report", DEFAULT_ERROR_REPORT)?
            .set_default("summary", true)?
            .add_source(env.try_parsing(true))
            .build()
            .context("failed to load settings")?
            .try_deserialize()
            .context("invalid settings")
    }
}
