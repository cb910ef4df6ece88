use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::{DEFAULT_TABLE_CAPACITY, ENV_PREFIX};

/// Tuning knobs for a run.
///
/// Resolution order: built-in defaults, optional config file,
/// `STATION_STATS_*` environment variables, then CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct Settings {
    #[validate(range(min = 1, max = 1024))]
    pub max_workers: usize,

    #[validate(range(min = 1, max = 16_777_216))]
    pub table_capacity: usize,
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_with_env_prefix(config_file, ENV_PREFIX)
    }

    fn load_with_env_prefix(config_file: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("max_workers", num_cpus::get() as i64)?
            .set_default("table_capacity", DEFAULT_TABLE_CAPACITY as i64)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn with_overrides(
        mut self,
        max_workers: Option<usize>,
        table_capacity: Option<usize>,
    ) -> Result<Self> {
        if let Some(workers) = max_workers {
            self.max_workers = workers;
        }
        if let Some(capacity) = table_capacity {
            self.table_capacity = capacity;
        }
        self.validate()?;
        Ok(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_workers: num_cpus::get(),
            table_capacity: DEFAULT_TABLE_CAPACITY,
        }
    }
}
