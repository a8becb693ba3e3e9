use serde::Deserialize;

use crate::error::Result;
use crate::storage::{new_storage, MapStore, StorageType};

#[derive(Debug, PartialEq, Deserialize)]
pub struct Config {
    pub log_level: String,
    pub storage_type: StorageType,
}

impl Config {
    /// Loads the config from defaults, then the optional file, then
    /// `MAPSTORE_*` environment variables.
    pub fn new(file: &str) -> Result<Config> {
        let mut cfg = config::Config::builder()
            .set_default("log_level", "info")?
            .set_default("storage_type", "memory")?;
        if !file.is_empty() {
            cfg = cfg.add_source(config::File::with_name(file))
        }
        cfg = cfg.add_source(config::Environment::with_prefix("MAPSTORE"));
        Ok(cfg.build()?.try_deserialize()?)
    }

    pub fn log_level_filter(&self) -> Result<log::LevelFilter> {
        Ok(self.log_level.parse::<log::LevelFilter>()?)
    }

    pub fn open_storage(&self) -> Result<Box<dyn MapStore>> {
        new_storage(self.storage_type)
    }
}
