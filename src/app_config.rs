use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    dumps: Dumps,
}

impl AppConfig {
    /// Reads `config` and `config_local` when present, then `VMANAGE_RECORDS__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("dumps.directory", "dumps")?
            .set_default("dumps.extension", "json")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("VMANAGE_RECORDS").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn dumps(&self) -> &Dumps {
        &self.dumps
    }
}

#[derive(Debug, Deserialize)]
pub struct Dumps {
    directory: String,
    extension: String,
}

impl Dumps {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}
