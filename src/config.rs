use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: PathBuf,
}

impl Settings {
    /// Layers, lowest priority first: built-in defaults, an optional
    /// `trivia.toml`, `TRIVIA__*` environment variables and finally the
    /// plain `DB_PATH` variable.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Config::builder()
            .set_default("server.address", "0.0.0.0:8080")?
            .set_default("database.path", "trivia.db")?
            .add_source(File::with_name("trivia").required(false))
            .add_source(Environment::with_prefix("TRIVIA").separator("__"))
            .set_override_option("database.path", dotenv::var("DB_PATH").ok())?
            .build()?
            .try_deserialize()
    }
}
