use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Process configuration, sourced from `STOCKROOM_*` environment
/// variables (after `dotenvy` has loaded `.env`) over built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite connection string, e.g. `sqlite:stockroom.db`.
    pub database_url: String,
    /// TCP port the HTTP server binds on.
    pub port: u16,
    /// Browser origin allowed for cross-origin requests. Unset means
    /// permissive CORS (development).
    pub allowed_origin: Option<String>,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:stockroom.db".to_string(),
            port: 3000,
            allowed_origin: None,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("STOCKROOM_"))
            .extract()
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| match Config::from_env() {
    Ok(cfg) => cfg,
    Err(e) => panic!("invalid configuration: {e}"),
});
