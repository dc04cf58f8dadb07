mod basic;
mod contacts;

pub use basic::BasicConfig;
pub use contacts::ContactsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::ContactsError;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core configuration (see `basic` table in contactbook.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Contact-specific settings (see `contacts` table in contactbook.toml).
    #[serde(default)]
    pub contacts: ContactsConfig,
}

pub const DEFAULT_CONFIG_FILE: &str = "contactbook.toml";
pub const ENV_PREFIX: &str = "CONTACTBOOK_";

impl Config {
    /// Defaults, then `contactbook.toml` if present, then `CONTACTBOOK_*`
    /// environment variables (`__` separates nested keys).
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(DEFAULT_CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Self, ContactsError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ContactsError> {
        let cfg: Self = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ContactsError> {
        if self.basic.database_url.trim().is_empty() {
            return Err(ContactsError::ConfigError(
                "basic.database_url must be set and non-empty".to_string(),
            ));
        }
        if self.contacts.birthday_window_days == 0 {
            return Err(ContactsError::ConfigError(
                "contacts.birthday_window_days must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
