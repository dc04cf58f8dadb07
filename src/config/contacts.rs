use serde::{Deserialize, Serialize};

use crate::birthdays::DEFAULT_WINDOW_DAYS;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactsConfig {
    /// Days ahead covered by the birthday digest.
    /// TOML: `contacts.birthday_window_days`. Default: `7`. Must be > 0.
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: u32,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            birthday_window_days: default_birthday_window_days(),
        }
    }
}

fn default_birthday_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}
