use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// List/search parameters for `GET /contacts`.
///
/// Empty filter strings deserialize to `None`, so `?name=` behaves like an
/// omitted filter instead of matching against `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSearch {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, deserialize_with = "non_empty")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub surname: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub email: Option<String>,
}

impl Default for ContactSearch {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
            name: None,
            surname: None,
            email: None,
        }
    }
}

impl ContactSearch {
    pub fn page(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit,
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty_owned(name.into());
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = non_empty_owned(surname.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = non_empty_owned(email.into());
        self
    }
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

fn non_empty_owned(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<String>::deserialize(deserializer)?;
    Ok(v.and_then(non_empty_owned))
}
