use serde::{Deserialize, Serialize};

/// Address payload accepted when a contact is created, or when an update
/// attaches an address to a contact that has none yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressUpdate {
    /// `None` => do not change; `Some(v)` => update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// `None` => do not change; `Some(v)` => update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// `None` => do not change; `Some(v)` => update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// `None` => do not change; `Some(v)` => update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl From<AddressUpdate> for AddressCreate {
    fn from(update: AddressUpdate) -> Self {
        Self {
            street: update.street,
            city: update.city,
            postal_code: update.postal_code,
            country: update.country,
        }
    }
}
