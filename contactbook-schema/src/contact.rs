use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::address::{AddressCreate, AddressUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCreate {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub birthday: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressCreate>,
}

/// Partial update of a contact. Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUpdate {
    /// `None` => do not change; `Some(v)` => update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `None` => do not change; `Some(v)` => update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// `None` => do not change; `Some(v)` => update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `None` => do not change; `Some(v)` => update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    /// `None` leaves the stored address alone. `Some` patches the existing
    /// address in place, or attaches a new one when the contact has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressUpdate>,
}
