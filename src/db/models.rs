use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub birthday: NaiveDate,
    pub address_id: Option<i64>,
    /// Loaded eagerly by id lookups and searches; left `None` by the
    /// birthday listing even when `address_id` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Flat row produced by `contacts LEFT JOIN addresses`.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct ContactRow {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub birthday: NaiveDate,
    pub address_id: Option<i64>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        let address = row.address_id.map(|id| Address {
            id,
            street: row.street,
            city: row.city,
            postal_code: row.postal_code,
            country: row.country,
        });

        Self {
            id: row.id,
            name: row.name,
            surname: row.surname,
            email: row.email,
            birthday: row.birthday,
            address_id: row.address_id,
            address,
        }
    }
}

/// Contact columns only, without the joined address.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct BareContactRow {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub birthday: NaiveDate,
    pub address_id: Option<i64>,
}

impl From<BareContactRow> for Contact {
    fn from(row: BareContactRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            surname: row.surname,
            email: row.email,
            birthday: row.birthday,
            address_id: row.address_id,
            address: None,
        }
    }
}
