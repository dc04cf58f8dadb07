//! Storage access for contacts and their owned addresses.

mod contacts;

use async_trait::async_trait;
use chrono::NaiveDate;
use contactbook_schema::{ContactCreate, ContactSearch, ContactUpdate};

use crate::db::Contact;
use crate::error::ContactsError;

pub use contacts::ContactRepository;

/// Repository contract consumed by [`crate::service::ContactService`].
///
/// Lookups that find no row return `Ok(None)`; turning that into
/// [`ContactsError::NotFound`] is the service's job.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn get_contacts(&self, search: &ContactSearch) -> Result<Vec<Contact>, ContactsError>;

    async fn get_contact_by_id(&self, contact_id: i64) -> Result<Option<Contact>, ContactsError>;

    async fn create_contact(&self, body: &ContactCreate) -> Result<Option<Contact>, ContactsError>;

    async fn update_contact(
        &self,
        contact_id: i64,
        body: &ContactUpdate,
    ) -> Result<Option<Contact>, ContactsError>;

    async fn remove_contact(&self, contact_id: i64) -> Result<Option<Contact>, ContactsError>;

    async fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        days: u32,
    ) -> Result<Vec<Contact>, ContactsError>;
}
