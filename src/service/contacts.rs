use chrono::{Local, NaiveDate};
use contactbook_schema::{ContactCreate, ContactSearch, ContactUpdate};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::db::Contact;
use crate::error::ContactsError;
use crate::repository::{ContactRepository, ContactStore};
use crate::utils::logging::with_pretty_json_debug;

/// Orchestrates contact operations on top of a [`ContactStore`].
///
/// Absent results from the store become [`ContactsError::NotFound`]; a create
/// that yields no row becomes [`ContactsError::ServerError`]. Storage errors
/// pass through untouched.
#[derive(Debug, Clone)]
pub struct ContactService<S = ContactRepository> {
    store: S,
}

impl ContactService<ContactRepository> {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_store(ContactRepository::new(pool))
    }
}

impl<S: ContactStore> ContactService<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub async fn create_contact(&self, body: &ContactCreate) -> Result<Contact, ContactsError> {
        with_pretty_json_debug(body, |json| debug!(body = %json, "creating contact"));

        match self.store.create_contact(body).await? {
            Some(contact) => Ok(contact),
            None => {
                warn!(email = %body.email, "contact insert committed but reload found no row");
                Err(ContactsError::ServerError(
                    "Failed to create contact".to_string(),
                ))
            }
        }
    }

    pub async fn get_contacts(&self, search: &ContactSearch) -> Result<Vec<Contact>, ContactsError> {
        self.store.get_contacts(search).await
    }

    /// Contacts whose birthday falls in `[today, today + days]` by month/day,
    /// using the local calendar date as today.
    pub async fn get_upcoming_birthdays(&self, days: u32) -> Result<Vec<Contact>, ContactsError> {
        self.get_upcoming_birthdays_at(Local::now().date_naive(), days)
            .await
    }

    pub async fn get_upcoming_birthdays_at(
        &self,
        today: NaiveDate,
        days: u32,
    ) -> Result<Vec<Contact>, ContactsError> {
        self.store.get_upcoming_birthdays(today, days).await
    }

    pub async fn get_contact(&self, contact_id: i64) -> Result<Contact, ContactsError> {
        self.store
            .get_contact_by_id(contact_id)
            .await?
            .ok_or(ContactsError::NotFound)
    }

    pub async fn update_contact(
        &self,
        contact_id: i64,
        body: &ContactUpdate,
    ) -> Result<Contact, ContactsError> {
        self.store
            .update_contact(contact_id, body)
            .await?
            .ok_or(ContactsError::NotFound)
    }

    pub async fn remove_contact(&self, contact_id: i64) -> Result<Contact, ContactsError> {
        self.store
            .remove_contact(contact_id)
            .await?
            .ok_or(ContactsError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birthdays::BirthdayWindow;
    use crate::db::Address;
    use contactbook_schema::AddressUpdate;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory store; `lose_creates` simulates a create whose reload
    /// comes back empty.
    #[derive(Default)]
    struct MemoryStore {
        contacts: Mutex<Vec<Contact>>,
        lose_creates: bool,
    }

    impl MemoryStore {
        fn with(contacts: Vec<Contact>) -> Self {
            Self {
                contacts: Mutex::new(contacts),
                lose_creates: false,
            }
        }
    }

    #[async_trait]
    impl ContactStore for MemoryStore {
        async fn get_contacts(
            &self,
            search: &ContactSearch,
        ) -> Result<Vec<Contact>, ContactsError> {
            let contacts = self.contacts.lock().unwrap();
            Ok(contacts
                .iter()
                .skip(search.skip as usize)
                .take(search.limit as usize)
                .cloned()
                .collect())
        }

        async fn get_contact_by_id(
            &self,
            contact_id: i64,
        ) -> Result<Option<Contact>, ContactsError> {
            let contacts = self.contacts.lock().unwrap();
            Ok(contacts.iter().find(|c| c.id == contact_id).cloned())
        }

        async fn create_contact(
            &self,
            body: &ContactCreate,
        ) -> Result<Option<Contact>, ContactsError> {
            if self.lose_creates {
                return Ok(None);
            }
            let mut contacts = self.contacts.lock().unwrap();
            let contact = Contact {
                id: contacts.len() as i64 + 1,
                name: body.name.clone(),
                surname: body.surname.clone(),
                email: body.email.clone(),
                birthday: body.birthday,
                address_id: None,
                address: None,
            };
            contacts.push(contact.clone());
            Ok(Some(contact))
        }

        async fn update_contact(
            &self,
            contact_id: i64,
            body: &ContactUpdate,
        ) -> Result<Option<Contact>, ContactsError> {
            let mut contacts = self.contacts.lock().unwrap();
            let Some(contact) = contacts.iter_mut().find(|c| c.id == contact_id) else {
                return Ok(None);
            };
            if let Some(name) = &body.name {
                contact.name = name.clone();
            }
            if let Some(surname) = &body.surname {
                contact.surname = surname.clone();
            }
            if let Some(email) = &body.email {
                contact.email = email.clone();
            }
            if let Some(birthday) = body.birthday {
                contact.birthday = birthday;
            }
            if let Some(patch) = &body.address {
                let address = contact.address.get_or_insert_with(|| Address {
                    id: contact_id,
                    street: None,
                    city: None,
                    postal_code: None,
                    country: None,
                });
                if let Some(street) = &patch.street {
                    address.street = Some(street.clone());
                }
                if let Some(city) = &patch.city {
                    address.city = Some(city.clone());
                }
                if let Some(postal_code) = &patch.postal_code {
                    address.postal_code = Some(postal_code.clone());
                }
                if let Some(country) = &patch.country {
                    address.country = Some(country.clone());
                }
                contact.address_id = Some(address.id);
            }
            Ok(Some(contact.clone()))
        }

        async fn remove_contact(&self, contact_id: i64) -> Result<Option<Contact>, ContactsError> {
            let mut contacts = self.contacts.lock().unwrap();
            let pos = contacts.iter().position(|c| c.id == contact_id);
            Ok(pos.map(|i| contacts.remove(i)))
        }

        async fn get_upcoming_birthdays(
            &self,
            today: NaiveDate,
            days: u32,
        ) -> Result<Vec<Contact>, ContactsError> {
            let window =
                BirthdayWindow::new(today, days).ok_or(ContactsError::DateOutOfRange { days })?;
            let contacts = self.contacts.lock().unwrap();
            Ok(contacts
                .iter()
                .filter(|c| window.matches(c.birthday))
                .cloned()
                .collect())
        }
    }

    fn contact(id: i64, name: &str, birthday: NaiveDate) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            surname: "Smith".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            birthday,
            address_id: None,
            address: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_body() -> ContactCreate {
        ContactCreate {
            name: "Anna".to_string(),
            surname: "Smith".to_string(),
            email: "anna@example.com".to_string(),
            birthday: date(1990, 6, 15),
            address: None,
        }
    }

    #[tokio::test]
    async fn create_returns_stored_contact() {
        let service = ContactService::with_store(MemoryStore::default());
        let created = service.create_contact(&create_body()).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Anna");
    }

    #[tokio::test]
    async fn create_without_row_is_a_server_error() {
        let store = MemoryStore {
            lose_creates: true,
            ..Default::default()
        };
        let service = ContactService::with_store(store);

        let err = service.create_contact(&create_body()).await.unwrap_err();
        assert!(matches!(
            err,
            ContactsError::ServerError(ref msg) if msg == "Failed to create contact"
        ));
    }

    #[tokio::test]
    async fn missing_contact_is_not_found_for_every_lookup() {
        let store = MemoryStore::with(vec![contact(1, "Anna", date(1990, 6, 15))]);
        let service = ContactService::with_store(store);

        assert!(matches!(
            service.get_contact(42).await,
            Err(ContactsError::NotFound)
        ));
        assert!(matches!(
            service.update_contact(42, &ContactUpdate::default()).await,
            Err(ContactsError::NotFound)
        ));
        assert!(matches!(
            service.remove_contact(42).await,
            Err(ContactsError::NotFound)
        ));

        let remaining = service.get_contacts(&ContactSearch::default()).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Anna");
    }

    #[tokio::test]
    async fn found_contact_passes_through() {
        let store = MemoryStore::with(vec![contact(7, "Anna", date(1990, 6, 15))]);
        let service = ContactService::with_store(store);

        let found = service.get_contact(7).await.unwrap();
        assert_eq!(found.id, 7);

        let update = ContactUpdate {
            email: Some("anna@new.example".to_string()),
            ..Default::default()
        };
        let updated = service.update_contact(7, &update).await.unwrap();
        assert_eq!(updated.email, "anna@new.example");
        assert_eq!(updated.name, "Anna");
        assert_eq!(updated.surname, "Smith");
        assert_eq!(updated.birthday, date(1990, 6, 15));
        assert!(updated.address.is_none());

        let update = ContactUpdate {
            address: Some(AddressUpdate {
                city: Some("Lviv".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let updated = service.update_contact(7, &update).await.unwrap();
        assert_eq!(updated.email, "anna@new.example");
        let address = updated.address.unwrap();
        assert_eq!(address.city.as_deref(), Some("Lviv"));
        assert!(address.street.is_none());

        let removed = service.remove_contact(7).await.unwrap();
        assert_eq!(removed.id, 7);
        assert!(matches!(
            service.get_contact(7).await,
            Err(ContactsError::NotFound)
        ));
    }

    #[tokio::test]
    async fn upcoming_birthdays_are_passed_through() {
        let service = ContactService::with_store(MemoryStore::with(vec![
            contact(1, "Anna", date(1990, 6, 15)),
            contact(2, "Boris", date(1990, 7, 20)),
        ]));

        let upcoming = service
            .get_upcoming_birthdays_at(date(2024, 6, 10), 7)
            .await
            .unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Anna");
    }

    #[tokio::test]
    async fn oversized_window_is_reported() {
        let service = ContactService::with_store(MemoryStore::default());
        let err = service
            .get_upcoming_birthdays_at(NaiveDate::MAX, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, ContactsError::DateOutOfRange { days: 1 }));
    }
}
