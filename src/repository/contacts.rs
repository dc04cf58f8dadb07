use async_trait::async_trait;
use chrono::NaiveDate;
use contactbook_schema::{AddressCreate, ContactCreate, ContactSearch, ContactUpdate};
use sqlx::{Executor, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use tracing::debug;

use super::ContactStore;
use crate::birthdays::BirthdayWindow;
use crate::db::Contact;
use crate::db::models::{BareContactRow, ContactRow};
use crate::error::ContactsError;

const SELECT_CONTACTS: &str = r#"
    SELECT
        c.id, c.name, c.surname, c.email, c.birthday, c.address_id,
        a.street, a.city, a.postal_code, a.country
    FROM contacts c
    LEFT JOIN addresses a ON a.id = c.address_id
"#;

const SELECT_CONTACT_BY_ID: &str = r#"
    SELECT
        c.id, c.name, c.surname, c.email, c.birthday, c.address_id,
        a.street, a.city, a.postal_code, a.country
    FROM contacts c
    LEFT JOIN addresses a ON a.id = c.address_id
    WHERE c.id = ?
"#;

/// SQLite-backed contact repository.
///
/// Every mutating call runs in its own transaction and commits before
/// reloading the affected contact.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for ContactRepository {
    async fn get_contacts(&self, search: &ContactSearch) -> Result<Vec<Contact>, ContactsError> {
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_CONTACTS);

        // SQLite's LIKE is case-insensitive for ASCII.
        let filters = [
            ("c.name", search.name.as_deref()),
            ("c.surname", search.surname.as_deref()),
            ("c.email", search.email.as_deref()),
        ];
        let mut separator = " WHERE ";
        for (column, needle) in filters {
            let Some(needle) = needle.filter(|n| !n.is_empty()) else {
                continue;
            };
            qb.push(separator)
                .push(column)
                .push(" LIKE ")
                .push_bind(contains_pattern(needle))
                .push(" ESCAPE '\\'");
            separator = " AND ";
        }

        qb.push(" LIMIT ")
            .push_bind(i64::from(search.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(search.skip));

        let rows = qb
            .build_query_as::<ContactRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn get_contact_by_id(&self, contact_id: i64) -> Result<Option<Contact>, ContactsError> {
        fetch_contact(&self.pool, contact_id).await
    }

    async fn create_contact(&self, body: &ContactCreate) -> Result<Option<Contact>, ContactsError> {
        let mut tx = self.pool.begin().await?;

        let address_id = match &body.address {
            Some(address) => Some(insert_address(&mut *tx, address).await?),
            None => None,
        };

        let contact_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO contacts (name, surname, email, birthday, address_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&body.name)
        .bind(&body.surname)
        .bind(&body.email)
        .bind(body.birthday)
        .bind(address_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!(contact_id, ?address_id, "contact created");

        self.get_contact_by_id(contact_id).await
    }

    async fn update_contact(
        &self,
        contact_id: i64,
        body: &ContactUpdate,
    ) -> Result<Option<Contact>, ContactsError> {
        let mut tx = self.pool.begin().await?;

        let Some(contact) = fetch_contact(&mut *tx, contact_id).await? else {
            return Ok(None);
        };

        let ContactUpdate {
            name,
            surname,
            email,
            birthday,
            address,
        } = body;

        sqlx::query(
            r#"
            UPDATE contacts
            SET
                name = COALESCE(?, name),
                surname = COALESCE(?, surname),
                email = COALESCE(?, email),
                birthday = COALESCE(?, birthday)
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(surname)
        .bind(email)
        .bind(birthday)
        .bind(contact_id)
        .execute(&mut *tx)
        .await?;

        let mut address_attached = None;
        if let Some(address) = address {
            match contact.address_id {
                Some(address_id) => {
                    sqlx::query(
                        r#"
                        UPDATE addresses
                        SET
                            street = COALESCE(?, street),
                            city = COALESCE(?, city),
                            postal_code = COALESCE(?, postal_code),
                            country = COALESCE(?, country)
                        WHERE id = ?
                        "#,
                    )
                    .bind(&address.street)
                    .bind(&address.city)
                    .bind(&address.postal_code)
                    .bind(&address.country)
                    .bind(address_id)
                    .execute(&mut *tx)
                    .await?;
                }
                None => {
                    let create = AddressCreate::from(address.clone());
                    let address_id = insert_address(&mut *tx, &create).await?;
                    sqlx::query("UPDATE contacts SET address_id = ? WHERE id = ?")
                        .bind(address_id)
                        .bind(contact_id)
                        .execute(&mut *tx)
                        .await?;
                    address_attached = Some(address_id);
                }
            }
        }

        tx.commit().await?;
        debug!(
            contact_id,
            name_set = name.is_some(),
            surname_set = surname.is_some(),
            email_set = email.is_some(),
            birthday_set = birthday.is_some(),
            address_set = address.is_some(),
            ?address_attached,
            "contact updated"
        );

        self.get_contact_by_id(contact_id).await
    }

    async fn remove_contact(&self, contact_id: i64) -> Result<Option<Contact>, ContactsError> {
        let mut tx = self.pool.begin().await?;

        let Some(contact) = fetch_contact(&mut *tx, contact_id).await? else {
            return Ok(None);
        };

        // The address goes first; the FK is deferred until commit.
        if let Some(address_id) = contact.address_id {
            sqlx::query("DELETE FROM addresses WHERE id = ?")
                .bind(address_id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(contact_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(contact_id, address_id = ?contact.address_id, "contact removed");

        Ok(Some(contact))
    }

    async fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        days: u32,
    ) -> Result<Vec<Contact>, ContactsError> {
        let window =
            BirthdayWindow::new(today, days).ok_or(ContactsError::DateOutOfRange { days })?;
        let (today_month, today_day, upcoming_month, upcoming_day) = window.bounds();

        let rows = sqlx::query_as::<_, BareContactRow>(
            r#"
            SELECT id, name, surname, email, birthday, address_id
            FROM contacts
            WHERE
                (CAST(strftime('%m', birthday) AS INTEGER) = ?
                    AND CAST(strftime('%d', birthday) AS INTEGER) >= ?)
                OR
                (CAST(strftime('%m', birthday) AS INTEGER) = ?
                    AND CAST(strftime('%d', birthday) AS INTEGER) <= ?)
            "#,
        )
        .bind(i64::from(today_month))
        .bind(i64::from(today_day))
        .bind(i64::from(upcoming_month))
        .bind(i64::from(upcoming_day))
        .fetch_all(&self.pool)
        .await?;

        debug!(
            %today,
            upcoming = %window.upcoming(),
            days,
            matched = rows.len(),
            "upcoming birthdays queried"
        );

        Ok(rows.into_iter().map(Contact::from).collect())
    }
}

async fn fetch_contact<'e, E>(executor: E, contact_id: i64) -> Result<Option<Contact>, ContactsError>
where
    E: 'e + Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, ContactRow>(SELECT_CONTACT_BY_ID)
        .bind(contact_id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(Contact::from))
}

async fn insert_address(
    conn: &mut SqliteConnection,
    address: &AddressCreate,
) -> Result<i64, ContactsError> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO addresses (street, city, postal_code, country)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&address.street)
    .bind(&address.city)
    .bind(&address.postal_code)
    .bind(&address.country)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

/// `%needle%` with LIKE wildcards in `needle` escaped.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
