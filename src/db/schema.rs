//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `addresses` table (postal address, owned by exactly one contact)
/// - `contacts` table (one person per row, optional `address_id`)
///
/// `contacts.address_id` is deferred so an address can be written before its
/// contact, and deleted before it, inside a single transaction.
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Addresses (exclusively owned by one contact)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS addresses (
    id INTEGER PRIMARY KEY NOT NULL,
    street TEXT NULL,
    city TEXT NULL,
    postal_code TEXT NULL,
    country TEXT NULL
);

-- ---------------------------------------------------------------------------
-- Contacts
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    surname TEXT NOT NULL,
    email TEXT NOT NULL,
    birthday TEXT NOT NULL, -- YYYY-MM-DD
    address_id INTEGER NULL UNIQUE
        REFERENCES addresses(id) DEFERRABLE INITIALLY DEFERRED
);

CREATE INDEX IF NOT EXISTS idx_contacts_email ON contacts(email);
"#;
