pub mod birthdays;
pub mod config;
pub mod db;
pub mod error;
pub mod repository;
pub mod service;
pub mod utils;

pub use birthdays::BirthdayWindow;
pub use contactbook_schema as schema;
pub use db::{Address, Contact};
pub use error::ContactsError;
pub use repository::{ContactRepository, ContactStore};
pub use service::ContactService;
