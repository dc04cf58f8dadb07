mod contacts;

pub use contacts::{ApiErrorBody, ApiErrorObject, ContactsError};
