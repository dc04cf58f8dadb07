pub mod address;
pub mod contact;
pub mod query;

pub use address::{AddressCreate, AddressUpdate};
pub use contact::{ContactCreate, ContactUpdate};
pub use query::ContactSearch;
