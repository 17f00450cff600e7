//! Business logic layer

pub mod append;

pub use append::{append_transaction, NewTransaction};
