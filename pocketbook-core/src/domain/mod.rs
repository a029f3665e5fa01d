//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod account;
mod category;
mod credential;
mod transaction;
pub mod result;

pub use account::Account;
pub use category::{Category, CategoryUpdate, Mapping, NewCategory};
pub use credential::{Credential, EnrollmentPayload};
pub use transaction::{Transaction, COMPARED_COLUMNS, LEDGER_HEADER};
