//! Core domain entities
//!
//! Pure data structures: the customer record, the form inputs and the
//! error types. No I/O.

mod customer;
mod form;
pub mod result;

pub use customer::{Customer, NewCustomer};
pub use form::{Field, FormFields, FormMode};
