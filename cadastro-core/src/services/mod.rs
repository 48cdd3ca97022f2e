//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

mod register;

pub use register::{render, RegisterForm, SubmitOutcome, TableRow, TableView, TABLE_HEADERS};
