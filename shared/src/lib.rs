//! Shared core for the expense tracker frontend: API data types plus the
//! pure view logic (pagination, budget validation, currency formatting)
//! the presentation layer composes. Everything here is wasm-free and
//! testable on the host.

pub mod budget;
pub mod currency;
pub mod models;
pub mod paging;

pub use budget::{validate, BudgetContext, BudgetError, SubmissionKind};
pub use currency::{format_currency, format_number};
pub use models::*;
pub use paging::{shows_carryover, ListKind, Page, PAGE_SIZE};
