//! pocketbook-domain
//!
//! Pure record models (Expense, Task) and their field validation.
//! No I/O, no CLI, no storage. Only data types and shared traits.

pub mod common;
pub mod expense;
pub mod task;

pub use common::*;
pub use expense::*;
pub use task::*;
