//! pocketbook-core
//!
//! Collection operations, summaries, and the storage contract for records.
//! Depends on pocketbook-domain. No CLI, no terminal I/O, no direct file access.

pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod memory_storage;
pub mod record_service;
pub mod storage;
pub mod summary_service;
pub mod task_service;
pub mod time;

pub use error::CoreError;
pub use record_service::*;
#[cfg(any(test, feature = "test-support"))]
pub use memory_storage::MemoryStorage;
pub use storage::RecordStorage;
pub use summary_service::*;
pub use task_service::*;
pub use time::{Clock, FixedClock};
