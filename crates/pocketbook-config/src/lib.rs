//! User preferences for the pocketbook shells: currency symbol, colour
//! output, and where the record files live.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
