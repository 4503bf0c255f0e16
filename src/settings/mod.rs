//! Application settings
//!
//! # Module Structure
//!
//! - `loader`: layered loading from defaults, files and environment
//! - `types`: configuration types
//! - `validation`: sanity checks run before the agent starts

mod loader;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use loader::load_config;
pub use types::AppConfig;
pub use validation::validate_config;
