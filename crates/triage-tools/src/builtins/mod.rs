//! Built-in filesystem operations
//!
//! # Module Structure
//!
//! - `archive`: move processed emails out of the inbox
//! - `email`: read an email file
//! - `inbox`: scan the inbox directory
//! - `report`: append analyses to the JSON Lines report

pub mod archive;
pub mod email;
pub mod inbox;
pub mod report;

#[cfg(test)]
mod tests;

pub use archive::archive_email;
pub use email::read_email;
pub use inbox::scan_inbox;
pub use report::append_to_report;
