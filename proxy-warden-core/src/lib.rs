//! Proxy Warden Core Library
//!
//! Client-side logic of the Proxy Warden control panel, including:
//! - Rule list controllers (CIDR rules, domain rules, hidden domains)
//! - Table sorting and row rendering
//! - Decision-log polling and filtering
//!
//! This library is UI-independent: remote resources and user confirmation are
//! abstracted through traits, and every network operation is exposed as a
//! `'static` future so any front end can drive it from its own event loop.

pub mod error;
pub mod services;
pub mod table;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ListController, LogPoller};
pub use traits::{ConfirmPrompt, Confirmer, ListResource, LogSource};
