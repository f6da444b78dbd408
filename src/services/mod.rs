//! Services module
//!
//! Business logic services that coordinate between commands and the
//! repository.

pub mod history;
pub mod pin;
pub mod skips;

pub use history::{DoseFilter, HistoryService};
pub use pin::PinService;
pub use skips::SkipService;
