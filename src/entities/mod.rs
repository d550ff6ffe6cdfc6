//! Record type definitions for the crane maintenance store
//!
//! The store holds four record kinds:
//! - [`Equipment`] - One crane, keyed by a code derived from its sheet name
//! - [`HistoryEntry`] - One logged maintenance/repair event on an equipment
//! - [`Schedule`] - Planned maintenance placeholder entries
//! - [`Notification`] - Reserved for the consuming application, always empty

pub mod equipment;
pub mod history;
pub mod schedule;

pub use equipment::{CraneType, Equipment};
pub use history::{HistoryCategory, HistoryEntry, Technician};
pub use schedule::{Notification, Schedule};
