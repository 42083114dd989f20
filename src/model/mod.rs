//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Dataset` - The immutable routes, airlines and airports
//! - `FilterState` / `RouteFilterView` - Filter selections and everything derived from them
//! - `ModalStack` - Modal overlay management

pub mod dataset;
pub mod filter;
pub mod modal;
pub mod route;

// Re-export commonly used types
pub use dataset::Dataset;
pub use filter::{FilterState, OptionRow, RouteFilterView, PAGE_SIZE};
pub use route::{AirlineId, Route};
#[cfg(test)]
pub use route::{Airline, Airport};
