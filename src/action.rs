//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::AirlineId;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Terminal was resized
    Resize(u16, u16),
    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the next page of routes
    NextPage,
    /// Show the previous page of routes
    PrevPage,
    /// Jump back to the first page
    FirstPage,
    /// Scroll the table up one line (when the page does not fit)
    ScrollUp,
    /// Scroll the table down one line
    ScrollDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the airline filter dropdown
    OpenAirlineFilter,
    /// Open the airport filter dropdown
    OpenAirportFilter,
    /// Set or clear the airline filter
    SetAirlineFilter(Option<AirlineId>),
    /// Set or clear the airport filter
    SetAirportFilter(Option<String>),
    /// Clear both filters ("Show all routes")
    ResetFilters,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Navigate up in modal (e.g., previous option)
    ModalUp,
    /// Navigate down in modal (e.g., next option)
    ModalDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::FirstPage => write!(f, "FirstPage"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::OpenAirlineFilter => write!(f, "OpenAirlineFilter"),
            Action::OpenAirportFilter => write!(f, "OpenAirportFilter"),
            Action::SetAirlineFilter(Some(id)) => write!(f, "SetAirlineFilter({})", id),
            Action::SetAirlineFilter(None) => write!(f, "SetAirlineFilter(all)"),
            Action::SetAirportFilter(Some(code)) => write!(f, "SetAirportFilter({})", code),
            Action::SetAirportFilter(None) => write!(f, "SetAirportFilter(all)"),
            Action::ResetFilters => write!(f, "ResetFilters"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_filter_values() {
        assert_eq!(Action::SetAirlineFilter(Some(24)).to_string(), "SetAirlineFilter(24)");
        assert_eq!(Action::SetAirportFilter(None).to_string(), "SetAirportFilter(all)");
        assert_eq!(Action::Resize(80, 24).to_string(), "Resize(80, 24)");
    }
}
