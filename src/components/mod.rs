//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod filter_dialog;
pub mod help_dialog;
pub mod layout;
pub mod route_table;
pub mod routes;

pub use filter_dialog::FilterDialog;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_routes_layout, centered_popup};
pub use route_table::RouteTableComponent;
pub use routes::{draw_routes_screen, RoutesComponent, RoutesRenderContext};
