//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It owns the dataset and the current `FilterState`; every filter or page
//! action replaces the state with the value computed by a pure transition.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_routes_screen, FilterDialog, HelpDialog, RouteTableComponent, RoutesComponent,
    RoutesRenderContext,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::{AirlineId, Dataset, FilterState, RouteFilterView};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Main application state - coordinates between components
pub struct App {
    /// The immutable route dataset
    pub dataset: Dataset,

    /// Where the dataset came from ("bundled" or a path)
    pub source: String,

    /// Current filter selections and page offset
    pub filter: FilterState,

    /// Rows per page
    pub page_size: usize,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub routes: RoutesComponent,
    pub table: RouteTableComponent,
    pub airline_dialog: FilterDialog<AirlineId>,
    pub airport_dialog: FilterDialog<String>,
    pub help_dialog: HelpDialog,
}

impl App {
    /// Create a new App over a loaded dataset
    pub fn new(dataset: Dataset, source: impl Into<String>, page_size: usize) -> App {
        App {
            dataset,
            source: source.into(),
            filter: FilterState::new(),
            page_size: page_size.max(1),
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            routes: RoutesComponent,
            table: RouteTableComponent::new(),
            airline_dialog: FilterDialog::new(
                "Filter by Airline",
                "All Airlines",
                Action::SetAirlineFilter,
            ),
            airport_dialog: FilterDialog::new(
                "Filter by Airport",
                "All Airports",
                Action::SetAirportFilter,
            ),
            help_dialog: HelpDialog,
        }
    }

    /// The dataset seen through the current filter state
    pub fn view(&self) -> RouteFilterView<'_> {
        RouteFilterView::new(&self.dataset, &self.filter, self.page_size)
    }

    /// Replace the filter state, returning whether anything changed
    fn apply_filter(&mut self, next: FilterState) -> bool {
        if next == self.filter {
            return false;
        }
        self.table.reset_scroll();
        log::debug!(
            "filter: airline={:?} airport={:?} offset={}",
            next.airline,
            next.airport,
            next.offset
        );
        self.filter = next;
        true
    }

    /// Status line after a filter change
    fn filter_status(&self) -> Option<String> {
        let count = self.view().filtered_routes().len();
        if count == 0 {
            Some("No routes match the selected filters".to_string())
        } else if self.filter.is_filtered() {
            Some(format!("{} matching routes", count))
        } else {
            None
        }
    }

    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::AirlineFilter => self.airline_dialog.handle_key_event(key),
            Modal::AirportFilter => self.airport_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: Modal) -> Result<()> {
        match modal {
            Modal::AirlineFilter => self.airline_dialog.draw(frame, area),
            Modal::AirportFilter => self.airport_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::Quit));
        }

        if let Some(modal) = self.modals.top() {
            self.handle_modal_key_event(modal, key)
        } else {
            self.routes.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Pagination
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => {
                let next = self.view().next_page();
                self.apply_filter(next);
            }
            Action::PrevPage => {
                let prev = self.view().prev_page();
                self.apply_filter(prev);
            }
            Action::FirstPage => {
                let first = self.view().first_page();
                self.apply_filter(first);
            }
            Action::ScrollUp | Action::ScrollDown => {
                self.table.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Filters
            // ─────────────────────────────────────────────────────────────────
            Action::OpenAirlineFilter => {
                let options = self.view().selectable_airlines();
                self.airline_dialog.set_options(options, self.filter.airline);
                self.modals.push(Modal::AirlineFilter);
            }
            Action::OpenAirportFilter => {
                let options = self.view().selectable_airports();
                self.airport_dialog
                    .set_options(options, self.filter.airport.clone());
                self.modals.push(Modal::AirportFilter);
            }
            Action::SetAirlineFilter(airline) => {
                let next = self.filter.with_airline(airline);
                self.apply_filter(next);
                self.status_message = self.filter_status();
                if self.modals.top() == Some(Modal::AirlineFilter) {
                    self.modals.pop();
                }
            }
            Action::SetAirportFilter(airport) => {
                let next = self.filter.with_airport(airport);
                self.apply_filter(next);
                self.status_message = self.filter_status();
                if self.modals.top() == Some(Modal::AirportFilter) {
                    self.modals.pop();
                }
            }
            Action::ResetFilters => {
                let next = self.filter.reset();
                if self.apply_filter(next) {
                    log::info!("filters cleared");
                }
                self.status_message = None;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenHelp => {
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => match self.modals.top() {
                Some(Modal::AirlineFilter) => {
                    self.airline_dialog.update(action)?;
                }
                Some(Modal::AirportFilter) => {
                    self.airport_dialog.update(action)?;
                }
                _ => {}
            },
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let view = RouteFilterView::new(&self.dataset, &self.filter, self.page_size);
        let ctx = RoutesRenderContext {
            dataset: &self.dataset,
            view: &view,
            source: &self.source,
            status_message: self.status_message.as_deref(),
        };
        draw_routes_screen(frame, area, &mut self.table, &ctx)?;

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top() {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}
