//! Routes screen - the main application view
//!
//! Shows the filter line, the route table, the pager and the help bar.
//! Everything on screen is derived from the dataset and the current
//! `FilterState` through a `RouteFilterView`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_routes_layout, RouteTableComponent};
use crate::model::{Dataset, RouteFilterView};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Key handling for the routes screen
///
/// Holds no state of its own; filter state lives in the App and is passed
/// in for rendering.
#[derive(Default)]
pub struct RoutesComponent;

impl Component for RoutesComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Pagination
            KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => {
                Some(Action::NextPage)
            }
            KeyCode::Char('b') | KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => {
                Some(Action::PrevPage)
            }
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstPage),

            // Scrolling within a page
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),

            // Filters
            KeyCode::Char('a') => Some(Action::OpenAirlineFilter),
            KeyCode::Char('p') => Some(Action::OpenAirportFilter),
            KeyCode::Char('r') => Some(Action::ResetFilters),

            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::Quit),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_routes_screen which takes full context
        Ok(())
    }
}

/// Context needed for rendering the routes screen
pub struct RoutesRenderContext<'a> {
    pub dataset: &'a Dataset,
    pub view: &'a RouteFilterView<'a>,
    /// Where the dataset came from, shown in the title line
    pub source: &'a str,
    pub status_message: Option<&'a str>,
}

/// Draw the routes screen
pub fn draw_routes_screen(
    frame: &mut Frame,
    area: Rect,
    table: &mut RouteTableComponent,
    ctx: &RoutesRenderContext,
) -> Result<()> {
    let layout = calculate_routes_layout(area, ctx.status_message.is_some());

    render_title(frame, layout.title, ctx);
    render_filter_line(frame, layout.filters, ctx);

    table.set_routes(ctx.dataset, &ctx.view.page());
    table.draw(frame, layout.table)?;

    render_pager(frame, layout.pager, ctx.view);

    if let (Some(status_area), Some(status)) = (layout.status, ctx.status_message) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {} ", status),
                Style::default().fg(Color::Yellow),
            ))),
            status_area,
        );
    }
    render_help_bar(frame, layout.help);

    Ok(())
}

fn render_title(frame: &mut Frame, area: Rect, ctx: &RoutesRenderContext) {
    let line = Line::from(vec![
        Span::styled(
            " Airline Routes ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} routes · {} airlines · {} airports · {} per page ({})",
                ctx.dataset.routes.len(),
                ctx.dataset.airlines.len(),
                ctx.dataset.airports.len(),
                ctx.view.page_size(),
                ctx.source
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// "Show routes on [airline] flying in or out of [airport]"
pub fn filter_line(ctx: &RoutesRenderContext) -> Line<'static> {
    let state = ctx.view.state();
    let airline = state
        .airline
        .map(|id| ctx.dataset.airline_name(id))
        .unwrap_or_else(|| "All Airlines".to_string());
    let airport = state
        .airport
        .as_deref()
        .map(|code| ctx.dataset.airport_name(code))
        .unwrap_or_else(|| "All Airports".to_string());

    let selection = |text: String, active: bool| {
        let style = if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(format!("[{}]", text), style)
    };

    Line::from(vec![
        Span::raw("Show routes on "),
        selection(airline, state.airline.is_some()),
        Span::raw(" flying in or out of "),
        selection(airport, state.airport.is_some()),
    ])
}

fn render_filter_line(frame: &mut Frame, area: Rect, ctx: &RoutesRenderContext) {
    let paragraph = Paragraph::new(filter_line(ctx)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

/// "Showing a-b of n routes." plus the page buttons
pub fn pager_line(view: &RouteFilterView) -> Line<'static> {
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };
        Span::styled(label, style)
    };

    let summary = match view.page_range() {
        Some(range) => format!(
            "Showing {}-{} of {} routes.",
            range.first, range.last, range.total
        ),
        None => "Showing 0 of 0 routes.".to_string(),
    };

    Line::from(vec![
        button("◀ Previous Page", view.can_go_prev()),
        Span::raw("   "),
        Span::styled(summary, Style::default().fg(Color::Yellow)),
        Span::raw("   "),
        button("Next Page ▶", view.can_go_next()),
    ])
}

fn render_pager(frame: &mut Frame, area: Rect, view: &RouteFilterView) {
    let paragraph = Paragraph::new(pager_line(view))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let help_spans = vec![
        key(" a ", Color::Cyan),
        Span::raw("Airline "),
        key(" p ", Color::Cyan),
        Span::raw("Airport "),
        key(" r ", Color::Green),
        Span::raw("Show all "),
        key(" b/n ", Color::Magenta),
        Span::raw("Prev/Next page "),
        key(" ? ", Color::White),
        Span::raw("Help "),
        key(" q ", Color::Yellow),
        Span::raw("Quit"),
    ];

    frame.render_widget(Paragraph::new(Line::from(help_spans)), area);
}
