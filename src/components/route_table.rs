//! Route table component
//!
//! Renders the current page of routes with headers and aligned columns.
//! Cells are measured and truncated by display width, since airport names
//! are not all ASCII.

use crate::action::Action;
use crate::component::Component;
use crate::model::{Dataset, Route};
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column headers of the routes table
pub const HEADERS: [&str; 3] = ["Airline", "Source Airport", "Destination Airport"];

/// Widest a column may grow, in terminal cells
const MAX_COLUMN_WIDTH: usize = 40;

/// Table of the routes on the current page
#[derive(Default)]
pub struct RouteTableComponent {
    /// One row per route: airline, source and destination names
    rows: Vec<[String; 3]>,
    /// Vertical scroll, for terminals shorter than a page
    scroll: usize,
    /// Inner height of the table at the last draw
    visible_height: usize,
}

impl RouteTableComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed routes, resolving ids and codes to names
    pub fn set_routes(&mut self, dataset: &Dataset, routes: &[&Route]) {
        self.rows = routes
            .iter()
            .map(|route| {
                [
                    dataset.airline_name(route.airline_id),
                    dataset.airport_name(&route.source_airport_code),
                    dataset.airport_name(&route.destination_airport_code),
                ]
            })
            .collect();
        self.clamp_scroll();
    }

    /// Back to the top, used when the page changes
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    /// Lines the table renders: header and separator plus rows, or the empty notice
    fn content_len(&self) -> usize {
        if self.rows.is_empty() {
            3
        } else {
            self.rows.len() + 2
        }
    }

    /// Largest scroll that still fills the viewport; 0 when everything fits
    fn max_scroll(&self) -> usize {
        self.content_len().saturating_sub(self.visible_height)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[[String; 3]] {
        &self.rows
    }

    /// Build table lines from headers and rows
    pub fn build_table_lines(rows: &[[String; 3]]) -> Vec<Line<'static>> {
        if rows.is_empty() {
            return vec![
                header_line(&column_widths(rows)),
                Line::from(""),
                Line::from(Span::styled(
                    "No routes match the selected filters",
                    Style::default().fg(Color::Yellow),
                )),
            ];
        }

        let widths = column_widths(rows);
        let mut lines = vec![header_line(&widths)];

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )));

        for row in rows {
            let spans: Vec<Span> = row
                .iter()
                .zip(widths.iter())
                .enumerate()
                .flat_map(|(i, (cell, width))| {
                    let style = if i == 0 {
                        Style::default().fg(Color::Cyan)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    vec![Span::styled(fit(cell, *width), style), Span::raw(" │ ")]
                })
                .collect();
            lines.push(Line::from(spans));
        }

        lines
    }
}

fn column_widths(rows: &[[String; 3]]) -> [usize; 3] {
    let mut widths = HEADERS.map(|h| h.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }
    widths.map(|w| w.min(MAX_COLUMN_WIDTH))
}

fn header_line(widths: &[usize; 3]) -> Line<'static> {
    let spans: Vec<Span> = HEADERS
        .iter()
        .zip(widths.iter())
        .flat_map(|(header, width)| {
            vec![
                Span::styled(
                    fit(header, *width),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Pad or truncate `cell` to exactly `width` display cells
pub fn fit(cell: &str, width: usize) -> String {
    let cell_width = cell.width();
    if cell_width <= width {
        return format!("{}{}", cell, " ".repeat(width - cell_width));
    }

    let budget = width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in cell.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    let dots = "...".chars().take(width - used).collect::<String>();
    used += dots.len();
    out.push_str(&dots);
    out.push_str(&" ".repeat(width - used));
    out
}

impl Component for RouteTableComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => {
                if self.scroll < self.max_scroll() {
                    self.scroll += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = Self::build_table_lines(&self.rows);
        let visible_height = area.height.saturating_sub(2) as usize;
        let total = content.len();

        self.visible_height = visible_height;
        self.clamp_scroll();

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Routes ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.scroll as u16, 0));

        frame.render_widget(paragraph, area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}
