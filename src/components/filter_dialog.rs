//! Filter dropdown dialog
//!
//! One dialog type serves both the airline and the airport filter. The first
//! entry always clears the filter; options that would leave the table empty
//! are dimmed and skipped by the cursor.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::OptionRow;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Dropdown of filter options
pub struct FilterDialog<V> {
    /// Dialog title, e.g. "Filter by Airline"
    title: &'static str,
    /// Label of the entry that clears the filter
    all_label: &'static str,
    /// Options as derived from the current filter state
    pub options: Vec<OptionRow<V>>,
    /// Filter value in effect when the dialog was opened
    pub current: Option<V>,
    /// Highlighted entry; 0 is the "all" entry, n is options[n - 1]
    pub selected_index: usize,
    list_state: ListState,
    /// Builds the action emitted on Enter
    on_select: fn(Option<V>) -> Action,
}

impl<V: Clone + PartialEq> FilterDialog<V> {
    pub fn new(
        title: &'static str,
        all_label: &'static str,
        on_select: fn(Option<V>) -> Action,
    ) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            title,
            all_label,
            options: Vec::new(),
            current: None,
            selected_index: 0,
            list_state,
            on_select,
        }
    }

    /// Refresh the options and highlight the active value if it is still selectable
    pub fn set_options(&mut self, options: Vec<OptionRow<V>>, current: Option<V>) {
        self.options = options;
        self.current = current;

        self.selected_index = self
            .current
            .as_ref()
            .and_then(|value| self.options.iter().position(|o| &o.value == value))
            .map(|idx| idx + 1) // +1 because of the "all" entry
            .filter(|&idx| self.is_selectable(idx))
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    /// Value under the cursor (None means clear the filter)
    pub fn get_selected(&self) -> Option<V> {
        if self.selected_index == 0 {
            None
        } else {
            self.options
                .get(self.selected_index - 1)
                .map(|o| o.value.clone())
        }
    }

    fn is_selectable(&self, index: usize) -> bool {
        index == 0
            || self
                .options
                .get(index - 1)
                .is_some_and(|o| o.is_selectable)
    }

    fn select_next(&mut self) {
        let max_index = self.options.len();
        if let Some(next) =
            (self.selected_index + 1..=max_index).find(|&idx| self.is_selectable(idx))
        {
            self.selected_index = next;
            self.list_state.select(Some(next));
        }
    }

    fn select_prev(&mut self) {
        if let Some(prev) = (0..self.selected_index)
            .rev()
            .find(|&idx| self.is_selectable(idx))
        {
            self.selected_index = prev;
            self.list_state.select(Some(prev));
        }
    }

    fn item_line(&self, label: &str, is_current: bool, is_selectable: bool) -> ListItem<'static> {
        let label_style = if !is_selectable {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else if is_current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        ListItem::new(Line::from(vec![
            Span::styled(
                if is_current { "● " } else { "  " },
                Style::default().fg(Color::Green),
            ),
            Span::styled(label.to_string(), label_style),
        ]))
    }
}

/// Height for a dialog listing `option_count` options plus the "all" entry
fn popup_height(option_count: usize, area_height: u16) -> u16 {
    // options, "all" entry, header, help bar and borders
    u16::try_from(option_count)
        .unwrap_or(u16::MAX)
        .saturating_add(9)
        .min(area_height.saturating_sub(2))
        .max(10)
}

impl<V: Clone + PartialEq> Component for FilterDialog<V> {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Enter => Some((self.on_select)(self.get_selected())),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ModalUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ModalDown),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ModalUp => self.select_prev(),
            Action::ModalDown => self.select_next(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 64, popup_height(self.options.len(), area.height));
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Options
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let current_label = self
            .current
            .as_ref()
            .and_then(|value| self.options.iter().find(|o| &o.value == value))
            .map(|o| o.label.as_str())
            .unwrap_or(self.all_label);

        let header = Paragraph::new(Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Color::DarkGray)),
            Span::styled(current_label.to_string(), Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.title))
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        let mut items = vec![self.item_line(self.all_label, self.current.is_none(), true)];
        for option in &self.options {
            let is_current = self.current.as_ref() == Some(&option.value);
            items.push(self.item_line(&option.label, is_current, option.is_selectable));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}
