//! Help dialog component
//!
//! Lists the keyboard shortcuts of the routes screen and the filter dialogs.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            ("n / → / l", "Next page"),
            ("b / ← / h", "Previous page"),
            ("g / Home", "First page"),
            ("j / k", "Scroll when the page does not fit"),
        ],
    ),
    (
        "Filters",
        &[
            ("a", "Choose airline"),
            ("p", "Choose airport"),
            ("r", "Show all routes (clear filters)"),
        ],
    ),
    (
        "Filter dialogs",
        &[
            ("j / k", "Move between options"),
            ("Enter", "Apply the highlighted option"),
            ("Esc", "Cancel"),
        ],
    ),
    ("General", &[("?", "Show this help"), ("q / Ctrl+c", "Quit")]),
];

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn content() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (title, shortcuts) in SECTIONS {
            lines.push(Line::from(Span::styled(
                format!(" {}", title),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, description) in shortcuts.iter() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("   {:12}", key),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*description),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            " Dimmed options would show no routes.",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = Self::content();
        let popup_area = centered_popup(area, 56, content.len() as u16 + 2);
        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
