//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Routes screen layout areas
pub struct RoutesLayout {
    pub title: Rect,
    pub filters: Rect,
    pub table: Rect,
    pub pager: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let popup_x = area.x + (area.width - width) / 2;
    let popup_y = area.y + (area.height - height) / 2;

    Rect::new(popup_x, popup_y, width, height)
}

/// Calculate routes screen layout: title, filter line, table, pager, (status), help bar
pub fn calculate_routes_layout(area: Rect, has_status: bool) -> RoutesLayout {
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
    ];
    if has_status {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (status, help) = if has_status {
        (Some(chunks[4]), chunks[5])
    } else {
        (None, chunks[4])
    };

    RoutesLayout {
        title: chunks[0],
        filters: chunks[1],
        table: chunks[2],
        pager: chunks[3],
        status,
        help,
    }
}
