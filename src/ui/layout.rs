//! Layout components (form column, status bar)

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Text field height in rows (top border + content + bottom border)
const FIELD_HEIGHT: u16 = 3;

/// Areas of the form screen, top to bottom
pub struct FormAreas {
    pub input: Rect,
    pub dropdown: Rect,
    pub button: Rect,
    pub status: Rect,
}

/// Split the screen into the form column and the status line
pub fn create_layout(area: Rect, dropdown_height: u16) -> FormAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),    // Text input
            Constraint::Length(dropdown_height), // Dropdown
            Constraint::Length(BUTTON_HEIGHT),   // Submit button
            Constraint::Min(0),                  // Filler
            Constraint::Length(1),               // Status bar
        ])
        .split(area);

    FormAreas {
        input: chunks[0],
        dropdown: chunks[1],
        button: chunks[2],
        status: chunks[4],
    }
}

/// Draw the status bar: last error or status message, then key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = &app.load_error {
        Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(vec![
            Span::styled(" Tab", Style::default().fg(Color::Cyan)),
            Span::styled(" switch  ", Style::default().fg(Color::DarkGray)),
            Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
            Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(" submit  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}
