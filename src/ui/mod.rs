//! UI module for rendering the TUI

mod components;
mod form;
mod layout;

pub use components::Dropdown;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area(), app.dropdown.render_height());

    form::draw(frame, &areas, app);
    layout::draw_status_bar(frame, areas.status, app);
}
