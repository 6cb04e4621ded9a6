//! Form screen rendering

use super::components::{render_button, render_dropdown, render_text_field};
use super::layout::FormAreas;
use crate::app::App;
use crate::state::Focus;
use ratatui::Frame;

/// Placeholder shown while the text input is empty
const INPUT_PLACEHOLDER: &str = "Enter text";

/// Draw the three form controls bound to the controller state
pub fn draw(frame: &mut Frame, areas: &FormAreas, app: &App) {
    render_text_field(
        frame,
        areas.input,
        "Input",
        app.form.input_text.as_deref(),
        INPUT_PLACEHOLDER,
        app.form.focus == Focus::Input,
    );

    // An unloaded dropdown is distinguishable from a loaded-but-empty one
    let dropdown_title = if app.form.lookups.is_ready() {
        "Selection"
    } else {
        "Selection (loading)"
    };
    render_dropdown(
        frame,
        areas.dropdown,
        dropdown_title,
        &app.dropdown,
        app.form.focus == Focus::Dropdown,
    );

    render_button(
        frame,
        areas.button,
        "Submit",
        app.form.focus == Focus::Button,
        app.form.can_submit(),
    );
}
