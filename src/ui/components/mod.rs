//! Reusable UI components

mod button;
mod dropdown;
mod text_field;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dropdown::{render_dropdown, Dropdown, DropdownEntry};
pub use text_field::render_text_field;
