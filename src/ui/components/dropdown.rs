//! Select-style dropdown bound to the lookup options

use crate::state::LookupOption;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A rendered dropdown entry
///
/// `value` is the select-element identity string (`"None"`, `"1: true"`),
/// `text` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownEntry {
    pub value: String,
    pub text: String,
}

/// Dropdown view model
///
/// Holds the synthetic leading "None" entry followed by one entry per lookup
/// option, in stored order. Selection is resolved back to the option's typed
/// boolean key through an ordinal table, never by parsing the entry value.
#[derive(Debug, Clone)]
pub struct Dropdown {
    entries: Vec<DropdownEntry>,
    /// Ordinal position → typed key; index 0 is the "None" entry
    keys: Vec<Option<bool>>,
    selected: usize,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::from_options(&[])
    }
}

impl Dropdown {
    /// Build the entry list and ordinal table from a lookup batch
    pub fn from_options(options: &[LookupOption]) -> Self {
        let mut entries = vec![DropdownEntry {
            value: "None".to_string(),
            text: "None".to_string(),
        }];
        let mut keys = vec![None];

        for (idx, option) in options.iter().enumerate() {
            entries.push(DropdownEntry {
                value: format!("{}: {}", idx + 1, option.key),
                text: option.value.clone(),
            });
            keys.push(Some(option.key));
        }

        Self {
            entries,
            keys,
            selected: 0,
        }
    }

    pub fn entries(&self) -> &[DropdownEntry] {
        &self.entries
    }

    /// Number of rendered entries, including the "None" entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The typed key of the selected entry, resolved through the ordinal table
    pub fn selected_key(&self) -> Option<bool> {
        self.keys.get(self.selected).copied().flatten()
    }

    /// Identity string of the selected entry (`"None"`, `"1: true"`)
    pub fn selected_value(&self) -> &str {
        &self.entries[self.selected].value
    }

    /// Select the entry at `index` (clamped) and resolve its key
    pub fn select(&mut self, index: usize) -> Option<bool> {
        self.selected = index.min(self.entries.len() - 1);
        self.selected_key()
    }

    /// Move the selection down one entry, stopping at the last
    pub fn select_next(&mut self) -> Option<bool> {
        self.select(self.selected + 1)
    }

    /// Move the selection up one entry, stopping at the first
    pub fn select_prev(&mut self) -> Option<bool> {
        self.select(self.selected.saturating_sub(1))
    }

    /// Rows needed to render all entries inside a bordered block
    pub fn render_height(&self) -> u16 {
        self.len() as u16 + 2
    }
}

/// Render the dropdown as a bordered entry list
pub fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    dropdown: &Dropdown,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines: Vec<Line> = dropdown
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            if idx == dropdown.selected_index() {
                let marker_style = if is_focused {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                Line::from(vec![
                    Span::styled("▸ ", marker_style),
                    Span::styled(entry.text.clone(), marker_style),
                ])
            } else {
                Line::from(Span::styled(
                    format!("  {}", entry.text),
                    Style::default().fg(Color::Gray),
                ))
            }
        })
        .collect();

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
