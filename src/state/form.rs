//! Form state for the lookup/submit screen

use serde::{Deserialize, Serialize};

/// A single lookup entry as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub key: bool,
    pub value: String,
}

/// Lookup load lifecycle
///
/// `Uninitialized` covers both "request still pending" and "request failed";
/// `Ready` is entered on the first successful response and never left.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupState {
    #[default]
    Uninitialized,
    Ready(Vec<LookupOption>),
}

impl LookupState {
    /// The loaded options, or an empty slice before the first response
    pub fn options(&self) -> &[LookupOption] {
        match self {
            LookupState::Uninitialized => &[],
            LookupState::Ready(options) => options,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LookupState::Ready(_))
    }
}

/// Which control currently receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Dropdown,
    Button,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Dropdown,
            Focus::Dropdown => Focus::Button,
            Focus::Button => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::Button,
            Focus::Dropdown => Focus::Input,
            Focus::Button => Focus::Dropdown,
        }
    }
}

/// State owned by the form controller
///
/// The view layer reads this and requests mutations through the setters;
/// it never writes fields directly.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input_text: Option<String>,
    pub selected_key: Option<bool>,
    pub lookups: LookupState,
    pub focus: Focus,
}

impl FormState {
    /// Replace the input text with the field's current value
    pub fn set_input_text(&mut self, text: String) {
        self.input_text = Some(text);
    }

    /// Store the typed key of the chosen option, or `None` for no selection
    pub fn set_selection(&mut self, key: Option<bool>) {
        self.selected_key = key;
    }

    /// Replace the option list with a delivered batch
    pub fn apply_lookups(&mut self, options: Vec<LookupOption>) {
        self.lookups = LookupState::Ready(options);
    }

    /// Submit is enabled iff the input text is a non-empty string
    pub fn can_submit(&self) -> bool {
        self.input_text.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}
