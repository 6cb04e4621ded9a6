//! Application state and core logic

use crate::api::{ApiError, LookupApi};
use crate::state::{Focus, FormState, LookupOption};
use crate::ui::Dropdown;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Results delivered to the controller from spawned backend tasks
#[derive(Debug)]
pub enum AppEvent {
    LookupsLoaded(Result<Vec<LookupOption>, ApiError>),
    SubmitFinished(Result<(), ApiError>),
}

/// Main application struct
pub struct App {
    /// Form controller state
    pub form: FormState,
    /// Dropdown view model holding the ordinal→key binding table
    pub dropdown: Dropdown,
    /// Gateway for the lookup/submit endpoints
    api: Arc<dyn LookupApi>,
    /// Sender feeding backend task results into the event loop
    events: mpsc::UnboundedSender<AppEvent>,
    /// Lookup failure shown in the status bar
    pub load_error: Option<String>,
    /// Outcome of the last submit, shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn LookupApi>, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            form: FormState::default(),
            dropdown: Dropdown::default(),
            api,
            events,
            load_error: None,
            status_message: None,
            quit: false,
        }
    }

    /// Start the single lookup fetch for this app lifetime
    ///
    /// Returns immediately; the result arrives as an [`AppEvent`] on the
    /// channel drained by the event loop. Once the receiver is gone the
    /// send fails and a late response is discarded with it.
    pub fn initialize(&self) {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.fetch_lookups().await;
            let _ = events.send(AppEvent::LookupsLoaded(result));
        });
    }

    /// Apply a backend task result to the controller state
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LookupsLoaded(Ok(options)) => {
                self.load_error = None;
                self.dropdown = Dropdown::from_options(&options);
                self.form.apply_lookups(options);
            }
            AppEvent::LookupsLoaded(Err(err)) => {
                tracing::warn!("lookup fetch failed: {err}");
                self.load_error = Some(format!("Lookup failed: {err}"));
            }
            AppEvent::SubmitFinished(Ok(())) => {
                self.status_message = Some("Submitted".to_string());
            }
            AppEvent::SubmitFinished(Err(err)) => {
                tracing::warn!("submit failed: {err}");
                self.status_message = Some(format!("Submit failed: {err}"));
            }
        }
    }

    /// Route a key event into controller state mutations
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return;
            }
            KeyCode::Tab => {
                self.form.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                return;
            }
            _ => {}
        }

        match self.form.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Dropdown => self.handle_dropdown_key(key),
            Focus::Button => {
                if key.code == KeyCode::Enter {
                    self.on_submit();
                }
            }
        }
    }

    /// Rebuild the field value and push it into the controller
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                let mut value = self.form.input_text.clone().unwrap_or_default();
                value.push(c);
                self.form.set_input_text(value);
            }
            KeyCode::Backspace => {
                let mut value = self.form.input_text.clone().unwrap_or_default();
                value.pop();
                self.form.set_input_text(value);
            }
            _ => {}
        }
    }

    /// Move the dropdown selection and bind the resolved key
    fn handle_dropdown_key(&mut self, key: KeyEvent) {
        let selected = match key.code {
            KeyCode::Up => self.dropdown.select_prev(),
            KeyCode::Down => self.dropdown.select_next(),
            _ => return,
        };

        tracing::debug!(value = %self.dropdown.selected_value(), "selection changed");
        self.form.set_selection(selected);
    }

    /// Forward the current input text to the gateway
    ///
    /// No-op while submit is disabled. The input text is kept as-is after
    /// submitting; the outcome only ever touches the status line.
    pub fn on_submit(&mut self) {
        if !self.form.can_submit() {
            return;
        }
        let Some(payload) = self.form.input_text.clone() else {
            return;
        };

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.submit(&payload).await;
            let _ = events.send(AppEvent::SubmitFinished(result));
        });
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
