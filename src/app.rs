//! Application state and core logic

use crate::api::{ApiClient, ApiError, RegistrationApi, RegistrationResponse};
use crate::config::TuiConfig;
use crate::state::{AppState, FieldName, Form, FormButton, SubmitState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Shown once the server accepts a registration
pub const REGISTRATION_SUCCESS: &str = "Registration successful!";

/// Result of one registration request
pub type SubmitOutcome = Result<RegistrationResponse, ApiError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Registration API collaborator
    api: Arc<dyn RegistrationApi>,
    /// Completed submissions, sent from request tasks
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured API
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = ApiClient::new(&config.api_base_url(), config.request_timeout())?;
        tracing::debug!("Registration endpoint: {}", client.register_url());
        Ok(Self::with_api(Arc::new(client), config.role_selectable()))
    }

    /// Create an App around any registration API implementation
    pub fn with_api(api: Arc<dyn RegistrationApi>, role_selectable: bool) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(role_selectable),
            api,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Per-frame housekeeping: expire the toast, apply finished submissions
    pub fn tick(&mut self) {
        self.state.expire_notification();
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.handle_submit_outcome(outcome);
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        tracing::debug!("Navigating to {}", view.route());
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.state.current_view = view;
        }
    }

    pub fn navigate_to_login(&mut self) {
        self.navigate(View::Login);
    }

    /// Set one form field to `value`
    pub fn on_field_change(&mut self, field: FieldName, value: impl Into<String>) {
        tracing::trace!("Field {} changed", field.as_str());
        self.state.form = self.state.form.clone().apply(field, value);
    }

    /// Validate the form and, if it passes, send it in the background.
    ///
    /// Ignored while a previous submission is still in flight.
    pub fn submit(&mut self) {
        if self.state.is_submitting() {
            tracing::debug!("Submission already in flight");
            return;
        }

        let request = match self.state.form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.state.set_error(err.to_string());
                return;
            }
        };

        tracing::debug!("Submitting registration (role {})", request.role);
        self.state.submit_state = SubmitState::Submitting;

        let api = Arc::clone(&self.api);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = api.register(&request).await;
            // Receiver lives as long as the app
            let _ = tx.send(outcome);
        });
    }

    fn handle_submit_outcome(&mut self, outcome: SubmitOutcome) {
        self.state.submit_state = SubmitState::Idle;
        match outcome {
            Ok(response) => {
                tracing::debug!(
                    "Registration accepted ({}): {}",
                    response.status,
                    response.message.as_deref().unwrap_or("no message")
                );
                self.state.reset_form();
                self.state.notify(REGISTRATION_SUCCESS);
                self.navigate_to_login();
            }
            Err(err) => {
                tracing::warn!("Registration failed: {err}");
                self.state.set_error(err.user_message());
            }
        }
    }

    /// Handle a bracketed paste into the focused field
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.current_view != View::Register {
            return;
        }
        let Some(field) = self.state.form.active_field_name() else {
            return;
        };
        if field == FieldName::Role {
            return;
        }
        // Single-line fields: drop any line breaks from the clipboard
        let pasted: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        let value = format!("{}{}", self.state.form.field(field).as_text(), pasted);
        self.on_field_change(field, value);
    }

    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Register => self.handle_register_key(key),
            View::Login => self.handle_login_key(key),
        }
        Ok(())
    }

    /// Handle keys in Register view
    fn handle_register_key(&mut self, key: KeyEvent) {
        let on_buttons_row = self.state.form.is_buttons_row_active();
        let on_role = self.state.form.active_field_name() == Some(FieldName::Role);

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.navigate_to_login()
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left | KeyCode::Right if on_buttons_row => {
                self.state.form.selected_button = self.state.form.selected_button.toggle();
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if on_role => {
                self.state.form = self.state.form.clone().toggle_role();
            }
            KeyCode::Enter if on_buttons_row => match self.state.form.selected_button {
                FormButton::Register => self.submit(),
                FormButton::Login => self.navigate_to_login(),
            },
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Esc => self.go_back(),
            KeyCode::Char(c)
                if !on_buttons_row && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.state.form = self.state.form.clone().push_char(c);
            }
            KeyCode::Backspace if !on_buttons_row => {
                self.state.form = self.state.form.clone().pop_char();
            }
            _ => {}
        }
    }

    /// Handle keys in Login view
    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('r') => {
                if self.state.view_history.is_empty() {
                    self.navigate(View::Register);
                } else {
                    self.go_back();
                }
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
