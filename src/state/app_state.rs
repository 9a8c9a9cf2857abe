//! Application state definitions

use super::forms::RegistrationForm;
use super::notification::Notification;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    Login,
}

impl View {
    /// Route path of the view
    pub fn route(&self) -> &'static str {
        match self {
            Self::Register => "/register",
            Self::Login => "/login",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Login => "Login",
        }
    }
}

/// Lifecycle of a registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Form
    pub form: RegistrationForm,
    pub submit_state: SubmitState,
    pub error_message: Option<String>,

    // UI state
    pub notification: Option<Notification>,
}

impl AppState {
    pub fn new(role_selectable: bool) -> Self {
        Self {
            form: RegistrationForm::new(role_selectable),
            ..Default::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }

    /// Replace the visible error with `message`
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::new(message));
    }

    /// Drop the notification once it has expired
    pub fn expire_notification(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }

    /// Start over with an empty form and no error
    pub fn reset_form(&mut self) {
        self.form = RegistrationForm::new(self.form.role_selectable);
        self.error_message = None;
    }
}
