//! Form domain layer
//!
//! Type-safe registration form handling: field values, the form reducer
//! and client-side validation.

mod field;
mod registration_form;

pub use field::{FieldName, FieldValue, FormField, Role};
pub use registration_form::{Form, FormButton, RegistrationForm, RegistrationRequest};

use thiserror::Error;

/// Client-side validation failures, detected before any network call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Errors from parsing form values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("invalid role: {0} (expected USER or ADMIN)")]
    InvalidRole(String),
}
