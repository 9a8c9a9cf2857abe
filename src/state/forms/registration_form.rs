//! Registration form state and its reducer

use super::field::{FieldName, FieldValue, FormField, Role};
use super::ValidationError;
use serde::Serialize;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the form's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Register,
    Login,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Register => Self::Login,
            Self::Login => Self::Register,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Login => "Login",
        }
    }
}

/// Payload sent to the registration endpoint.
///
/// Only produced by [`RegistrationForm::validate`]; the password
/// confirmation never leaves the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

/// Registration form value object.
///
/// Edits go through [`RegistrationForm::apply`], which returns a new form
/// rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub role: FormField,
    /// Whether the role selector is offered to the user
    pub role_selectable: bool,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl RegistrationForm {
    pub fn new(role_selectable: bool) -> Self {
        Self {
            name: FormField::empty(FieldName::Name),
            email: FormField::empty(FieldName::Email),
            phone: FormField::empty(FieldName::Phone),
            password: FormField::empty(FieldName::Password),
            confirm_password: FormField::empty(FieldName::ConfirmPassword),
            role: FormField::empty(FieldName::Role),
            role_selectable,
            active_field_index: 0,
            selected_button: FormButton::default(),
        }
    }

    /// Fields shown to the user, in order
    pub fn visible_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| *f != FieldName::Role || self.role_selectable)
            .collect()
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::Role => &self.role,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
            FieldName::Role => &mut self.role,
        }
    }

    pub fn role_value(&self) -> Role {
        match self.role.value {
            FieldValue::Role(role) => role,
            _ => Role::default(),
        }
    }

    /// Reducer: returns the form with `field` set to `value`.
    ///
    /// A role value that is not `USER` or `ADMIN` leaves the form unchanged.
    pub fn apply(mut self, field: FieldName, value: impl Into<String>) -> Self {
        let value = value.into();
        let slot = self.field_mut(field);
        slot.value = match &slot.value {
            FieldValue::Text(_) => FieldValue::Text(value),
            FieldValue::Secret(_) => FieldValue::Secret(value),
            FieldValue::Role(current) => FieldValue::Role(value.parse().unwrap_or(*current)),
        };
        self
    }

    /// Field under the cursor, `None` when the buttons row is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        self.visible_fields().get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_name().is_none()
    }

    /// Append a character to the focused text field
    pub fn push_char(self, c: char) -> Self {
        match self.active_field_name() {
            Some(FieldName::Role) | None => self,
            Some(field) => {
                let mut value = self.field(field).as_text().to_string();
                value.push(c);
                self.apply(field, value)
            }
        }
    }

    /// Remove the last character from the focused text field
    pub fn pop_char(self) -> Self {
        match self.active_field_name() {
            Some(FieldName::Role) | None => self,
            Some(field) => {
                let mut value = self.field(field).as_text().to_string();
                value.pop();
                self.apply(field, value)
            }
        }
    }

    pub fn toggle_role(self) -> Self {
        let next = self.role_value().toggle();
        self.apply(FieldName::Role, next.as_str())
    }

    /// Check required fields and password confirmation, then build the payload
    pub fn validate(&self) -> Result<RegistrationRequest, ValidationError> {
        let required = [
            &self.name,
            &self.email,
            &self.phone,
            &self.password,
            &self.confirm_password,
        ];
        if required.iter().any(|f| f.as_text().is_empty()) {
            return Err(ValidationError::MissingFields);
        }

        if self.password.as_text() != self.confirm_password.as_text() {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(RegistrationRequest {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            password: self.password.as_text().to_string(),
            role: self.role_value(),
        })
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        self.visible_fields().len() + 1 // fields + buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm::default()
            .apply(FieldName::Name, "Asha Rai")
            .apply(FieldName::Email, "asha@example.com")
            .apply(FieldName::Phone, "9800000000")
            .apply(FieldName::Password, password)
            .apply(FieldName::ConfirmPassword, confirm)
    }

    #[test]
    fn test_apply_returns_updated_copy() {
        let original = RegistrationForm::default();
        let updated = original.clone().apply(FieldName::Email, "a@b.c");
        assert_eq!(original.email.as_text(), "");
        assert_eq!(updated.email.as_text(), "a@b.c");
    }

    #[test]
    fn test_apply_invalid_role_keeps_previous() {
        let form = RegistrationForm::default()
            .apply(FieldName::Role, "ADMIN")
            .apply(FieldName::Role, "ROOT");
        assert_eq!(form.role_value(), Role::Admin);
    }

    #[test]
    fn test_validate_each_missing_field() {
        let fields = [
            FieldName::Name,
            FieldName::Email,
            FieldName::Phone,
            FieldName::Password,
            FieldName::ConfirmPassword,
        ];
        for field in fields {
            let form = filled("pw", "pw").apply(field, "");
            assert_eq!(
                form.validate(),
                Err(ValidationError::MissingFields),
                "{field:?} left empty"
            );
        }
    }

    #[test]
    fn test_validate_missing_fields_checked_before_mismatch() {
        let form = filled("one", "two").apply(FieldName::Name, "");
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_validate_password_mismatch() {
        assert_eq!(
            filled("secret1", "secret2").validate(),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_validate_builds_request() {
        let request = filled("secret", "secret")
            .apply(FieldName::Role, "ADMIN")
            .validate()
            .unwrap();
        assert_eq!(
            request,
            RegistrationRequest {
                name: "Asha Rai".to_string(),
                email: "asha@example.com".to_string(),
                phone: "9800000000".to_string(),
                password: "secret".to_string(),
                role: Role::Admin,
            }
        );
    }

    #[test]
    fn test_request_body_omits_confirmation() {
        let request = filled("secret", "secret").validate().unwrap();
        let body = serde_json::to_value(&request).unwrap();
        let object = body.as_object().unwrap();
        assert!(!object.contains_key("confirmPassword"));
        assert_eq!(object.len(), 5);
        assert_eq!(body["role"], "USER");
    }

    #[test]
    fn test_push_and_pop_edit_active_field() {
        let mut form = RegistrationForm::default();
        form.set_active_field(2);
        let form = form.push_char('9').push_char('8').pop_char();
        assert_eq!(form.phone.as_text(), "9");
    }

    #[test]
    fn test_push_char_ignored_on_buttons_row() {
        let mut form = RegistrationForm::default();
        form.set_active_field(5);
        assert!(form.is_buttons_row_active());
        let before = form.clone();
        assert_eq!(form.push_char('x'), before);
    }

    #[test]
    fn test_role_hidden_unless_selectable() {
        assert_eq!(RegistrationForm::new(false).field_count(), 6);
        assert_eq!(RegistrationForm::new(true).field_count(), 7);
        assert!(!RegistrationForm::new(false)
            .visible_fields()
            .contains(&FieldName::Role));
    }

    #[test]
    fn test_toggle_role() {
        let form = RegistrationForm::new(true).toggle_role();
        assert_eq!(form.role_value(), Role::Admin);
        assert_eq!(form.toggle_role().role_value(), Role::User);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = RegistrationForm::default();
        form.prev_field();
        assert!(form.is_buttons_row_active());
        form.next_field();
        assert_eq!(form.active_field_name(), Some(FieldName::Name));
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = RegistrationForm::default();
        form.set_active_field(42);
        assert_eq!(form.active_field(), 5);
    }
}
