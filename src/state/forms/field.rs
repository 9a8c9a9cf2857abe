//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FormError;

/// Account role offered at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn toggle(&self) -> Self {
        match self {
            Self::User => Self::Admin,
            Self::Admin => Self::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            other => Err(FormError::InvalidRole(other.to_string())),
        }
    }
}

/// Names of the registration form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Role,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Role,
    ];

    /// Name as it appears in the request payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Role => "role",
        }
    }

    /// Placeholder label shown on the field border
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Role => "Role",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Secret(String),
    Role(Role),
}

/// A single form field with its label and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub value: FieldValue,
}

impl FormField {
    /// Create an empty field of the right kind for `name`
    pub fn empty(name: FieldName) -> Self {
        let value = match name {
            FieldName::Role => FieldValue::Role(Role::default()),
            n if n.is_secret() => FieldValue::Secret(String::new()),
            _ => FieldValue::Text(String::new()),
        };
        Self { name, value }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    /// Raw text value (role fields yield their wire name)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s,
            FieldValue::Role(role) => role.as_str(),
        }
    }

    /// Value for rendering; secrets are masked
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Secret(s) => "•".repeat(s.chars().count()),
            FieldValue::Role(role) => format!("◂ {} ▸", role.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    }

    #[test]
    fn test_role_parse_rejects_lowercase() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!(matches!(
            "admin".parse::<Role>(),
            Err(FormError::InvalidRole(_))
        ));
    }

    #[test]
    fn test_role_toggle_round_trip() {
        assert_eq!(Role::User.toggle(), Role::Admin);
        assert_eq!(Role::User.toggle().toggle(), Role::User);
    }

    #[test]
    fn test_empty_field_kinds() {
        assert!(matches!(
            FormField::empty(FieldName::Email).value,
            FieldValue::Text(_)
        ));
        assert!(matches!(
            FormField::empty(FieldName::ConfirmPassword).value,
            FieldValue::Secret(_)
        ));
        assert_eq!(
            FormField::empty(FieldName::Role).value,
            FieldValue::Role(Role::User)
        );
    }

    #[test]
    fn test_secret_display_is_masked() {
        let field = FormField {
            name: FieldName::Password,
            value: FieldValue::Secret("hunter2".to_string()),
        };
        assert_eq!(field.display_value(), "•••••••");
        assert_eq!(field.as_text(), "hunter2");
    }
}
