//! Admin-side user update builder.

use serde::Serialize;

use crate::enums::Role;
use crate::errors::{CoreError, ValidationErrors};
use crate::forms::{digits_only, looks_like_email};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(rename = "celular", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "setor", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "cargo", skip_serializing_if = "Option::is_none")]
    pub role_title: Option<String>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.cpf.is_none()
            && self.phone.is_none()
            && self.department.is_none()
            && self.role_title.is_none()
            && self.role.is_none()
    }

    /// Same per-field rules as registration, applied to present fields only.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` listing every failing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        if self.is_empty() {
            errors.push("update", "at least one field must be set");
        }
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            errors.push("name", "must not be blank");
        }
        if self.email.as_deref().is_some_and(|e| !looks_like_email(e.trim())) {
            errors.push("email", "must look like name@domain.tld");
        }
        if self.password.as_deref().is_some_and(|p| p.chars().count() < 6) {
            errors.push("password", "must have at least 6 characters");
        }
        if self.cpf.as_deref().is_some_and(|c| digits_only(c).len() != 11) {
            errors.push("cpf", "must have 11 digits");
        }
        if self.phone.as_deref().is_some_and(|p| digits_only(p).len() != 11) {
            errors.push("phone", "must have 11 digits");
        }
        errors.into_result()
    }
}

pub struct UserUpdateBuilder(UserUpdate);

impl UserUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(UserUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.0.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn cpf(mut self, cpf: &str) -> Self {
        self.0.cpf = Some(digits_only(cpf));
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: &str) -> Self {
        self.0.phone = Some(digits_only(phone));
        self
    }

    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.0.department = Some(department.into());
        self
    }

    #[must_use]
    pub fn role_title(mut self, role_title: impl Into<String>) -> Self {
        self.0.role_title = Some(role_title.into());
        self
    }

    #[must_use]
    pub const fn role(mut self, role: Role) -> Self {
        self.0.role = Some(role);
        self
    }

    #[must_use]
    pub fn build(self) -> UserUpdate {
        self.0
    }
}

impl Default for UserUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
