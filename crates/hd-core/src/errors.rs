//! Cross-cutting error types for the help-desk crates.
//!
//! Transport and storage errors live in their own crates (`ClientError`,
//! `SessionError`); `hd-store` and the CLI converge them.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field error found while validating one form.
///
/// Forms report all problems at once instead of stopping at the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when at least one field failed.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .errors
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>();
        f.write_str(&parts.join("; "))
    }
}

/// Errors raised by the domain model itself.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Form data failed validation; nothing was sent.
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// The caller's role does not grant the requested action.
    #[error("Forbidden: {action} requires an administrator")]
    Forbidden { action: String },

    /// The caller may not act on a ticket owned by someone else.
    #[error("Forbidden: ticket {ticket_id} belongs to another user")]
    NotOwner { ticket_id: String },

    /// Replies are refused once a ticket is closed.
    #[error("Ticket {ticket_id} is closed and no longer accepts replies")]
    TicketClosed { ticket_id: String },

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A value could not be mapped onto a known enumeration member.
    #[error("invalid {field} '{value}'")]
    InvalidValue { field: String, value: String },
}

impl CoreError {
    #[must_use]
    pub fn invalid_value(field: &str, value: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[must_use]
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
