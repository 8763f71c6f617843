//! Ticket update builder.

use serde::Serialize;

use crate::enums::{TicketPriority, TicketStatus};
use crate::errors::{CoreError, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(rename = "prioridade", skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "assunto", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl TicketUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.subject.is_none()
    }

    /// # Errors
    ///
    /// `CoreError::Validation` when no field is set or a text field is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        if self.is_empty() {
            errors.push("update", "at least one field must be set");
        }
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("subject", &self.subject),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                errors.push(field, "must not be blank");
            }
        }
        errors.into_result()
    }
}

pub struct TicketUpdateBuilder(TicketUpdate);

impl TicketUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TicketUpdate::default())
    }

    #[must_use]
    pub const fn status(mut self, status: TicketStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: TicketPriority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.0.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn build(self) -> TicketUpdate {
        self.0
    }
}

impl Default for TicketUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
