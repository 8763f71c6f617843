//! Form drafts and their validation.
//!
//! Each draft is validated in full before anything is sent: every failing
//! field is reported together in one [`ValidationErrors`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::enums::{Role, TicketPriority, TicketStatus};
use crate::errors::{CoreError, ValidationErrors};

const MIN_PASSWORD_LEN: usize = 6;
const CPF_DIGITS: usize = 11;
const PHONE_DIGITS: usize = 11;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Keep only ASCII digits.
#[must_use]
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Render an 11-digit mobile number as `(AA) NNNNN-NNNN`.
///
/// Anything that is not exactly 11 digits after stripping punctuation is
/// returned unchanged.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() != PHONE_DIGITS {
        return raw.to_string();
    }
    format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
}

/// Loose `x@y.z` shape check: no whitespace, one `@`, and a dot with text on
/// both sides somewhere after it.
#[must_use]
pub fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i + 1 < domain.len())
}

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

/// A ticket as typed into the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub priority: TicketPriority,
}

impl TicketDraft {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            subject: subject.into(),
            priority: TicketPriority::default(),
        }
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = priority;
        self
    }

    /// # Errors
    ///
    /// `CoreError::Validation` naming every blank required field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        if is_blank(&self.title) {
            errors.push("title", "required");
        }
        if is_blank(&self.description) {
            errors.push("description", "required");
        }
        if is_blank(&self.subject) {
            errors.push("subject", "required");
        }
        errors.into_result()
    }

    /// Request body for `POST /api/called/create`.
    #[must_use]
    pub fn to_request(&self, owner_id: &str, opened_on: NaiveDate) -> NewTicketRequest {
        NewTicketRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority.form_value(),
            subject: self.subject.trim().to_string(),
            status: TicketStatus::Open.form_value(),
            user_id: owner_id.to_string(),
            opened_on: opened_on.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Wire body of a ticket creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTicketRequest {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "prioridade")]
    pub priority: &'static str,
    #[serde(rename = "assunto")]
    pub subject: String,
    pub status: &'static str,
    pub user_id: String,
    #[serde(rename = "data_abertura")]
    pub opened_on: String,
}

/// Validate a reply message.
///
/// # Errors
///
/// `CoreError::Validation` when the message is blank.
pub fn validate_reply(message: &str) -> Result<(), CoreError> {
    let mut errors = ValidationErrors::new();
    if is_blank(message) {
        errors.push("message", "required");
    }
    errors.into_result()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Registration / admin user-creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub password_confirmation: Option<String>,
    pub cpf: String,
    #[serde(rename = "celular")]
    pub phone: String,
    #[serde(rename = "setor")]
    pub department: String,
    #[serde(rename = "cargo")]
    pub role_title: String,
    #[serde(rename = "tipo")]
    pub role: Role,
}

impl NewUser {
    /// # Errors
    ///
    /// `CoreError::Validation` listing every failing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        if is_blank(&self.name) {
            errors.push("name", "required");
        }
        if !looks_like_email(self.email.trim()) {
            errors.push("email", "must look like name@domain.tld");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(
                "password",
                format!("must have at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        if self
            .password_confirmation
            .as_ref()
            .is_some_and(|confirmation| *confirmation != self.password)
        {
            errors.push("password_confirmation", "does not match");
        }
        if digits_only(&self.cpf).len() != CPF_DIGITS {
            errors.push("cpf", format!("must have {CPF_DIGITS} digits"));
        }
        if digits_only(&self.phone).len() != PHONE_DIGITS {
            errors.push("phone", format!("must have {PHONE_DIGITS} digits"));
        }
        if is_blank(&self.department) {
            errors.push("department", "required");
        }
        if is_blank(&self.role_title) {
            errors.push("role_title", "required");
        }
        errors.into_result()
    }

    /// Copy with CPF and phone reduced to digits and text fields trimmed.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            password_confirmation: None,
            cpf: digits_only(&self.cpf),
            phone: digits_only(&self.phone),
            department: self.department.trim().to_string(),
            role_title: self.role_title.trim().to_string(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_user() -> NewUser {
        NewUser {
            name: "Bia Souza".into(),
            email: "bia@example.com".into(),
            password: "segredo".into(),
            password_confirmation: Some("segredo".into()),
            cpf: "123.456.789-01".into(),
            phone: "(11) 98765-4321".into(),
            department: "Financeiro".into(),
            role_title: "Analista".into(),
            role: Role::User,
        }
    }

    #[test]
    fn draft_reports_every_blank_field() {
        let draft = TicketDraft::new("  ", "", "\t");
        let Err(CoreError::Validation(errors)) = draft.validate() else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 3);
        assert!(errors.has_field("title"));
        assert!(errors.has_field("description"));
        assert!(errors.has_field("subject"));
    }

    #[test]
    fn request_uses_form_spellings() {
        let draft = TicketDraft::new("Printer down", "Paper jam on floor 2", "hardware");
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).expect("date");
        let json = serde_json::to_value(draft.to_request("42", date)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "titulo": "Printer down",
                "descricao": "Paper jam on floor 2",
                "prioridade": "baixo",
                "assunto": "hardware",
                "status": "ABERTO",
                "user_id": "42",
                "data_abertura": "2024-03-20",
            })
        );
    }

    #[test]
    fn blank_reply_is_rejected() {
        assert!(validate_reply("   ").is_err());
        assert!(validate_reply("ok").is_ok());
    }

    #[test]
    fn valid_user_passes() {
        assert!(valid_user().validate().is_ok());
    }

    #[test]
    fn user_validation_collects_everything() {
        let user = NewUser {
            email: "not-an-email".into(),
            password: "123".into(),
            password_confirmation: Some("1234".into()),
            cpf: "123".into(),
            phone: "9999".into(),
            ..NewUser::default()
        };
        let Err(CoreError::Validation(errors)) = user.validate() else {
            panic!("expected validation error");
        };
        for field in [
            "name",
            "email",
            "password",
            "password_confirmation",
            "cpf",
            "phone",
            "department",
            "role_title",
        ] {
            assert!(errors.has_field(field), "missing {field}");
        }
    }

    #[test]
    fn normalized_strips_punctuation() {
        let user = valid_user().normalized();
        assert_eq!(user.cpf, "12345678901");
        assert_eq!(user.phone, "11987654321");
        let json = serde_json::to_value(&user).expect("serialize");
        assert!(json.get("password_confirmation").is_none());
        assert_eq!(json["celular"], "11987654321");
        assert_eq!(json["tipo"], "user");
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b.c"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a b@c.d"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
    }

    #[test]
    fn phone_formatting() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("123"), "123");
    }
}
