//! Roles, ticket statuses and ticket priorities.
//!
//! Every enum serializes to the canonical spelling the backend stores and
//! parses leniently: case-insensitive, `-`/space folded to `_`, and the
//! synonyms the backend and the original forms emit (`ABERTO`, `fechado`,
//! `baixo`, ...). Deserialization goes through [`FromStr`] so CLI arguments
//! and wire payloads share one vocabulary.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Fold a raw value into the lookup form used by the `FromStr` impls.
fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|ch| match ch {
            '-' | ' ' => '_',
            'á' | 'à' | 'â' | 'ã' | 'Á' | 'À' | 'Â' | 'Ã' => 'a',
            'é' | 'ê' | 'É' | 'Ê' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'ô' | 'õ' | 'Ó' | 'Ô' | 'Õ' => 'o',
            'ú' | 'Ú' => 'u',
            'ç' | 'Ç' => 'c',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

macro_rules! deserialize_via_from_str {
    ($ty:ty) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role. Governs ticket visibility and every admin-only mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Map the legacy boolean `isAdmin` flag onto a role.
    #[must_use]
    pub const fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin { Self::Admin } else { Self::User }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "admin" | "administrador" | "administrator" => Ok(Self::Admin),
            "user" | "usuario" | "comum" => Ok(Self::User),
            _ => Err(CoreError::invalid_value("role", raw)),
        }
    }
}

deserialize_via_from_str!(Role);

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Status of a ticket.
///
/// ```text
/// open → in_progress → closed
/// ```
///
/// The forward path is what the UI offers; admins may still set any status
/// through an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TicketStatus {
    #[default]
    #[serde(rename = "aberto")]
    Open,
    #[serde(rename = "em_atendimento")]
    InProgress,
    #[serde(rename = "encerrado")]
    Closed,
}

impl TicketStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::InProgress, Self::Closed],
            Self::InProgress => &[Self::Closed],
            Self::Closed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether new replies may be appended.
    #[must_use]
    pub const fn accepts_replies(self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "aberto",
            Self::InProgress => "em_atendimento",
            Self::Closed => "encerrado",
        }
    }

    /// Spelling sent by the ticket creation form.
    #[must_use]
    pub const fn form_value(self) -> &'static str {
        match self {
            Self::Open => "ABERTO",
            Self::InProgress => "EM_ATENDIMENTO",
            Self::Closed => "ENCERRADO",
        }
    }

    /// Path segment used by `GET /api/{status}`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for TicketStatus {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "aberto" | "open" | "novo" => Ok(Self::Open),
            "em_atendimento" | "in_progress" | "atendimento" | "em_andamento" => {
                Ok(Self::InProgress)
            }
            "encerrado" | "fechado" | "resolvido" | "closed" | "done" => Ok(Self::Closed),
            _ => Err(CoreError::invalid_value("status", raw)),
        }
    }
}

deserialize_via_from_str!(TicketStatus);

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TicketPriority
// ---------------------------------------------------------------------------

/// Priority of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize)]
pub enum TicketPriority {
    #[default]
    #[serde(rename = "baixa")]
    Low,
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "alta")]
    High,
}

impl TicketPriority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "baixa",
            Self::Medium => "media",
            Self::High => "alta",
        }
    }

    /// Spelling sent by the ticket creation form.
    #[must_use]
    pub const fn form_value(self) -> &'static str {
        match self {
            Self::Low => "baixo",
            Self::Medium => "medio",
            Self::High => "alto",
        }
    }
}

impl FromStr for TicketPriority {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "baixa" | "baixo" | "low" => Ok(Self::Low),
            "media" | "medio" | "medium" => Ok(Self::Medium),
            "alta" | "alto" | "high" => Ok(Self::High),
            _ => Err(CoreError::invalid_value("priority", raw)),
        }
    }
}

deserialize_via_from_str!(TicketPriority);

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Subjects
// ---------------------------------------------------------------------------

/// Subjects offered by the ticket creation form. Subjects stay free-form on
/// the wire; this list only drives prompts and warnings.
pub const KNOWN_SUBJECTS: [&str; 7] = [
    "hardware",
    "software",
    "rede",
    "impressora",
    "email",
    "acesso",
    "outros",
];

#[must_use]
pub fn is_known_subject(subject: &str) -> bool {
    let subject = normalize(subject);
    KNOWN_SUBJECTS.iter().any(|known| *known == subject)
}
