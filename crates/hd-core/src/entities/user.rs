use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::wire_serde;

/// A help-desk account.
///
/// Serializes with the backend's field names. Decoding goes through
/// [`UserRecord`] so the legacy `isAdmin` flag and numeric ids are folded
/// into the normalized shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserRecord")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Write-only: sent on create/update, never persisted locally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(rename = "celular", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "setor")]
    pub department: String,
    #[serde(rename = "cargo")]
    pub role_title: String,
    #[serde(rename = "tipo")]
    pub role: Role,
    #[serde(
        rename = "dataCadastro",
        skip_serializing_if = "Option::is_none",
        with = "wire_serde::timestamp_option"
    )]
    pub registered_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "ultimoAcesso",
        skip_serializing_if = "Option::is_none",
        with = "wire_serde::timestamp_option"
    )]
    pub last_access_at: Option<DateTime<Utc>>,
    #[serde(rename = "foto", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Copy without the write-only password.
    #[must_use]
    pub fn without_password(&self) -> Self {
        Self {
            password: None,
            ..self.clone()
        }
    }
}

#[derive(Deserialize)]
struct UserRecord {
    #[serde(with = "wire_serde::id")]
    id: String,
    #[serde(default, alias = "nome")]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, alias = "senha")]
    password: Option<String>,
    #[serde(default)]
    cpf: Option<String>,
    #[serde(default, alias = "phone")]
    celular: Option<String>,
    #[serde(default, alias = "department")]
    setor: Option<String>,
    #[serde(default, alias = "role_title")]
    cargo: Option<String>,
    #[serde(default, alias = "role")]
    tipo: Option<String>,
    #[serde(default, rename = "isAdmin")]
    is_admin: Option<bool>,
    #[serde(
        default,
        rename = "dataCadastro",
        alias = "created_at",
        with = "wire_serde::timestamp_option"
    )]
    registered_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        rename = "ultimoAcesso",
        alias = "last_access",
        with = "wire_serde::timestamp_option"
    )]
    last_access_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "avatar")]
    foto: Option<String>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        // Unknown role spellings fail closed to `User`; a blank one defers to
        // the `isAdmin` flag.
        let tipo = record.tipo.as_deref().filter(|t| !t.trim().is_empty());
        let role = match tipo.map(str::parse::<Role>) {
            Some(Ok(role)) => role,
            Some(Err(_)) => Role::User,
            None => Role::from_admin_flag(record.is_admin.unwrap_or(false)),
        };

        Self {
            id: record.id,
            name: record.name.unwrap_or_default(),
            email: record.email.unwrap_or_default(),
            password: record.password.filter(|p| !p.is_empty()),
            cpf: record.cpf.filter(|v| !v.is_empty()),
            phone: record.celular.filter(|v| !v.is_empty()),
            department: record.setor.unwrap_or_default(),
            role_title: record.cargo.unwrap_or_default(),
            role,
            registered_at: record.registered_at,
            last_access_at: record.last_access_at,
            avatar: record.foto.filter(|v| !v.is_empty()),
        }
    }
}
