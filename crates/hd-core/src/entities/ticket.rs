use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Reply;
use crate::enums::{TicketPriority, TicketStatus};
use crate::wire_serde;

/// A support ticket ("chamado").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TicketRecord")]
pub struct Ticket {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    pub status: TicketStatus,
    #[serde(rename = "prioridade")]
    pub priority: TicketPriority,
    #[serde(rename = "categoria")]
    pub subject: String,
    #[serde(
        rename = "dataCriacao",
        skip_serializing_if = "Option::is_none",
        with = "wire_serde::timestamp_option"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "dataAtualizacao",
        skip_serializing_if = "Option::is_none",
        with = "wire_serde::timestamp_option"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "usuarioId")]
    pub owner_id: String,
    #[serde(rename = "usuarioNome", skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(rename = "tecnicoId", skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<String>,
    #[serde(rename = "respostas", skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Reply>,
}

impl Ticket {
    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        !self.owner_id.is_empty() && self.owner_id == user_id
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self.status, TicketStatus::Closed)
    }
}

#[derive(Deserialize)]
struct OwnerRef {
    #[serde(default, with = "wire_serde::id_option")]
    id: Option<String>,
    #[serde(default, alias = "name")]
    nome: Option<String>,
}

#[derive(Deserialize)]
struct TicketRecord {
    #[serde(with = "wire_serde::id")]
    id: String,
    #[serde(default, alias = "title")]
    titulo: Option<String>,
    #[serde(default, alias = "description")]
    descricao: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, alias = "priority")]
    prioridade: Option<String>,
    #[serde(default, alias = "assunto", alias = "subject")]
    categoria: Option<String>,
    #[serde(
        default,
        rename = "dataCriacao",
        alias = "data_abertura",
        alias = "created_at",
        with = "wire_serde::timestamp_option"
    )]
    created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        rename = "dataAtualizacao",
        alias = "updated_at",
        with = "wire_serde::timestamp_option"
    )]
    updated_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        rename = "usuarioId",
        alias = "user_id",
        with = "wire_serde::id_option"
    )]
    owner_id: Option<String>,
    #[serde(default, rename = "usuarioNome", alias = "usuario_nome")]
    owner_name: Option<String>,
    #[serde(default)]
    usuario: Option<OwnerRef>,
    #[serde(
        default,
        rename = "tecnicoId",
        alias = "tecnico_id",
        with = "wire_serde::id_option"
    )]
    technician_id: Option<String>,
    #[serde(default, rename = "respostas")]
    replies: Option<Vec<Reply>>,
}

/// Unknown or blank values fall back to the default instead of failing the
/// whole list they arrived in.
fn lenient<T: FromStr + Default>(ticket_id: &str, field: &str, raw: Option<&str>) -> T {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return T::default();
    };
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(ticket_id, field, value = raw, "unknown value; using default");
        T::default()
    })
}

impl From<TicketRecord> for Ticket {
    fn from(record: TicketRecord) -> Self {
        let (nested_id, nested_name) = record
            .usuario
            .map_or((None, None), |owner| (owner.id, owner.nome));
        let status = lenient(&record.id, "status", record.status.as_deref());
        let priority = lenient(&record.id, "priority", record.prioridade.as_deref());

        Self {
            id: record.id,
            title: record.titulo.unwrap_or_default(),
            description: record.descricao.unwrap_or_default(),
            status,
            priority,
            subject: record.categoria.unwrap_or_default(),
            created_at: record.created_at,
            updated_at: record.updated_at,
            owner_id: record.owner_id.or(nested_id).unwrap_or_default(),
            owner_name: record.owner_name.or(nested_name).filter(|n| !n.is_empty()),
            technician_id: record.technician_id,
            replies: record.replies.unwrap_or_default(),
        }
    }
}
