use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire_serde;

/// A file attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AttachmentRecord")]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    pub url: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AttachmentRecord {
    Url(String),
    Full {
        #[serde(default, with = "wire_serde::id_option")]
        id: Option<String>,
        #[serde(default, alias = "name")]
        nome: Option<String>,
        #[serde(default)]
        url: String,
    },
}

impl From<AttachmentRecord> for Attachment {
    fn from(record: AttachmentRecord) -> Self {
        match record {
            AttachmentRecord::Url(url) => Self {
                id: None,
                name: file_name_from_url(&url),
                url,
            },
            AttachmentRecord::Full { id, nome, url } => Self {
                id,
                name: nome.unwrap_or_else(|| file_name_from_url(&url)),
                url,
            },
        }
    }
}

fn file_name_from_url(url: &str) -> String {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(url)
        .to_string()
}

/// One message in a ticket's reply thread. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReplyRecord")]
pub struct Reply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "chamadoId", skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    #[serde(rename = "user_id")]
    pub author_id: String,
    #[serde(rename = "usuario_nome", skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(
        rename = "created_at",
        skip_serializing_if = "Option::is_none",
        with = "wire_serde::timestamp_option"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "anexos", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Reply {
    /// Name to show for the author, falling back to the id.
    #[must_use]
    pub fn author_label(&self) -> &str {
        self.author_name.as_deref().unwrap_or(&self.author_id)
    }
}

#[derive(Deserialize)]
struct ReplyRecord {
    #[serde(default, with = "wire_serde::id_option")]
    id: Option<String>,
    #[serde(
        default,
        rename = "chamadoId",
        alias = "chamado_id",
        with = "wire_serde::id_option"
    )]
    ticket_id: Option<String>,
    #[serde(
        default,
        rename = "user_id",
        alias = "usuarioId",
        alias = "autorId",
        with = "wire_serde::id_option"
    )]
    author_id: Option<String>,
    #[serde(default, rename = "usuario_nome", alias = "autorNome", alias = "usuario")]
    author_name: Option<String>,
    #[serde(default, rename = "mensagem", alias = "conteudo", alias = "texto")]
    message: Option<String>,
    #[serde(
        default,
        rename = "created_at",
        alias = "dataCriacao",
        alias = "data",
        with = "wire_serde::timestamp_option"
    )]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "anexos")]
    attachments: Option<Vec<Attachment>>,
}

impl From<ReplyRecord> for Reply {
    fn from(record: ReplyRecord) -> Self {
        Self {
            id: record.id,
            ticket_id: record.ticket_id,
            author_id: record.author_id.unwrap_or_default(),
            author_name: record.author_name.filter(|name| !name.is_empty()),
            message: record.message.unwrap_or_default(),
            created_at: record.created_at,
            attachments: record.attachments.unwrap_or_default(),
        }
    }
}
