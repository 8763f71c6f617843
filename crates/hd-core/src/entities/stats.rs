use serde::{Deserialize, Serialize};

use crate::entities::Ticket;
use crate::enums::TicketStatus;

/// Ticket counters shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStats {
    #[serde(rename = "chamadosAbertos", default)]
    pub open: u64,
    #[serde(rename = "chamadosEmAtendimento", default)]
    pub in_progress: u64,
    #[serde(rename = "chamadosEncerrados", default)]
    pub closed: u64,
    #[serde(rename = "totalChamados", default)]
    pub total: u64,
    #[serde(rename = "usuariosAtivos", default, skip_serializing_if = "Option::is_none")]
    pub active_users: Option<u64>,
    #[serde(
        rename = "tempoMedioResposta",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mean_response_time: Option<serde_json::Value>,
    #[serde(
        rename = "satisfacaoMedia",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mean_satisfaction: Option<serde_json::Value>,
}

impl TicketStats {
    /// Derive the counters from a ticket list.
    #[must_use]
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let mut stats = Self::default();
        for ticket in tickets {
            match ticket.status {
                TicketStatus::Open => stats.open += 1,
                TicketStatus::InProgress => stats.in_progress += 1,
                TicketStatus::Closed => stats.closed += 1,
            }
        }
        stats.total = tickets.len() as u64;
        stats
    }
}
