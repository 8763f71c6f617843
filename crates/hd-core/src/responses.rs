//! Composite views returned by the stores and rendered by the CLI.

use serde::{Deserialize, Serialize};

use crate::entities::{Reply, Ticket, TicketStats, User};

/// Body of a successful `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    #[serde(alias = "access_token")]
    pub token: String,
}

/// A ticket with its reply thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketDetail {
    pub ticket: Ticket,
    pub replies: Vec<Reply>,
    /// Whether the viewer may append to the thread.
    pub can_reply: bool,
}

/// Admin dashboard: counters plus the newest tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub stats: TicketStats,
    /// `true` when the counters were derived locally because the stats
    /// endpoint failed.
    pub stats_derived: bool,
    pub recent: Vec<Ticket>,
}
