//! Ticket visibility and list filtering.
//!
//! Visibility comes first (non-admins only ever see their own tickets), then
//! the optional equality filters. A filter field that is absent or blank
//! matches everything, and the input order is preserved.

use std::cmp::Reverse;

use serde::Serialize;

use crate::entities::Ticket;
use crate::enums::{TicketPriority, TicketStatus};
use crate::errors::CoreError;
use crate::permissions::Viewer;

/// Optional equality filters for ticket lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl TicketFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw text values. Blank values mean "no filter".
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidValue` for an unrecognized status or
    /// priority.
    pub fn parse(
        status: Option<&str>,
        priority: Option<&str>,
        subject: Option<&str>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            status: non_blank(status).map(str::parse).transpose()?,
            priority: non_blank(priority).map(str::parse).transpose()?,
            subject: non_blank(subject).map(str::to_string),
        })
    }

    #[must_use]
    pub const fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.subject_key().is_none()
    }

    fn subject_key(&self) -> Option<String> {
        self.subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if self.status.is_some_and(|status| ticket.status != status) {
            return false;
        }
        if self.priority.is_some_and(|priority| ticket.priority != priority) {
            return false;
        }
        self.subject_key()
            .is_none_or(|subject| ticket.subject.trim().to_lowercase() == subject)
    }

    /// Keep the matching tickets, in order.
    #[must_use]
    pub fn apply<'a>(&self, tickets: impl IntoIterator<Item = &'a Ticket>) -> Vec<&'a Ticket> {
        tickets.into_iter().filter(|t| self.matches(t)).collect()
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Tickets the viewer may see, in input order.
#[must_use]
pub fn visible_to<'a>(
    viewer: &Viewer,
    tickets: impl IntoIterator<Item = &'a Ticket>,
) -> Vec<&'a Ticket> {
    tickets.into_iter().filter(|t| viewer.can_see(t)).collect()
}

/// Visibility, then filters. This is what every ticket list shows.
#[must_use]
pub fn list_for<'a>(viewer: &Viewer, tickets: &'a [Ticket], filter: &TicketFilter) -> Vec<&'a Ticket> {
    filter.apply(visible_to(viewer, tickets))
}

/// The `count` most recently created tickets, newest first. Tickets without a
/// creation date sort last.
#[must_use]
pub fn most_recent(tickets: &[Ticket], count: usize) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    sorted.sort_by_key(|t| Reverse(t.created_at));
    sorted.truncate(count);
    sorted
}
