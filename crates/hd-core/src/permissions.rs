//! Role-based capabilities.
//!
//! Every admin-only path in the stores and the CLI asks [`Role::can`]; there
//! is no other place that compares roles.

use serde::Serialize;

use crate::entities::{Ticket, User};
use crate::enums::Role;
use crate::errors::CoreError;

/// Actions gated on the caller's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// See tickets owned by anyone.
    ViewAllTickets,
    EditTicket,
    CloseTicket,
    DeleteTicket,
    ManageUsers,
    ViewDashboard,
    ExportReport,
}

impl Capability {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::ViewAllTickets => "viewing all tickets",
            Self::EditTicket => "editing a ticket",
            Self::CloseTicket => "closing a ticket",
            Self::DeleteTicket => "deleting a ticket",
            Self::ManageUsers => "managing users",
            Self::ViewDashboard => "viewing the dashboard",
            Self::ExportReport => "exporting the report",
        }
    }
}

impl Role {
    #[must_use]
    pub const fn can(self, _capability: Capability) -> bool {
        // Admins hold every capability, users hold none.
        self.is_admin()
    }
}

/// The acting user as seen by the stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Viewer {
    pub user_id: String,
    pub name: String,
    pub role: Role,
}

impl Viewer {
    #[must_use]
    pub fn new(user_id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            role,
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    #[must_use]
    pub const fn can(&self, capability: Capability) -> bool {
        self.role.can(capability)
    }

    /// # Errors
    ///
    /// Returns `CoreError::Forbidden` when the role lacks `capability`.
    pub fn require(&self, capability: Capability) -> Result<(), CoreError> {
        if self.can(capability) {
            Ok(())
        } else {
            Err(CoreError::Forbidden {
                action: capability.describe().to_string(),
            })
        }
    }

    #[must_use]
    pub fn can_see(&self, ticket: &Ticket) -> bool {
        self.can(Capability::ViewAllTickets) || ticket.is_owned_by(&self.user_id)
    }

    /// Owner or admin, and the ticket still accepts replies.
    #[must_use]
    pub fn can_reply(&self, ticket: &Ticket) -> bool {
        ticket.status.accepts_replies() && (self.is_admin() || ticket.is_owned_by(&self.user_id))
    }

    /// Like [`Self::can_reply`] but says why not.
    ///
    /// # Errors
    ///
    /// `TicketClosed` for a closed ticket, `NotOwner` for someone else's.
    pub fn check_reply(&self, ticket: &Ticket) -> Result<(), CoreError> {
        if !ticket.status.accepts_replies() {
            return Err(CoreError::TicketClosed {
                ticket_id: ticket.id.clone(),
            });
        }
        if !self.is_admin() && !ticket.is_owned_by(&self.user_id) {
            return Err(CoreError::NotOwner {
                ticket_id: ticket.id.clone(),
            });
        }
        Ok(())
    }
}

impl From<&User> for Viewer {
    fn from(user: &User) -> Self {
        Self::new(user.id.clone(), user.name.clone(), user.role)
    }
}
