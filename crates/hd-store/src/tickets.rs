//! Client-side ticket cache synchronised with the backend.
//!
//! Every mutation goes to the server first; the cache is then patched with
//! the server's echo, or with a fresh fetch when the endpoint returns no
//! ticket. Nothing is retried.

use std::sync::Arc;

use chrono::Utc;

use hd_client::{AttachmentUpload, ClientError, ReplyUpload};
use hd_core::entities::{Reply, Ticket, TicketStats};
use hd_core::enums::TicketStatus;
use hd_core::errors::CoreError;
use hd_core::filter::{TicketFilter, list_for, most_recent, visible_to};
use hd_core::forms::{NewTicketRequest, TicketDraft, validate_reply};
use hd_core::permissions::{Capability, Viewer};
use hd_core::responses::{Dashboard, TicketDetail};
use hd_core::updates::TicketUpdate;

use crate::api::HelpdeskApi;
use crate::error::StoreError;
use crate::notice::{Notify, announce};

/// Explicit consent for destructive actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    NotConfirmed,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::NotConfirmed
        }
    }
}

pub struct TicketStore<A> {
    api: A,
    notify: Arc<dyn Notify>,
    tickets: Vec<Ticket>,
    loaded: bool,
}

impl<A: HelpdeskApi> TicketStore<A> {
    pub fn new(api: A, notify: Arc<dyn Notify>) -> Self {
        Self {
            api,
            notify,
            tickets: Vec::new(),
            loaded: false,
        }
    }

    /// The backend this store talks to.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Cached tickets in server order, unfiltered.
    #[must_use]
    pub fn cached(&self) -> &[Ticket] {
        &self.tickets
    }

    #[must_use]
    pub fn cached_ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Drop everything; used on logout.
    pub fn clear(&mut self) {
        self.tickets.clear();
        self.loaded = false;
    }

    /// Replace the cache with the server's list.
    ///
    /// # Errors
    ///
    /// Propagates the client error.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        self.tickets = self.api.list_tickets().await?;
        self.loaded = true;
        tracing::debug!(count = self.tickets.len(), "ticket cache refreshed");
        Ok(())
    }

    async fn ensure_loaded(&mut self) -> Result<(), StoreError> {
        if self.loaded {
            Ok(())
        } else {
            self.refresh().await
        }
    }

    /// Tickets the viewer may see, narrowed by `filter`, in server order.
    ///
    /// # Errors
    ///
    /// Propagates the client error of the initial load.
    pub async fn list(
        &mut self,
        viewer: &Viewer,
        filter: &TicketFilter,
    ) -> Result<Vec<Ticket>, StoreError> {
        self.ensure_loaded().await?;
        Ok(list_for(viewer, &self.tickets, filter)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Fetch one ticket, refresh its cache entry, and check visibility.
    ///
    /// # Errors
    ///
    /// `NotOwner` for someone else's ticket, or the client error.
    pub async fn get(&mut self, viewer: &Viewer, id: &str) -> Result<Ticket, StoreError> {
        let ticket = self.api.get_ticket(id).await?;
        if !viewer.can_see(&ticket) {
            return Err(CoreError::NotOwner {
                ticket_id: id.to_string(),
            }
            .into());
        }
        self.upsert(ticket.clone());
        Ok(ticket)
    }

    /// Ticket plus its reply thread, fetched concurrently. A failing thread
    /// fetch degrades to the replies embedded in the ticket, if any.
    ///
    /// # Errors
    ///
    /// `NotOwner` for someone else's ticket, or the ticket fetch error.
    pub async fn detail(&mut self, viewer: &Viewer, id: &str) -> Result<TicketDetail, StoreError> {
        let (ticket, replies) = tokio::join!(self.api.get_ticket(id), self.api.list_replies(id));
        let ticket = ticket?;
        if !viewer.can_see(&ticket) {
            return Err(CoreError::NotOwner {
                ticket_id: id.to_string(),
            }
            .into());
        }
        let replies = match replies {
            Ok(replies) => replies,
            Err(error) => {
                tracing::warn!(ticket_id = id, %error, "reply thread unavailable");
                ticket.replies.clone()
            }
        };
        self.upsert(ticket.clone());
        Ok(TicketDetail {
            can_reply: viewer.can_reply(&ticket),
            ticket,
            replies,
        })
    }

    /// Validate and submit a new ticket owned by the viewer.
    ///
    /// # Errors
    ///
    /// `Validation` before any request, or the client error.
    pub async fn create(&mut self, viewer: &Viewer, draft: &TicketDraft) -> Result<Ticket, StoreError> {
        draft.validate()?;
        let request = draft.to_request(&viewer.user_id, Utc::now().date_naive());
        let result = self.create_inner(viewer, &request).await;
        self.announce(result, |t| format!("Ticket {} created", t.id))
    }

    async fn create_inner(
        &mut self,
        viewer: &Viewer,
        request: &NewTicketRequest,
    ) -> Result<Ticket, StoreError> {
        if let Some(ticket) = self.api.create_ticket(request).await? {
            self.upsert(ticket.clone());
            return Ok(ticket);
        }
        // No echo: reload and pick the newest matching ticket of the viewer.
        self.refresh().await?;
        self.tickets
            .iter()
            .rev()
            .find(|t| t.is_owned_by(&viewer.user_id) && t.title == request.title)
            .cloned()
            .ok_or_else(|| {
                ClientError::Parse("created ticket not found in listing".into()).into()
            })
    }

    /// Admin edit of status, priority, title, description or subject.
    ///
    /// Fails with `Conflict` when the cached copy is older than the server's.
    ///
    /// # Errors
    ///
    /// `Forbidden`, `Validation`, `Conflict`, or the client error.
    pub async fn update(
        &mut self,
        viewer: &Viewer,
        id: &str,
        update: &TicketUpdate,
    ) -> Result<Ticket, StoreError> {
        viewer.require(Capability::EditTicket)?;
        update.validate()?;
        let result = self.update_inner(id, update).await;
        self.announce(result, |t| format!("Ticket {} updated", t.id))
    }

    async fn update_inner(&mut self, id: &str, update: &TicketUpdate) -> Result<Ticket, StoreError> {
        if let Some(cached) = self.cached_ticket(id).map(|t| t.updated_at) {
            let server = self.api.get_ticket(id).await?;
            if let (Some(cached), Some(current)) = (cached, server.updated_at) {
                if cached != current {
                    tracing::warn!(ticket_id = id, %cached, %current, "stale ticket");
                    return Err(StoreError::Conflict {
                        ticket_id: id.to_string(),
                    });
                }
            }
        }
        let ticket = match self.api.update_ticket(id, update).await? {
            Some(ticket) => ticket,
            None => self.api.get_ticket(id).await?,
        };
        self.upsert(ticket.clone());
        Ok(ticket)
    }

    /// Admin close, then re-fetch.
    ///
    /// # Errors
    ///
    /// `Forbidden`, or the client error.
    pub async fn close(&mut self, viewer: &Viewer, id: &str) -> Result<Ticket, StoreError> {
        viewer.require(Capability::CloseTicket)?;
        let result = self.close_inner(id).await;
        self.announce(result, |t| format!("Ticket {} closed", t.id))
    }

    async fn close_inner(&mut self, id: &str) -> Result<Ticket, StoreError> {
        self.api.close_ticket(id).await?;
        let ticket = self.api.get_ticket(id).await?;
        self.upsert(ticket.clone());
        Ok(ticket)
    }

    /// Admin delete. Requires explicit confirmation.
    ///
    /// # Errors
    ///
    /// `Forbidden`, `NotConfirmed`, or the client error.
    pub async fn delete(
        &mut self,
        viewer: &Viewer,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<(), StoreError> {
        viewer.require(Capability::DeleteTicket)?;
        if confirmation != Confirmation::Confirmed {
            return Err(StoreError::not_confirmed("ticket deletion"));
        }
        let result = self.api.delete_ticket(id).await.map_err(StoreError::from);
        if result.is_ok() {
            self.tickets.retain(|t| t.id != id);
        }
        self.announce(result, |_| format!("Ticket {id} deleted"))
    }

    /// Append a reply to an open ticket the viewer owns (or any, for admins).
    ///
    /// Uses the cached copy for the permission check when there is one, so a
    /// reply to a known-closed ticket never reaches the network.
    ///
    /// # Errors
    ///
    /// `Validation`, `TicketClosed`, `NotOwner`, or the client error.
    pub async fn reply(
        &mut self,
        viewer: &Viewer,
        ticket_id: &str,
        message: &str,
        attachments: Vec<AttachmentUpload>,
    ) -> Result<Reply, StoreError> {
        validate_reply(message)?;
        let ticket = match self.cached_ticket(ticket_id) {
            Some(ticket) => ticket.clone(),
            None => self.get(viewer, ticket_id).await?,
        };
        viewer.check_reply(&ticket)?;

        let upload = ReplyUpload {
            ticket_id: ticket_id.to_string(),
            message: message.trim().to_string(),
            attachments,
        };
        let result = self
            .api
            .post_reply(upload)
            .await
            .map(|echo| echo.unwrap_or_else(|| local_reply(viewer, ticket_id, message)))
            .map_err(StoreError::from);
        if let Ok(reply) = &result {
            if let Some(cached) = self.tickets.iter_mut().find(|t| t.id == ticket_id) {
                cached.replies.push(reply.clone());
            }
        }
        self.announce(result, |_| format!("Reply added to ticket {ticket_id}"))
    }

    /// Tickets in one status as listed by the backend, after the visibility
    /// rule. Each returned ticket also refreshes its cache entry.
    ///
    /// # Errors
    ///
    /// Propagates the client error.
    pub async fn by_status(
        &mut self,
        viewer: &Viewer,
        status: TicketStatus,
    ) -> Result<Vec<Ticket>, StoreError> {
        let tickets = self.api.tickets_by_status(status).await?;
        let visible: Vec<Ticket> = visible_to(viewer, &tickets).into_iter().cloned().collect();
        for ticket in &visible {
            self.upsert(ticket.clone());
        }
        Ok(visible)
    }

    /// Admin dashboard. Counters come from the stats endpoint, or are derived
    /// from the ticket list when it fails.
    ///
    /// # Errors
    ///
    /// `Forbidden`, or the ticket list error.
    pub async fn dashboard(&mut self, viewer: &Viewer, recent: usize) -> Result<Dashboard, StoreError> {
        viewer.require(Capability::ViewDashboard)?;
        let (stats, listing) = tokio::join!(self.api.ticket_stats(), self.api.list_tickets());
        self.tickets = listing?;
        self.loaded = true;
        let (stats, stats_derived) = match stats {
            Ok(stats) => (stats, false),
            Err(error) => {
                tracing::warn!(%error, "stats endpoint failed; deriving counters locally");
                (TicketStats::from_tickets(&self.tickets), true)
            }
        };
        Ok(Dashboard {
            stats,
            stats_derived,
            recent: most_recent(&self.tickets, recent),
        })
    }

    /// Raw report bytes.
    ///
    /// # Errors
    ///
    /// `Forbidden`, or the client error.
    pub async fn report(&self, viewer: &Viewer) -> Result<Vec<u8>, StoreError> {
        viewer.require(Capability::ExportReport)?;
        Ok(self.api.download_report().await?)
    }

    fn upsert(&mut self, ticket: Ticket) {
        match self.tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(slot) => *slot = ticket,
            None => self.tickets.push(ticket),
        }
    }

    fn announce<T>(
        &self,
        result: Result<T, StoreError>,
        success: impl FnOnce(&T) -> String,
    ) -> Result<T, StoreError> {
        announce(self.notify.as_ref(), result, success)
    }
}

fn local_reply(viewer: &Viewer, ticket_id: &str, message: &str) -> Reply {
    Reply {
        id: None,
        ticket_id: Some(ticket_id.to_string()),
        author_id: viewer.user_id.clone(),
        author_name: Some(viewer.name.clone()).filter(|n| !n.is_empty()),
        message: message.trim().to_string(),
        created_at: Some(Utc::now()),
        attachments: Vec::new(),
    }
}
