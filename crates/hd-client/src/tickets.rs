//! Ticket endpoints.

use hd_core::entities::{Ticket, TicketStats};
use hd_core::enums::TicketStatus;
use hd_core::forms::NewTicketRequest;
use hd_core::updates::TicketUpdate;
use reqwest::Method;

use crate::{
    ClientError, HelpdeskClient,
    http::{read_echo, read_json, read_list, read_single},
    segment,
};

impl HelpdeskClient {
    /// `GET /api/called`.
    ///
    /// # Errors
    ///
    /// Transport, status, or parse errors.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, ClientError> {
        let resp = self.send(self.request(Method::GET, "called")).await?;
        read_list(resp).await
    }

    /// `GET /api/called/{id}`.
    ///
    /// # Errors
    ///
    /// Transport, status, or parse errors.
    pub async fn get_ticket(&self, id: &str) -> Result<Ticket, ClientError> {
        let path = format!("called/{}", segment(id));
        let resp = self.send(self.request(Method::GET, &path)).await?;
        read_single(resp).await.map_err(|err| match err {
            ClientError::Parse(cause) => ClientError::Parse(format!("ticket {id}: {cause}")),
            other => other,
        })
    }

    /// `POST /api/called/create`. Returns the stored ticket when the backend
    /// echoes it.
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn create_ticket(
        &self,
        request: &NewTicketRequest,
    ) -> Result<Option<Ticket>, ClientError> {
        let resp = self
            .send(self.request(Method::POST, "called/create").json(request))
            .await?;
        read_echo(resp).await
    }

    /// `PUT /api/called/{id}`.
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn update_ticket(
        &self,
        id: &str,
        update: &TicketUpdate,
    ) -> Result<Option<Ticket>, ClientError> {
        let path = format!("called/{}", segment(id));
        let resp = self
            .send(self.request(Method::PUT, &path).json(update))
            .await?;
        read_echo(resp).await
    }

    /// `POST /api/called/{id}/close`.
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn close_ticket(&self, id: &str) -> Result<(), ClientError> {
        let path = format!("called/{}/close", segment(id));
        self.send(self.request(Method::POST, &path)).await?;
        Ok(())
    }

    /// `DELETE /api/called/{id}`.
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn delete_ticket(&self, id: &str) -> Result<(), ClientError> {
        let path = format!("called/{}", segment(id));
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    /// `GET /api/called/stats`.
    ///
    /// # Errors
    ///
    /// Transport, status, or parse errors.
    pub async fn ticket_stats(&self) -> Result<TicketStats, ClientError> {
        let resp = self.send(self.request(Method::GET, "called/stats")).await?;
        read_json(resp).await
    }

    /// `GET /api/{status}`: tickets in one status, as filtered by the
    /// backend.
    ///
    /// # Errors
    ///
    /// Transport, status, or parse errors.
    pub async fn tickets_by_status(&self, status: TicketStatus) -> Result<Vec<Ticket>, ClientError> {
        let resp = self
            .send(self.request(Method::GET, status.path_segment()))
            .await?;
        read_list(resp).await
    }
}
