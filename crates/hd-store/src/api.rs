//! The backend as seen by the stores.
//!
//! [`HelpdeskApi`] is implemented by [`HelpdeskClient`]; tests substitute an
//! in-memory backend.

use std::future::Future;

use hd_client::{ClientError, HelpdeskClient, ReplyUpload};
use hd_core::entities::{Reply, Ticket, TicketStats, User};
use hd_core::enums::TicketStatus;
use hd_core::forms::{NewTicketRequest, NewUser};
use hd_core::updates::{ProfileUpdate, TicketUpdate, UserUpdate};

pub type ApiResult<T> = Result<T, ClientError>;

pub trait HelpdeskApi: Send + Sync {
    fn list_tickets(&self) -> impl Future<Output = ApiResult<Vec<Ticket>>> + Send;
    fn get_ticket(&self, id: &str) -> impl Future<Output = ApiResult<Ticket>> + Send;
    fn create_ticket(
        &self,
        request: &NewTicketRequest,
    ) -> impl Future<Output = ApiResult<Option<Ticket>>> + Send;
    fn update_ticket(
        &self,
        id: &str,
        update: &TicketUpdate,
    ) -> impl Future<Output = ApiResult<Option<Ticket>>> + Send;
    fn close_ticket(&self, id: &str) -> impl Future<Output = ApiResult<()>> + Send;
    fn delete_ticket(&self, id: &str) -> impl Future<Output = ApiResult<()>> + Send;
    fn ticket_stats(&self) -> impl Future<Output = ApiResult<TicketStats>> + Send;
    fn tickets_by_status(
        &self,
        status: TicketStatus,
    ) -> impl Future<Output = ApiResult<Vec<Ticket>>> + Send;
    fn list_replies(&self, ticket_id: &str) -> impl Future<Output = ApiResult<Vec<Reply>>> + Send;
    fn post_reply(&self, upload: ReplyUpload)
    -> impl Future<Output = ApiResult<Option<Reply>>> + Send;
    fn download_report(&self) -> impl Future<Output = ApiResult<Vec<u8>>> + Send;

    fn list_users(&self) -> impl Future<Output = ApiResult<Vec<User>>> + Send;
    fn get_user(&self, id: &str) -> impl Future<Output = ApiResult<User>> + Send;
    fn create_user(&self, user: &NewUser) -> impl Future<Output = ApiResult<Option<User>>> + Send;
    fn update_user(
        &self,
        id: &str,
        update: &UserUpdate,
    ) -> impl Future<Output = ApiResult<Option<User>>> + Send;
    fn update_profile(
        &self,
        id: &str,
        update: &ProfileUpdate,
    ) -> impl Future<Output = ApiResult<Option<User>>> + Send;
    fn delete_user(&self, id: &str) -> impl Future<Output = ApiResult<()>> + Send;
}

impl HelpdeskApi for HelpdeskClient {
    async fn list_tickets(&self) -> ApiResult<Vec<Ticket>> {
        Self::list_tickets(self).await
    }

    async fn get_ticket(&self, id: &str) -> ApiResult<Ticket> {
        Self::get_ticket(self, id).await
    }

    async fn create_ticket(&self, request: &NewTicketRequest) -> ApiResult<Option<Ticket>> {
        Self::create_ticket(self, request).await
    }

    async fn update_ticket(&self, id: &str, update: &TicketUpdate) -> ApiResult<Option<Ticket>> {
        Self::update_ticket(self, id, update).await
    }

    async fn close_ticket(&self, id: &str) -> ApiResult<()> {
        Self::close_ticket(self, id).await
    }

    async fn delete_ticket(&self, id: &str) -> ApiResult<()> {
        Self::delete_ticket(self, id).await
    }

    async fn ticket_stats(&self) -> ApiResult<TicketStats> {
        Self::ticket_stats(self).await
    }

    async fn tickets_by_status(&self, status: TicketStatus) -> ApiResult<Vec<Ticket>> {
        Self::tickets_by_status(self, status).await
    }

    async fn list_replies(&self, ticket_id: &str) -> ApiResult<Vec<Reply>> {
        Self::list_replies(self, ticket_id).await
    }

    async fn post_reply(&self, upload: ReplyUpload) -> ApiResult<Option<Reply>> {
        Self::post_reply(self, upload).await
    }

    async fn download_report(&self) -> ApiResult<Vec<u8>> {
        Self::download_report(self).await
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        Self::list_users(self).await
    }

    async fn get_user(&self, id: &str) -> ApiResult<User> {
        Self::get_user(self, id).await
    }

    async fn create_user(&self, user: &NewUser) -> ApiResult<Option<User>> {
        Self::create_user(self, user).await
    }

    async fn update_user(&self, id: &str, update: &UserUpdate) -> ApiResult<Option<User>> {
        Self::update_user(self, id, update).await
    }

    async fn update_profile(&self, id: &str, update: &ProfileUpdate) -> ApiResult<Option<User>> {
        Self::update_profile(self, id, update).await
    }

    async fn delete_user(&self, id: &str) -> ApiResult<()> {
        Self::delete_user(self, id).await
    }
}
