//! User directory endpoints.

use hd_core::entities::User;
use hd_core::forms::NewUser;
use hd_core::updates::{ProfileUpdate, UserUpdate};
use reqwest::Method;

use crate::{
    ClientError, HelpdeskClient,
    http::{read_echo, read_list},
    segment,
};

impl HelpdeskClient {
    /// `GET /api/users`.
    ///
    /// # Errors
    ///
    /// Transport, status, or parse errors.
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let resp = self.send(self.request(Method::GET, "users")).await?;
        read_list(resp).await
    }

    /// `GET /api/users/{id}`.
    ///
    /// # Errors
    ///
    /// Transport, status, or parse errors.
    pub async fn get_user(&self, id: &str) -> Result<User, ClientError> {
        let path = format!("users/{}", segment(id));
        let resp = self.send(self.request(Method::GET, &path)).await?;
        let user: Option<User> = read_echo(resp).await?;
        user.ok_or_else(|| ClientError::Parse(format!("user {id}: unexpected body")))
    }

    /// `POST /api/users`. Used both by admins and for self-registration
    /// (without a token).
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn create_user(&self, user: &NewUser) -> Result<Option<User>, ClientError> {
        let resp = self
            .send(self.request(Method::POST, "users").json(user))
            .await?;
        read_echo(resp).await
    }

    /// `PUT /api/users/{id}` with admin-side fields.
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn update_user(
        &self,
        id: &str,
        update: &UserUpdate,
    ) -> Result<Option<User>, ClientError> {
        let path = format!("users/{}", segment(id));
        let resp = self
            .send(self.request(Method::PUT, &path).json(update))
            .await?;
        read_echo(resp).await
    }

    /// `PUT /api/users/{id}` with self-service profile fields.
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn update_profile(
        &self,
        id: &str,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, ClientError> {
        let path = format!("users/{}", segment(id));
        let resp = self
            .send(self.request(Method::PUT, &path).json(update))
            .await?;
        read_echo(resp).await
    }

    /// `DELETE /api/users/{id}`.
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn delete_user(&self, id: &str) -> Result<(), ClientError> {
        let path = format!("users/{}", segment(id));
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}
