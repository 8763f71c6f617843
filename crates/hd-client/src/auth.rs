//! Login and logout.

use serde::Serialize;

use hd_core::responses::LoginResponse;
use reqwest::Method;

use crate::{ClientError, HelpdeskClient, http::read_json};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl HelpdeskClient {
    /// `POST /api/login`. Does not store the returned token; the caller
    /// decides what to do with the session.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for bad credentials, `Api`/`Http` for other failures,
    /// `Parse` if the body has no user or token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let body = LoginRequest { email, password };
        let resp = self
            .send(self.request(Method::POST, "login").json(&body))
            .await?;
        read_json(resp).await
    }

    /// `POST /api/logout`.
    ///
    /// # Errors
    ///
    /// Any transport or status error. Callers treat this as best effort.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.send(self.request(Method::POST, "logout")).await?;
        Ok(())
    }
}
