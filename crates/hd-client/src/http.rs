//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks and body decoding so the endpoint modules
//! stay focused on request construction.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`ClientError::Unauthorized`]
/// - **Non-success status** → [`ClientError::Api`] with the status code and
///   the `message`/`error`/`detail` field of a JSON body, or the raw body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    Ok(resp)
}

fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(alias = "error", alias = "detail")]
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Decode a JSON body into `T`, reporting the target type on failure.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let text = resp.text().await?;
    decode(&text)
}

pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ClientError> {
    serde_json::from_str(text).map_err(|e| {
        ClientError::Parse(format!("{}: {e}", std::any::type_name::<T>()))
    })
}

/// A list endpoint body: either a bare array or `{"data": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

pub async fn read_list<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Vec<T>, ClientError> {
    let text = resp.text().await?;
    let body: ListBody<T> = decode(&text)?;
    Ok(match body {
        ListBody::Bare(items) | ListBody::Wrapped { data: items } => items,
    })
}

/// Entity echoed back by a mutation, if the body carries one.
///
/// Accepts an object wrapping the entity under `data` (preferred) or the
/// entity itself. Empty or unrelated bodies yield `None`; the caller then
/// re-fetches.
pub async fn read_echo<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Option<T>, ClientError> {
    let text = resp.text().await?;
    Ok(parse_echo(&text))
}

/// A single-entity body, bare or wrapped in `{"data": {...}}`. Unlike
/// [`read_echo`], decode failures are reported.
pub async fn read_single<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let text = resp.text().await?;
    parse_single(&text)
}

pub fn parse_single<T: DeserializeOwned>(text: &str) -> Result<T, ClientError> {
    let value: serde_json::Value = decode(text)?;
    let body = match value.get("data").filter(|data| data.is_object()) {
        Some(data) => data.clone(),
        None => value,
    };
    serde_json::from_value(body)
        .map_err(|e| ClientError::Parse(format!("{}: {e}", std::any::type_name::<T>())))
}

pub fn parse_echo<T: DeserializeOwned>(text: &str) -> Option<T> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    if let Some(data) = value.get("data").filter(|data| data.is_object()) {
        if let Ok(parsed) = serde_json::from_value(data.clone()) {
            return Some(parsed);
        }
    }
    serde_json::from_value(value).ok()
}
