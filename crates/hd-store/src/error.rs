use thiserror::Error;

use hd_client::ClientError;
use hd_core::errors::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Client(#[from] ClientError),

    /// A destructive action was requested without confirmation.
    #[error("{action} was not confirmed")]
    NotConfirmed { action: String },

    /// The server copy changed since it was last fetched.
    #[error("ticket {ticket_id} was modified on the server since it was loaded; refresh and retry")]
    Conflict { ticket_id: String },
}

impl StoreError {
    #[must_use]
    pub fn not_confirmed(action: &str) -> Self {
        Self::NotConfirmed {
            action: action.to_string(),
        }
    }
}
