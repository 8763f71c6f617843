use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not logged in, run `hd auth login`")]
    NotAuthenticated,

    #[error("login response has no token")]
    MissingToken,

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("session encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
