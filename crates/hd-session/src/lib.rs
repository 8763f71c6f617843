//! # hd-session
//!
//! Persisted login session for the help-desk client.
//!
//! - [`SessionStore`]: login, logout, profile merge and restore-on-startup
//! - [`KeyValueStore`]: the durable storage seam, with a file-backed and an
//!   in-memory implementation

mod error;
pub mod session;
pub mod storage;

pub use error::SessionError;
pub use session::{AuthState, LastUser, SessionStore};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
