//! # hd-store
//!
//! Client-side state for the help-desk client.
//!
//! - [`TicketStore`]: ticket cache, role-aware listing, and every ticket
//!   mutation (create, update, close, delete, reply)
//! - [`UserDirectory`]: admin user management plus self-registration and
//!   profile updates
//! - [`HelpdeskApi`]: the backend seam, implemented by
//!   [`hd_client::HelpdeskClient`]
//! - [`Notify`]: success/failure notices for mutating operations

pub mod api;
mod error;
pub mod notice;
pub mod tickets;
pub mod users;

pub use api::HelpdeskApi;
pub use error::StoreError;
pub use notice::{LogNotify, Notice, NoticeLevel, Notify, RecordingNotify};
pub use tickets::{Confirmation, TicketStore};
pub use users::UserDirectory;
