//! Entities exchanged with the help-desk backend.
//!
//! Field names on the wire follow the backend (`titulo`, `setor`, ...);
//! the Rust side uses English names. Each entity decodes through a private
//! lenient record that accepts the aliases the backend has used over time.

mod reply;
mod stats;
mod ticket;
mod user;

pub use reply::{Attachment, Reply};
pub use stats::TicketStats;
pub use ticket::Ticket;
pub use user::User;
