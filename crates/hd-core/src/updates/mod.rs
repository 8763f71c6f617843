//! Partial-update builders.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are serialized, so the request body carries the changed fields
//! only.

pub mod profile;
pub mod ticket;
pub mod user;

pub use profile::{ProfileUpdate, ProfileUpdateBuilder};
pub use ticket::{TicketUpdate, TicketUpdateBuilder};
pub use user::{UserUpdate, UserUpdateBuilder};
