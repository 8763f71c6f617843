pub mod auth;
pub mod profile;
pub mod ticket;
pub mod user;

pub use auth::AuthCommands;
pub use profile::ProfileCommands;
pub use ticket::TicketCommands;
pub use user::UserCommands;
