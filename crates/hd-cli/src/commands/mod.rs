pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod profile;
pub mod report;
pub mod shared;
pub mod ticket;
pub mod user;
