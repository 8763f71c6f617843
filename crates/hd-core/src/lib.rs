//! # hd-core
//!
//! Domain model for the help-desk client.
//!
//! Contains:
//! - **Entities** (`entities`): users, tickets, replies, statistics, with
//!   lenient decoding of the backend's payloads
//! - **Enums** (`enums`): roles, ticket statuses and priorities
//! - **Permissions** (`permissions`): the single role/capability predicate
//!   and the acting [`permissions::Viewer`]
//! - **Filtering** (`filter`): visibility rule plus list filters
//! - **Forms** (`forms`): ticket and user drafts with validation
//! - **Updates** (`updates`): partial-update builders
//! - **Responses** (`responses`): composite views such as ticket detail
//! - **Errors** (`errors`): `CoreError` and `ValidationErrors`
//!
//! No I/O happens in this crate.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod forms;
pub mod permissions;
pub mod responses;
pub mod updates;
pub mod wire_serde;
