//! Domain entities
//!
//! Activity records as the GitHub events API describes them.

pub mod event;

pub use event::{Actor, Commit, Event, EventKind, Payload, Repo};
