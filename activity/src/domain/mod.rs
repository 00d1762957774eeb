//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: The event records decoded from the activity feed
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
