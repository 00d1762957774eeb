//! Event source port trait
//!
//! Defines where a user's public events come from.

use async_trait::async_trait;

use crate::domain::entities::Event;
use crate::error::FetchError;

/// Source of a user's public activity
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch one page of public events for `username`, in the order the
    /// source returns them (not necessarily chronological)
    async fn fetch_user_events(&self, username: &str) -> Result<Vec<Event>, FetchError>;
}
