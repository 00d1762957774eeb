//! Activity service
//!
//! Turns a username into a printable activity summary.
//! Fetch, sort, group and render run strictly in sequence; the first
//! failure aborts the whole pipeline.

use std::sync::Arc;

use crate::domain::ports::EventSource;
use crate::error::AppError;
use crate::feed::{group_events, render_groups, sort_events, EventGroup};

/// Service for summarising a user's public activity
pub struct ActivityService<S>
where
    S: EventSource,
{
    source: Arc<S>,
}

impl<S> ActivityService<S>
where
    S: EventSource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetch a user's events and group them chronologically
    pub async fn user_activity(&self, username: &str) -> Result<Vec<EventGroup>, AppError> {
        let events = self.source.fetch_user_events(username).await?;
        let events = sort_events(events);
        let groups = group_events(events);

        tracing::debug!(username = %username, groups = groups.len(), "Grouped activity");
        Ok(groups)
    }

    /// Fetch, group and render a user's activity as summary lines
    pub async fn render_user_activity(&self, username: &str) -> Result<String, AppError> {
        let groups = self.user_activity(username).await?;
        Ok(render_groups(&groups))
    }
}
