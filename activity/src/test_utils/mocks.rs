//! Mock implementations of port traits
//!
//! In-memory event source that can be configured for testing and records
//! which usernames were requested.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::Event;
use crate::domain::ports::EventSource;
use crate::error::FetchError;

// ============================================================================
// In-Memory Event Source
// ============================================================================

#[derive(Default)]
pub struct MockEventSource {
    events: Arc<RwLock<Vec<Event>>>,
    failure: Arc<RwLock<Option<(u16, String)>>>,
    requests: Arc<RwLock<Vec<String>>>,
}

impl MockEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with events, returned in the given order
    pub fn with_events(self, events: Vec<Event>) -> Self {
        *self.events.write().unwrap() = events;
        self
    }

    /// Make every fetch fail with an API error
    pub fn failing_with(self, status: u16, message: &str) -> Self {
        *self.failure.write().unwrap() = Some((status, message.to_string()));
        self
    }

    /// Usernames requested so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl EventSource for MockEventSource {
    async fn fetch_user_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        self.requests.write().unwrap().push(username.to_string());

        if let Some((status, message)) = self.failure.read().unwrap().clone() {
            return Err(FetchError::Api { status, message });
        }

        Ok(self.events.read().unwrap().clone())
    }
}
