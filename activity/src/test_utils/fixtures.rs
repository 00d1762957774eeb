//! Test fixtures
//!
//! Factory functions for creating test events with sensible defaults.
//! Each fixture returns a plain `Event` that tests can customize further.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::{Actor, Commit, Event, EventKind, Payload, Repo};

/// Fixed reference instant so timestamps are reproducible
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Create an event at the reference instant
pub fn test_event(kind: &str, login: &str, repo: &str) -> Event {
    test_event_at(kind, login, repo, 0)
}

/// Create an event `offset_secs` after the reference instant
pub fn test_event_at(kind: &str, login: &str, repo: &str, offset_secs: i64) -> Event {
    Event {
        kind: EventKind::from(kind),
        actor: Actor {
            login: login.to_string(),
        },
        repo: Repo {
            name: repo.to_string(),
        },
        payload: Payload::default(),
        created_at: base_time() + Duration::seconds(offset_secs),
    }
}

/// Create an event whose payload carries `action`
pub fn test_event_with_action(kind: &str, login: &str, repo: &str, action: &str) -> Event {
    let mut event = test_event(kind, login, repo);
    event.payload.action = action.to_string();
    event
}

/// Create a push event with `commits` commits
pub fn test_push_event(login: &str, repo: &str, commits: usize) -> Event {
    let mut event = test_event("PushEvent", login, repo);
    event.payload.ref_name = "refs/heads/main".to_string();
    event.payload.commits = (0..commits)
        .map(|i| Commit {
            sha: format!("{:040x}", i),
        })
        .collect();
    event
}
