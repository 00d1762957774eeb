//! Event domain entity
//!
//! One record from a user's public timeline, as returned by
//! `GET /users/{username}/events`. Only the fields the summary needs are
//! decoded; everything else in the response is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Helper to deserialize null as default (empty string, empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// The `type` tag of an event
///
/// Unrecognised tags are kept verbatim in `Other` so they still take part
/// in grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum EventKind {
    CommitComment,
    Create,
    Delete,
    Fork,
    Gollum,
    IssueComment,
    Issue,
    Member,
    Public,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    PullRequestReviewThread,
    Push,
    Release,
    Sponsorship,
    Watch,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::CommitComment => "CommitCommentEvent",
            EventKind::Create => "CreateEvent",
            EventKind::Delete => "DeleteEvent",
            EventKind::Fork => "ForkEvent",
            EventKind::Gollum => "GollumEvent",
            EventKind::IssueComment => "IssueCommentEvent",
            EventKind::Issue => "IssueEvent",
            EventKind::Member => "MemberEvent",
            EventKind::Public => "PublicEvent",
            EventKind::PullRequest => "PullRequestEvent",
            EventKind::PullRequestReview => "PullRequestReviewEvent",
            EventKind::PullRequestReviewComment => "PullRequestReviewCommentEvent",
            EventKind::PullRequestReviewThread => "PullRequestReviewThreadEvent",
            EventKind::Push => "PushEvent",
            EventKind::Release => "ReleaseEvent",
            EventKind::Sponsorship => "SponsorshipEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::Other(tag) => tag,
        }
    }
}

impl From<&str> for EventKind {
    fn from(tag: &str) -> Self {
        match tag {
            "CommitCommentEvent" => EventKind::CommitComment,
            "CreateEvent" => EventKind::Create,
            "DeleteEvent" => EventKind::Delete,
            "ForkEvent" => EventKind::Fork,
            "GollumEvent" => EventKind::Gollum,
            "IssueCommentEvent" => EventKind::IssueComment,
            "IssueEvent" => EventKind::Issue,
            "MemberEvent" => EventKind::Member,
            "PublicEvent" => EventKind::Public,
            "PullRequestEvent" => EventKind::PullRequest,
            "PullRequestReviewEvent" => EventKind::PullRequestReview,
            "PullRequestReviewCommentEvent" => EventKind::PullRequestReviewComment,
            "PullRequestReviewThreadEvent" => EventKind::PullRequestReviewThread,
            "PushEvent" => EventKind::Push,
            "ReleaseEvent" => EventKind::Release,
            "SponsorshipEvent" => EventKind::Sponsorship,
            "WatchEvent" => EventKind::Watch,
            other => EventKind::Other(other.to_string()),
        }
    }
}

impl From<String> for EventKind {
    fn from(tag: String) -> Self {
        match EventKind::from(tag.as_str()) {
            EventKind::Other(_) => EventKind::Other(tag),
            known => known,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who performed the event
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Actor {
    pub login: String,
}

/// Repository the event happened in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repo {
    /// `owner/name`
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Commit {
    pub sha: String,
}

/// Type-specific details. Each event type fills in a different subset,
/// so every field tolerates being absent or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Payload {
    #[serde(rename = "ref", default, deserialize_with = "deserialize_null_default")]
    pub ref_name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub ref_type: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub commits: Vec<Commit>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub action: String,
}

/// A single public activity record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub actor: Actor,
    pub repo: Repo,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub payload: Payload,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Two events belong to the same run when type and actor match
    pub fn same_run_as(&self, other: &Event) -> bool {
        self.kind == other.kind && self.actor.login == other.actor.login
    }
}
