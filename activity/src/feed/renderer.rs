//! Feed renderer
//!
//! Renders grouped events to plain-text summary lines.

use crate::domain::entities::{Event, EventKind};
use crate::feed::EventGroup;

/// Printed instead of the summary when the user has no events at all
pub const NO_ACTIVITY_MESSAGE: &str = "Specified user has no public activity";

/// How a group of a given type turns into lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderMode {
    /// One line for the whole group
    Aggregate,
    /// One line per event in the group
    PerEvent,
}

fn render_mode(kind: &EventKind) -> Option<RenderMode> {
    match kind {
        EventKind::CommitComment | EventKind::Gollum | EventKind::Push => {
            Some(RenderMode::Aggregate)
        }
        EventKind::Create
        | EventKind::Delete
        | EventKind::Fork
        | EventKind::IssueComment
        | EventKind::Issue
        | EventKind::Member
        | EventKind::Public
        | EventKind::PullRequest
        | EventKind::PullRequestReview
        | EventKind::PullRequestReviewComment
        | EventKind::PullRequestReviewThread
        | EventKind::Release
        | EventKind::Sponsorship
        | EventKind::Watch => Some(RenderMode::PerEvent),
        EventKind::Other(_) => None,
    }
}

/// Render groups to summary lines joined with `\n` (no trailing newline)
pub fn render_groups(groups: &[EventGroup]) -> String {
    if groups.is_empty() {
        return NO_ACTIVITY_MESSAGE.to_string();
    }

    let mut lines = Vec::new();
    for group in groups {
        render_group(group, &mut lines);
    }

    lines.join("\n")
}

fn render_group(group: &EventGroup, lines: &mut Vec<String>) {
    match render_mode(group.kind()) {
        Some(RenderMode::Aggregate) => lines.extend(render_aggregate(group)),
        Some(RenderMode::PerEvent) => {
            lines.extend(group.events().iter().filter_map(render_event));
        }
        None => {
            tracing::debug!(
                event_type = %group.kind(),
                count = group.len(),
                "Skipping unsupported event type"
            );
        }
    }
}

fn render_aggregate(group: &EventGroup) -> Option<String> {
    let first = group.first();
    let login = &first.actor.login;
    let repo = &first.repo.name;
    let count = group.len();

    match first.kind {
        EventKind::CommitComment => Some(format!(
            "- {} commented commit {} times ({})",
            login, count, repo
        )),
        EventKind::Gollum => Some(format!("- {} updated wiki {} times ({})", login, count, repo)),
        // Only the first push of the run is counted
        EventKind::Push => Some(format!(
            "- {} pushed {} commits ({})",
            login,
            first.payload.commits.len(),
            repo
        )),
        _ => None,
    }
}

fn render_event(event: &Event) -> Option<String> {
    let login = &event.actor.login;
    let repo = &event.repo.name;
    let action = &event.payload.action;
    let ref_type = &event.payload.ref_type;

    let line = match event.kind {
        EventKind::Create => format!("- {} created a {} ({})", login, ref_type, repo),
        EventKind::Delete => format!("- {} deleted a {} ({})", login, ref_type, repo),
        EventKind::Fork => format!("- {} forked {}", login, repo),
        EventKind::IssueComment => {
            format!("- {} {} comment on some issue({})", login, action, repo)
        }
        EventKind::Issue => format!("- {} {} an issue ({})", login, action, repo),
        EventKind::Member => format!("- {} {} collaboration ({})", login, action, repo),
        EventKind::Public | EventKind::Release => format!("- {} {} {}", login, action, repo),
        EventKind::PullRequest => format!("- {} {} pull request ({})", login, action, repo),
        EventKind::PullRequestReview => {
            format!("- {} {} pull request review ({})", login, action, repo)
        }
        EventKind::PullRequestReviewComment => format!(
            "- {} {} pull request review comment ({})",
            login, action, repo
        ),
        EventKind::PullRequestReviewThread => format!(
            "- {} {} comment thread on pull request ({})",
            login, action, repo
        ),
        EventKind::Sponsorship => format!(
            "- {} {} sponsorship listing on {}",
            login, action, repo
        ),
        EventKind::Watch => format!("- {} starred {}", login, repo),
        _ => return None,
    };

    Some(line)
}
