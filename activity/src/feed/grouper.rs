//! Grouping of consecutive events
//!
//! A group is a maximal run of neighbouring events with the same type and
//! the same actor. Groups never reorder events, so concatenating them gives
//! back the input sequence.

use crate::domain::entities::{Actor, Event, EventKind};

/// A non-empty run of events sharing type and actor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventGroup {
    events: Vec<Event>,
}

impl EventGroup {
    fn new(first: Event) -> Self {
        Self {
            events: vec![first],
        }
    }

    /// First event of the run; its type and actor are shared by the group
    pub fn first(&self) -> &Event {
        &self.events[0]
    }

    pub fn kind(&self) -> &EventKind {
        &self.first().kind
    }

    pub fn actor(&self) -> &Actor {
        &self.first().actor
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    fn accepts(&self, event: &Event) -> bool {
        self.events
            .last()
            .is_some_and(|last| last.same_run_as(event))
    }
}

/// Partition ordered events into maximal same-type, same-actor runs.
///
/// Empty input yields no groups.
pub fn group_events(events: Vec<Event>) -> Vec<EventGroup> {
    let mut groups: Vec<EventGroup> = Vec::new();

    for event in events {
        if let Some(current) = groups.last_mut() {
            if current.accepts(&event) {
                current.events.push(event);
                continue;
            }
        }
        groups.push(EventGroup::new(event));
    }

    groups
}
