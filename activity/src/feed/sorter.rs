//! Chronological ordering of events

use crate::domain::entities::Event;

/// Sort events oldest first.
///
/// The sort is stable: events sharing a timestamp keep their input order.
pub fn sort_events(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by_key(|event| event.created_at);
    events
}
