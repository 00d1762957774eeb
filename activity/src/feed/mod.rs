//! Feed module
//!
//! Ordering, grouping and plain-text rendering of activity events.

pub mod grouper;
pub mod renderer;
pub mod sorter;

pub use grouper::{group_events, EventGroup};
pub use renderer::{render_groups, NO_ACTIVITY_MESSAGE};
pub use sorter::sort_events;
