//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod activity_service;

pub use activity_service::ActivityService;
