//! GitHub activity summaries
//!
//! Fetches a user's public events, orders them, groups consecutive runs and
//! renders one plain-text line per group or event.
//! Uses hexagonal (ports & adapters) architecture so the pipeline can run
//! against any event source.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;


pub use adapters::GitHubClientImpl;
pub use app::ActivityService;
pub use config::Config;
pub use error::{AppError, FetchError};
