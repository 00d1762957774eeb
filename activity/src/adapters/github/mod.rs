//! GitHub adapter
//!
//! Implementation of the event source backed by the GitHub REST API.

pub mod client;

pub use client::GitHubClientImpl;
