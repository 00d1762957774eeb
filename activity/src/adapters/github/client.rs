//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::Event;
use crate::domain::ports::EventSource;
use crate::error::FetchError;

/// Implementation of the event source over the GitHub REST API
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
}

impl GitHubClientImpl {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        // Invalid header characters fall back to the crate name
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("github-activity")),
        );

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn events_url(&self, username: &str) -> String {
        format!("{}/users/{}/events", self.base_url, encode(username))
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Vec<Event>, FetchError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "GitHub API returned an error");
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        decode_events(&body)
    }
}

/// Decode a response body as a JSON array of events
pub fn decode_events(body: &str) -> Result<Vec<Event>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Deserialization(e.to_string()))
}

#[async_trait]
impl EventSource for GitHubClientImpl {
    async fn fetch_user_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        if username.trim().is_empty() {
            return Err(FetchError::InvalidUsername(username.to_string()));
        }

        let url = self.events_url(username);
        tracing::debug!(%url, "Fetching public events");

        let response = self.http.get(&url).send().await?;
        let events = self.handle_response(response).await?;

        tracing::debug!(username = %username, count = events.len(), "Decoded events");
        Ok(events)
    }
}
