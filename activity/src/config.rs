use std::env;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API (no trailing slash)
    pub api_base_url: String,
    /// Sent as `User-Agent`; GitHub rejects requests without one
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_values(
            env::var("GITHUB_API_URL").ok(),
            env::var("GITHUB_ACTIVITY_USER_AGENT").ok(),
        )
    }

    fn from_values(
        api_base_url: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_base_url = api_base_url.trim().trim_end_matches('/').to_string();
        if api_base_url.is_empty() {
            return Err(ConfigError::Empty {
                name: "GITHUB_API_URL",
            });
        }

        let user_agent = user_agent
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(default_user_agent);

        Ok(Self {
            api_base_url,
            user_agent,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("github-activity/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_values(None, None).unwrap();
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert!(config.user_agent.starts_with("github-activity/"));
    }

    #[test]
    fn trims_trailing_slash_from_api_url() {
        let config =
            Config::from_values(Some("https://ghe.example.com/api/v3/".to_string()), None).unwrap();
        assert_eq!(config.api_base_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn empty_api_url_is_rejected() {
        let err = Config::from_values(Some("  ".to_string()), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Empty {
                name: "GITHUB_API_URL"
            }
        ));
    }

    #[test]
    fn blank_user_agent_falls_back_to_default() {
        let config = Config::from_values(None, Some(String::new())).unwrap();
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn custom_user_agent_is_kept() {
        let config = Config::from_values(None, Some("my-tool/2.0".to_string())).unwrap();
        assert_eq!(config.user_agent, "my-tool/2.0");
    }
}
