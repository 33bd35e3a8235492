use crate::error::{Error, Result};
use crate::github::config::{GitHubConfig, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub github: GitHubConfig,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let username = std::env::var("GITHUB_USERNAME")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let api_base_url = std::env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let user_agent = std::env::var("FOLIO_USER_AGENT")
            .unwrap_or_else(|_| format!("folio/{}", env!("CARGO_PKG_VERSION")));

        if user_agent.trim().is_empty() {
            return Err(Error::Config("Invalid FOLIO_USER_AGENT value".to_string()));
        }

        Ok(Settings {
            github: GitHubConfig {
                username,
                api_base_url,
                user_agent,
            },
        })
    }

    /// Override the default username (e.g. from a command-line flag)
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.github = self.github.with_username(username);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.github.api_base_url)?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "GITHUB_API_URL must be http or https, got {}",
                url.scheme()
            )));
        }

        Ok(())
    }
}
