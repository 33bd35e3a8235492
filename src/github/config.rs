use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// GitHub API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Default username queried when a call does not name one
    pub username: Option<String>,

    /// Root of the REST API, without a trailing slash
    pub api_base_url: String,

    /// Value sent as the User-Agent header (GitHub rejects requests without one)
    pub user_agent: String,
}

impl GitHubConfig {
    /// Set the default username; empty strings count as unset
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        let username = username.into();
        self.username = (!username.trim().is_empty()).then_some(username);
        self
    }

    /// Point the client at a different API root (mock servers, GitHub Enterprise)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base API URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: format!("folio/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
