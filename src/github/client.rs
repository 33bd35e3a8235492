use crate::config::Settings;
use crate::github::{
    config::GitHubConfig,
    derived::{self, CONTRIBUTION_WINDOW},
    models::{
        Commit, Event, Gist, LanguageBreakdown, Profile, RateLimit, RateLimitResponse, Repository,
        SearchResults,
    },
    options::{CommitListOptions, Direction, EventListOptions, RepoListOptions, RepoSort, SearchOptions},
    rate_limiter::RateLimitTracker,
};
use crate::{Error, Result};
use chrono::NaiveDate;
use reqwest::{header, Client, RequestBuilder, Response};
use std::collections::BTreeMap;
use tracing::{debug, error};
use urlencoding::encode;

const JSON_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";

/// Read-only GitHub API client
///
/// Every completed exchange, successful or not, refreshes the rate-limit
/// snapshot returned by [`GitHubClient::rate_limit`]. Clones share the
/// connection pool and the snapshot.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
    rate_limiter: RateLimitTracker,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Config(format!("Invalid user agent: {e}")))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(JSON_MEDIA_TYPE),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            rate_limiter: RateLimitTracker::new(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.github.clone())
    }

    /// Username used when a call does not name one
    pub fn default_username(&self) -> Option<&str> {
        self.config.username.as_deref()
    }

    /// Most recently observed quota, `None` before the first response
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limiter.get()
    }

    /// Query the current quota from `/rate_limit`
    pub async fn check_rate_limit(&self) -> Result<RateLimit> {
        let response: RateLimitResponse = self.fetch_json(self.request("/rate_limit")).await?;
        Ok(response.rate)
    }

    /// Get a user's public profile
    pub async fn get_user(&self, username: Option<&str>) -> Result<Profile> {
        let user = self.resolve_username(username)?;
        let path = format!("/users/{}", encode(user));
        self.fetch_json(self.request(&path)).await
    }

    /// List a user's repositories
    pub async fn get_user_repos(
        &self,
        username: Option<&str>,
        options: &RepoListOptions,
    ) -> Result<Vec<Repository>> {
        let user = self.resolve_username(username)?;
        let path = format!("/users/{}/repos", encode(user));
        self.fetch_json(self.request(&path).query(options)).await
    }

    /// Get repository information
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let path = format!("/repos/{}/{}", encode(owner), encode(repo));
        self.fetch_json(self.request(&path)).await
    }

    /// Bytes of code per language
    pub async fn get_repository_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<LanguageBreakdown> {
        let path = format!("/repos/{}/{}/languages", encode(owner), encode(repo));
        self.fetch_json(self.request(&path)).await
    }

    /// List commits, most recent first
    pub async fn get_repository_commits(
        &self,
        owner: &str,
        repo: &str,
        options: &CommitListOptions,
    ) -> Result<Vec<Commit>> {
        let path = format!("/repos/{}/{}/commits", encode(owner), encode(repo));
        self.fetch_json(self.request(&path).query(options)).await
    }

    /// Raw README text. A repository without a README fails with a 404.
    pub async fn get_repository_readme(&self, owner: &str, repo: &str) -> Result<String> {
        let path = format!("/repos/{}/{}/readme", encode(owner), encode(repo));
        let request = self
            .request(&path)
            .header(header::ACCEPT, RAW_MEDIA_TYPE);

        let response = self.send(request).await?;
        response.text().await.map_err(|e| {
            error!("Failed to read README body: {}", e);
            Error::Request(e)
        })
    }

    /// List a user's public gists
    pub async fn get_user_gists(&self, username: Option<&str>) -> Result<Vec<Gist>> {
        let user = self.resolve_username(username)?;
        let path = format!("/users/{}/gists", encode(user));
        self.fetch_json(self.request(&path)).await
    }

    /// List a user's public events, most recent first
    pub async fn get_user_events(
        &self,
        username: Option<&str>,
        options: &EventListOptions,
    ) -> Result<Vec<Event>> {
        let user = self.resolve_username(username)?;
        let path = format!("/users/{}/events", encode(user));
        self.fetch_json(self.request(&path).query(options)).await
    }

    /// Search public repositories
    pub async fn search_repositories(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResults> {
        let options = options.normalized();
        let request = self
            .request("/search/repositories")
            .query(&[("q", query)])
            .query(&options);

        let mut results: SearchResults = self.fetch_json(request).await?;
        results.items.truncate(options.per_page as usize);
        Ok(results)
    }

    /// Up to six non-fork repositories, most recently updated first
    pub async fn get_pinned_repositories(&self, username: Option<&str>) -> Result<Vec<Repository>> {
        let user = self.resolve_username(username)?;
        let options = RepoListOptions {
            sort: RepoSort::Updated,
            direction: Direction::Desc,
            ..RepoListOptions::default()
        };

        let repos = self.get_user_repos(Some(user), &options).await?;
        Ok(derived::select_pinned(repos))
    }

    /// Events per day over the last 100 public events.
    ///
    /// `_year` is accepted for API compatibility and currently ignored.
    pub async fn get_contributions(
        &self,
        username: Option<&str>,
        _year: Option<i32>,
    ) -> Result<BTreeMap<NaiveDate, u32>> {
        let user = self.resolve_username(username)?;
        let options = EventListOptions {
            per_page: CONTRIBUTION_WINDOW,
            page: 1,
        };

        let events = self.get_user_events(Some(user), &options).await?;
        Ok(derived::tally_contributions(&events))
    }

    fn resolve_username<'a>(&'a self, username: Option<&'a str>) -> Result<&'a str> {
        username
            .filter(|u| !u.trim().is_empty())
            .or(self.config.username.as_deref())
            .ok_or(Error::MissingIdentity)
    }

    fn request(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.api_base_url(), path);
        debug!("GitHub API request: GET {}", url);
        self.client.get(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            error!("GitHub API request failed: {}", e);
            Error::Request(e)
        })?;

        // Update rate limit from headers, error responses included
        self.rate_limiter.update_from_headers(response.headers());

        let status = response.status();
        if let Some(err) = response.error_for_status_ref().err() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            error!("GitHub API error: {} - {}", status, error_body);
            return Err(Error::Request(err));
        }

        Ok(response)
    }

    async fn fetch_json<T>(&self, request: RequestBuilder) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|e| {
            error!("Failed to parse GitHub API response: {}", e);
            Error::Request(e)
        })
    }
}
