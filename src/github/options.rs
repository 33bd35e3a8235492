//! Query parameters for the list and search endpoints.
//!
//! Defaults mirror what the portfolio pages ask for when they do not
//! override anything.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which repositories of a user to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    All,
    #[default]
    Owner,
    Member,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Created,
    #[default]
    Updated,
    Pushed,
    FullName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchSort {
    Stars,
    Forks,
    Updated,
}

/// `GET /users/{user}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoListOptions {
    #[serde(rename = "type")]
    pub repo_type: RepoType,
    pub sort: RepoSort,
    pub direction: Direction,
    pub per_page: u32,
    pub page: u32,
}

impl Default for RepoListOptions {
    fn default() -> Self {
        Self {
            repo_type: RepoType::default(),
            sort: RepoSort::default(),
            direction: Direction::default(),
            per_page: 100,
            page: 1,
        }
    }
}

/// `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitListOptions {
    pub per_page: u32,
    pub page: u32,
    /// Branch name or commit SHA to start listing from
    #[serde(rename = "sha", skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl Default for CommitListOptions {
    fn default() -> Self {
        Self {
            per_page: 30,
            page: 1,
            branch: None,
        }
    }
}

/// `GET /users/{user}/events`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventListOptions {
    pub per_page: u32,
    pub page: u32,
}

impl Default for EventListOptions {
    fn default() -> Self {
        Self {
            per_page: 30,
            page: 1,
        }
    }
}

/// `GET /search/repositories`; no sort means best match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    pub order: Direction,
    pub per_page: u32,
    pub page: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sort: None,
            order: Direction::Desc,
            per_page: 30,
            page: 1,
        }
    }
}

impl SearchOptions {
    /// Zero page size or page number means "use the default"
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        Self {
            per_page: if self.per_page == 0 { defaults.per_page } else { self.per_page },
            page: if self.page == 0 { defaults.page } else { self.page },
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repo_list_defaults_serialize() {
        let value = serde_json::to_value(RepoListOptions::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "owner",
                "sort": "updated",
                "direction": "desc",
                "per_page": 100,
                "page": 1
            })
        );
    }

    #[test]
    fn test_full_name_sort_key() {
        assert_eq!(
            serde_json::to_value(RepoSort::FullName).unwrap(),
            json!("full_name")
        );
    }

    #[test]
    fn test_optional_params_are_omitted() {
        let commits = serde_json::to_value(CommitListOptions::default()).unwrap();
        assert!(commits.get("sha").is_none());

        let search = serde_json::to_value(SearchOptions::default()).unwrap();
        assert!(search.get("sort").is_none());
        assert_eq!(search["order"], json!("desc"));
    }

    #[test]
    fn test_search_zero_paging_uses_defaults() {
        let options = SearchOptions {
            sort: Some(SearchSort::Forks),
            per_page: 0,
            page: 0,
            ..SearchOptions::default()
        }
        .normalized();

        assert_eq!(options.per_page, 30);
        assert_eq!(options.page, 1);
        assert_eq!(options.sort, Some(SearchSort::Forks));

        let explicit = SearchOptions {
            per_page: 5,
            page: 3,
            ..SearchOptions::default()
        };
        assert_eq!(explicit.normalized(), explicit);
    }
}
