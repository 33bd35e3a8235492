//! Portfolio views assembled from catalog data.

pub mod snapshot;

pub use snapshot::PortfolioSnapshot;

use crate::github::models::Repository;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Ordering for the projects view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSort {
    #[default]
    Stars,
    Forks,
    Updated,
    /// Keep the order the API returned
    None,
}

/// Language, text and ordering controls of the projects view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub language: Option<String>,
    pub query: Option<String>,
    pub sort: ProjectSort,
}

impl ProjectFilter {
    /// Filter then sort. Sorting is stable, so ties keep their input order.
    pub fn apply(&self, repos: &[Repository]) -> Vec<Repository> {
        let needle = self
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let mut selected: Vec<Repository> = repos
            .iter()
            .filter(|repo| match &self.language {
                Some(language) => repo.language.as_deref() == Some(language.as_str()),
                None => true,
            })
            .filter(|repo| match &needle {
                Some(needle) => matches_query(repo, needle),
                None => true,
            })
            .cloned()
            .collect();

        sort_repositories(&mut selected, self.sort);
        selected
    }
}

/// Stable in-place sort; every ordering except `None` is descending
pub fn sort_repositories(repos: &mut [Repository], sort: ProjectSort) {
    match sort {
        ProjectSort::Stars => repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count)),
        ProjectSort::Forks => repos.sort_by(|a, b| b.forks_count.cmp(&a.forks_count)),
        ProjectSort::Updated => repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        ProjectSort::None => {}
    }
}

fn matches_query(repo: &Repository, needle: &str) -> bool {
    repo.name.to_lowercase().contains(needle)
        || repo
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || repo
            .topics
            .iter()
            .any(|topic| topic.to_lowercase().contains(needle))
}

/// Repositories worth showing: own work with at least one star, minus
/// `excluded` names (profile README repos and the like)
pub fn featured_projects(repos: Vec<Repository>, excluded: &[String]) -> Vec<Repository> {
    repos
        .into_iter()
        .filter(|repo| !repo.fork && repo.stargazers_count > 0)
        .filter(|repo| !excluded.iter().any(|name| name == &repo.name))
        .collect()
}

/// Distinct primary languages in order of first appearance
pub fn languages(repos: &[Repository]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for language in repos.iter().filter_map(|repo| repo.language.as_ref()) {
        if !seen.contains(language) {
            seen.push(language.clone());
        }
    }
    seen
}
