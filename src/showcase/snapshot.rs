use crate::github::{
    models::{Profile, RateLimit, Repository},
    GitHubClient,
};
use crate::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Shown when the profile has no name or could not be loaded
pub const FALLBACK_HEADLINE: &str = "Developer";

/// Everything the landing page needs, fetched in one go
///
/// Sections load independently: a failed fetch leaves its own field `None`
/// and never affects the others.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioSnapshot {
    pub profile: Option<Profile>,
    pub pinned: Option<Vec<Repository>>,
    pub contributions: Option<BTreeMap<NaiveDate, u32>>,
    pub rate_limit: Option<RateLimit>,
}

impl PortfolioSnapshot {
    pub async fn gather(client: &GitHubClient, username: Option<&str>) -> Self {
        let (profile, pinned, contributions) = futures::join!(
            client.get_user(username),
            client.get_pinned_repositories(username),
            client.get_contributions(username, None),
        );

        let snapshot = Self {
            profile: section("profile", profile),
            pinned: section("pinned repositories", pinned),
            contributions: section("contributions", contributions),
            rate_limit: client.rate_limit(),
        };

        info!(
            "Portfolio snapshot gathered ({} of 3 sections loaded)",
            snapshot.loaded_sections()
        );
        snapshot
    }

    /// Profile name, or a static placeholder
    pub fn profile_headline(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|profile| profile.name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(FALLBACK_HEADLINE)
    }

    pub fn loaded_sections(&self) -> usize {
        [
            self.profile.is_some(),
            self.pinned.is_some(),
            self.contributions.is_some(),
        ]
        .into_iter()
        .filter(|loaded| *loaded)
        .count()
    }

    pub fn is_complete(&self) -> bool {
        self.loaded_sections() == 3
    }
}

fn section<T>(name: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to load {}, using fallback: {}", name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_falls_back() {
        let snapshot = PortfolioSnapshot::default();
        assert_eq!(snapshot.profile_headline(), FALLBACK_HEADLINE);
        assert_eq!(snapshot.loaded_sections(), 0);
        assert!(!snapshot.is_complete());
    }

    fn profile(name: Option<&str>) -> Profile {
        serde_json::from_value(serde_json::json!({
            "login": "octocat",
            "name": name,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "bio": null,
            "blog": null,
            "location": null,
            "email": null,
            "hireable": null,
            "public_repos": 8,
            "public_gists": 8,
            "followers": 9000,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "updated_at": "2024-01-22T12:00:00Z",
            "company": null,
            "twitter_username": null
        }))
        .unwrap()
    }

    #[test]
    fn test_headline_uses_profile_name() {
        let snapshot = PortfolioSnapshot {
            profile: Some(profile(Some("The Octocat"))),
            ..PortfolioSnapshot::default()
        };
        assert_eq!(snapshot.profile_headline(), "The Octocat");
    }

    #[test]
    fn test_headline_ignores_login_when_name_missing() {
        let snapshot = PortfolioSnapshot {
            profile: Some(profile(None)),
            ..PortfolioSnapshot::default()
        };
        assert_eq!(snapshot.profile_headline(), FALLBACK_HEADLINE);
    }
}
