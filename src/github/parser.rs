use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A repository named as `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_repo_ref(s)
    }
}

/// Parse a repository reference.
/// Accepts `owner/name`, `github.com/owner/name` and full https URLs,
/// with or without a trailing slash or `.git`.
pub fn parse_repo_ref(input: &str) -> Result<RepoRef> {
    let trimmed = input.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    let path = ["https://", "http://"]
        .iter()
        .find_map(|scheme| trimmed.strip_prefix(scheme))
        .unwrap_or(trimmed);
    let path = path.strip_prefix("www.").unwrap_or(path);
    let path = path.strip_prefix("github.com/").unwrap_or(path);

    let mut segments = path.split('/').map(str::trim);
    match (segments.next(), segments.next()) {
        (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => {
            Ok(RepoRef::new(owner, name))
        }
        _ => Err(Error::Validation(format!(
            "Invalid repository reference '{input}'. Expected: owner/name"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_form() {
        let repo: RepoRef = "octocat/Hello-World".parse().unwrap();
        assert_eq!(repo, RepoRef::new("octocat", "Hello-World"));
        assert_eq!(repo.to_string(), "octocat/Hello-World");
    }

    #[test]
    fn test_parse_urls() {
        for input in [
            "https://github.com/octocat/Hello-World",
            "https://github.com/octocat/Hello-World/",
            "https://github.com/octocat/Hello-World.git",
            "http://www.github.com/octocat/Hello-World",
            "github.com/octocat/Hello-World",
            "https://github.com/octocat/Hello-World/tree/main/src",
        ] {
            let repo = parse_repo_ref(input).unwrap();
            assert_eq!(repo.owner, "octocat", "{input}");
            assert_eq!(repo.name, "Hello-World", "{input}");
        }
    }

    #[test]
    fn test_parse_rejects_incomplete() {
        for input in ["", "octocat", "octocat/", "/Hello-World", "https://github.com/octocat"] {
            assert!(
                matches!(parse_repo_ref(input), Err(Error::Validation(_))),
                "{input}"
            );
        }
    }
}
