#![allow(dead_code)]

use folio::github::{models::Repository, GitHubClient, GitHubConfig};
use serde_json::{json, Value};

pub fn client_for(base_url: &str, username: Option<&str>) -> GitHubClient {
    let mut config = GitHubConfig::default().with_api_base_url(base_url);
    if let Some(username) = username {
        config = config.with_username(username);
    }
    GitHubClient::new(config).unwrap()
}

pub fn profile_json(login: &str) -> Value {
    json!({
        "login": login,
        "name": "The Octocat",
        "avatar_url": format!("https://avatars.githubusercontent.com/{login}"),
        "bio": null,
        "blog": "https://github.blog",
        "location": "San Francisco",
        "email": null,
        "hireable": null,
        "public_repos": 8,
        "public_gists": 8,
        "followers": 9000,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z",
        "updated_at": "2024-01-22T12:00:00Z",
        "company": "@github",
        "twitter_username": null
    })
}

pub fn repo_json(id: u64, name: &str, fork: bool, stars: u32, updated_at: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("octocat/{name}"),
        "description": format!("The {name} project"),
        "html_url": format!("https://github.com/octocat/{name}"),
        "homepage": null,
        "language": "Rust",
        "stargazers_count": stars,
        "watchers_count": stars,
        "forks_count": 0,
        "open_issues_count": 0,
        "created_at": "2020-01-01T00:00:00Z",
        "updated_at": updated_at,
        "pushed_at": updated_at,
        "topics": [],
        "visibility": "public",
        "default_branch": "main",
        "fork": fork
    })
}

pub fn repo(id: u64, name: &str, fork: bool, stars: u32, updated_at: &str) -> Repository {
    serde_json::from_value(repo_json(id, name, fork, stars, updated_at)).unwrap()
}

pub fn event_json(id: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "type": "PushEvent",
        "created_at": created_at,
        "repo": {
            "id": 1296269,
            "name": "octocat/Hello-World",
            "url": "https://api.github.com/repos/octocat/Hello-World"
        },
        "payload": { "size": 1 }
    })
}
