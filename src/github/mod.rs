pub mod client;
pub mod config;
pub mod derived;
pub mod models;
pub mod options;
pub mod parser;
pub mod rate_limiter;

pub use client::GitHubClient;
pub use config::GitHubConfig;
pub use derived::{select_pinned, tally_contributions};
pub use parser::{parse_repo_ref, RepoRef};
pub use rate_limiter::RateLimitTracker;
