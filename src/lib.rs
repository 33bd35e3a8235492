pub mod config;
pub mod error;

// GitHub catalog client
pub mod github;

// Portfolio views
pub mod showcase;

pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use github::GitHubClient;
