use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub username not provided")]
    MissingIdentity,

    #[error("GitHub API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the call was rejected before any request was made because
    /// no username could be resolved
    pub fn is_missing_identity(&self) -> bool {
        matches!(self, Error::MissingIdentity)
    }

    /// HTTP status of the failed exchange, if the server answered at all
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Request(e) => e.status(),
            _ => None,
        }
    }
}
