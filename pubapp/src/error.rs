use thiserror::Error;
use pubcore::error::ValueError;

/// Failures of the fetch-then-render chain.  None of these are retried.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load research data: HTTP status {0}")]
    Status(u16),
    #[error("Failed to load research data: {0}")]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    Parse(#[from] ValueError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid data location: {0}")]
    Url(#[from] url::ParseError),
    #[error("page unavailable: {0}")]
    Dom(String),
}

