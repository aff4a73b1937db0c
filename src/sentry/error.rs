use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid Sentry host: {0}")]
    InvalidHost(String),
    #[error("invalid Sentry host: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{url} - {status}, {detail}")]
    Status {
        url: String,
        status: StatusCode,
        detail: String,
    },
}

impl Error {
    /// True when the API answered `404 Not Found`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
