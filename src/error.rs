use crate::sentry;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),
    #[error("invalid slug <{0}>: expected 1-50 characters of [a-z0-9_-], not only digits")]
    InvalidSlug(String),
    #[error("Connection failed: {0}")]
    Connection(#[source] sentry::Error),
    #[error("Creating organization <{slug}> failed: {source}")]
    Organization {
        slug: String,
        #[source]
        source: sentry::Error,
    },
    #[error("Create <{project}> project in organization <{organization}> failed: {source}")]
    Project {
        organization: String,
        project: String,
        #[source]
        source: sentry::Error,
    },
    #[error("Listing client keys of project <{project}> failed: {source}")]
    ClientKeys {
        project: String,
        #[source]
        source: sentry::Error,
    },
}

impl Error {
    /// Process exit code reported for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::InvalidSlug(_) => 1,
            Self::Connection(_) => 2,
            Self::Organization { .. } | Self::Project { .. } | Self::ClientKeys { .. } => 3,
        }
    }
}
