//! # sentry-provision
//!
//! Makes sure an organization and a project exist on a Sentry instance and
//! reports the public DSNs of the project's client keys.
//!
//! The flow is strictly sequential:
//!
//! 1. Parse and validate the configuration (`--host`, `--token`, `--timeout`).
//! 2. List organizations to prove the host and token work.
//! 3. Look up the organization by slug, creating it when the lookup fails.
//! 4. Look up the project inside that organization, creating it when the lookup fails.
//! 5. Print the public DSN of every client key of the project.
//!
//! Exit codes are defined by [`error::Error::exit_code`].

pub mod cli;
pub mod error;
pub mod provision;
pub mod sentry;

pub use self::error::Error;

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
