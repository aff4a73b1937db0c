use crate::{
    cli::{
        actions::{provision::Args, Action},
        globals::{GlobalArgs, DEFAULT_TIMEOUT},
    },
    provision::Target,
    sentry, Error,
};
use secrecy::SecretString;
use std::time::Duration;
use tracing::warn;

fn trimmed(matches: &clap::ArgMatches, id: &str) -> String {
    matches
        .get_one::<String>(id)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// # Errors
/// Returns [`Error::Usage`] if `--host` or `--token` is missing or the host is not
/// an http(s) URL, and [`Error::InvalidSlug`] if a positional slug is invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action, Error> {
    let host = trimmed(matches, "host");
    let token = trimmed(matches, "token");

    match (host.is_empty(), token.is_empty()) {
        (true, true) => {
            return Err(Error::Usage(
                "missing required arguments: --host, --token".to_string(),
            ))
        }
        (true, false) => return Err(Error::Usage("missing required argument: --host".to_string())),
        (false, true) => return Err(Error::Usage("missing required argument: --token".to_string())),
        (false, false) => {}
    }

    let endpoint = sentry::endpoint_url(&host).map_err(|e| Error::Usage(e.to_string()))?;

    let mut globals = GlobalArgs::new(endpoint);
    globals.set_token(SecretString::from(token));
    globals.set_timeout(
        matches
            .get_one::<u64>("timeout")
            .copied()
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs),
    );

    if let Some(extra) = matches.get_many::<String>("extra") {
        warn!(
            "Ignoring extra arguments: {}",
            extra.map(String::as_str).collect::<Vec<_>>().join(" ")
        );
    }

    let organization = matches.get_one::<String>("organization");
    let project = matches.get_one::<String>("project");

    let target = match (organization, project) {
        (Some(organization), Some(project)) => Some(Target::parse(organization, project)?),
        (Some(organization), None) => {
            warn!(
                "Organization <{}> given without a project slug, ignoring it",
                organization
            );
            None
        }
        _ => None,
    };

    Ok(Action::Provision(Args { globals, target }))
}
