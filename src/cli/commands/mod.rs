use crate::Error;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    error::ErrorKind,
    Arg, ArgAction, ArgMatches, ColorChoice, Command,
};
use std::ffi::OsString;

/// Parse `args` without letting clap exit on invalid input.
/// `--help` and `--version` still print and exit with 0.
/// # Errors
/// Returns [`Error::Usage`] for every other parse failure.
pub fn try_matches<I, T>(args: I) -> Result<ArgMatches, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    new().try_get_matches_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
        _ => Error::Usage(e.to_string().trim_end().to_string()),
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("sentry-provision")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("host")
                .long("host")
                .help("Host of your Sentry instance including the protocol, example: https://sentry.io")
                .env("SENTRY_URL"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .help("Personal access token generated by your Sentry instance")
                .env("SENTRY_AUTH_TOKEN")
                .hide_env_values(true),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help("Timeout in seconds for each HTTP request")
                .default_value("10")
                .env("SENTRY_TIMEOUT")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("organization")
                .help("Organization slug, created if it does not exist")
                .index(1),
        )
        .arg(
            Arg::new("project")
                .help("Project slug, created in the organization if it does not exist")
                .index(2),
        )
        .arg(
            Arg::new("extra")
                .help("Ignored")
                .index(3)
                .num_args(1..)
                .hide(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Increase verbosity: INFO (default), -v DEBUG, -vv TRACE")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbosity"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 3] = ["SENTRY_URL", "SENTRY_AUTH_TOKEN", "SENTRY_TIMEOUT"];

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "sentry-provision");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_host_token_and_slugs() {
        temp_env::with_vars_unset(ENV_VARS, || {
            let matches = new().get_matches_from(vec![
                "sentry-provision",
                "--host",
                "https://sentry.io",
                "--token",
                "secret",
                "--timeout",
                "30",
                "ACME",
                "web",
            ]);

            assert_eq!(
                matches.get_one::<String>("host").map(String::as_str),
                Some("https://sentry.io")
            );
            assert_eq!(
                matches.get_one::<String>("token").map(String::as_str),
                Some("secret")
            );
            assert_eq!(matches.get_one::<u64>("timeout").copied(), Some(30));
            assert_eq!(
                matches.get_one::<String>("organization").map(String::as_str),
                Some("ACME")
            );
            assert_eq!(
                matches.get_one::<String>("project").map(String::as_str),
                Some("web")
            );
        });
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(ENV_VARS, || {
            let matches = new().get_matches_from(vec!["sentry-provision"]);

            assert_eq!(matches.get_one::<String>("host"), None);
            assert_eq!(matches.get_one::<String>("token"), None);
            assert_eq!(matches.get_one::<u64>("timeout").copied(), Some(10));
            assert_eq!(matches.get_one::<String>("organization"), None);
            assert_eq!(matches.get_count("verbosity"), 0);
            assert!(!matches.get_flag("quiet"));
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("SENTRY_URL", Some("https://sentry.example.com")),
                ("SENTRY_AUTH_TOKEN", Some("env-token")),
                ("SENTRY_TIMEOUT", Some("5")),
            ],
            || {
                let matches = new().get_matches_from(vec!["sentry-provision"]);
                assert_eq!(
                    matches.get_one::<String>("host").map(String::as_str),
                    Some("https://sentry.example.com")
                );
                assert_eq!(
                    matches.get_one::<String>("token").map(String::as_str),
                    Some("env-token")
                );
                assert_eq!(matches.get_one::<u64>("timeout").copied(), Some(5));
            },
        );
    }

    #[test]
    fn test_timeout_must_be_positive() {
        temp_env::with_vars_unset(ENV_VARS, || {
            for timeout in ["0", "-1", "ten"] {
                let result = try_matches(vec!["sentry-provision", "--timeout", timeout]);
                assert!(
                    matches!(result, Err(ref e @ Error::Usage(_)) if e.exit_code() == 1),
                    "{timeout} should be rejected as a usage error"
                );
            }
        });
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        temp_env::with_vars_unset(ENV_VARS, || {
            let result = try_matches(vec!["sentry-provision", "--organization", "acme"]);
            assert!(matches!(result, Err(Error::Usage(ref msg)) if msg.contains("--organization")));
        });
    }

    #[test]
    fn test_extra_positionals_are_accepted() {
        temp_env::with_vars_unset(ENV_VARS, || {
            let matches = try_matches(vec!["sentry-provision", "acme", "web", "extra", "more"]);
            assert!(matches.is_ok());
            if let Ok(matches) = matches {
                assert_eq!(
                    matches.get_one::<String>("project").map(String::as_str),
                    Some("web")
                );
                assert_eq!(
                    matches
                        .get_many::<String>("extra")
                        .map(|values| values.count()),
                    Some(2)
                );
            }
        });
    }

    #[test]
    fn test_check_verbosity() {
        temp_env::with_vars_unset(ENV_VARS, || {
            for count in 1..=3u8 {
                let v = format!("-{}", "v".repeat(usize::from(count)));
                let matches = new().get_matches_from(vec!["sentry-provision".to_string(), v]);
                assert_eq!(matches.get_count("verbosity"), count);
            }
        });
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        temp_env::with_vars_unset(ENV_VARS, || {
            let result = try_matches(vec!["sentry-provision", "-q", "-v"]);
            assert!(matches!(result, Err(ref e) if e.exit_code() == 1));
        });
    }
}
