use crate::{
    cli::{actions::Action, commands, dispatch::handler, logging},
    Error,
};
use anyhow::Result;

/// Start the CLI
/// # Errors
/// Returns an error if logging cannot be initialized or the arguments are invalid.
pub fn start() -> Result<Action> {
    // clap errors arrive before logging is set up, so they go straight to stderr
    let matches = match commands::try_matches(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("{e}\n\n{}", commands::new().render_help());
            return Err(e.into());
        }
    };

    let verbosity_level = logging::level(matches.get_count("verbosity"), matches.get_flag("quiet"));

    logging::init(verbosity_level)?;

    match handler(&matches) {
        Ok(action) => Ok(action),
        Err(e @ Error::Usage(_)) => {
            eprintln!("{}", commands::new().render_help());
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
