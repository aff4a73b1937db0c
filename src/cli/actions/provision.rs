use crate::{
    cli::globals::GlobalArgs,
    provision::{self, Target},
    sentry::Client,
    Error,
};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub target: Option<Target>,
}

/// Check the connection, then provision the target if one was given.
/// # Errors
/// Returns [`Error::Connection`] if the organizations cannot be listed, or the
/// provisioning error otherwise.
pub async fn execute(args: Args) -> Result<(), Error> {
    let Args { globals, target } = args;

    let timeout = globals.timeout;

    let client =
        Client::new(globals.endpoint, globals.token, timeout).map_err(Error::Connection)?;

    debug!(
        "endpoint: {}, timeout: {}s",
        client.endpoint(),
        timeout.as_secs()
    );

    info!("Check connection with provided parameters");

    client
        .list_organizations()
        .await
        .map_err(Error::Connection)?;

    info!("Connection success!");

    let Some(target) = target else {
        info!("No more parameters were passed. No more actions are required");
        return Ok(());
    };

    for dsn in provision::run(&client, &target).await? {
        info!("Your public DSN: {}", dsn);
    }

    Ok(())
}
