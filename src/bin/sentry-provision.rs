use sentry_provision::cli;
use std::process::ExitCode;
use tracing::error;

// Main function
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let result = match cli::start() {
        Ok(action) => action.execute().await.map_err(anyhow::Error::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(cli::exit_code(&e))
        }
    }
}
