use crate::{
    cli::actions::{provision, Action},
    Error,
};

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<(), Error> {
    match action {
        Action::Provision(args) => provision::execute(args).await,
    }
}
