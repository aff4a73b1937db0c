pub mod provision;

// Internal "interpreter" for `Action`.
// The match lives in a separate module so `mod.rs` stays small as more actions are added.
mod run;

#[derive(Debug)]
pub enum Action {
    Provision(provision::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails; see [`crate::Error::exit_code`].
    pub async fn execute(self) -> Result<(), crate::Error> {
        run::execute(self).await
    }
}
