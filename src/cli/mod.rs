pub mod actions;
pub mod commands;
pub mod dispatch;
pub mod globals;
pub mod logging;

mod start;
pub use self::start::start;

use crate::Error;

/// Exit code for an error raised while starting or running an action.
/// Errors outside the crate taxonomy count as configuration errors.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Error>().map_or(1, Error::exit_code)
}
