//! Command dispatch and handlers.

pub mod aliases;
pub mod open;
pub mod run;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// Returns the process exit code; for `run` that is the child's own exit
/// code passed through.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<u8, String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<u8, String> {
    match command {
        Command::Run { progress, no_interaction, command } => {
            run::run(ctx, command, *progress, *no_interaction)
        }
        Command::Open { url } => open::run(ctx, url.as_deref()),
        Command::Aliases { output } => aliases::run(ctx, output.as_deref()),
    }
}
