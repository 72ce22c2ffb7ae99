//! `skiff run` command.

use crate::context::ServiceContext;
use crate::runner::{CommandLine, LocalRunner};

/// Execute the `run` command.
///
/// The child's exit code becomes the CLI's exit code; a non-zero status
/// is passed through rather than treated as a failure.
///
/// # Errors
///
/// Returns an error string when the command cannot be started or the
/// fixed timeout elapses.
pub fn run(
    ctx: &ServiceContext,
    args: &[String],
    progress: bool,
    no_interaction: bool,
) -> Result<u8, String> {
    let command = if args.len() == 1 {
        CommandLine::Shell(args[0].clone())
    } else {
        CommandLine::Argv(args.to_vec())
    };

    let interactive = !no_interaction && ctx.probe.stdin_is_terminal();
    let runner = LocalRunner::with_interactivity(ctx, interactive);

    let mut on_line = |line: &str| println!("{line}");
    let result = runner
        .run_interactive(&command, Some(&mut on_line), progress)
        .map_err(|e| e.to_string())?;

    Ok(u8::try_from(result.exit_code).unwrap_or(1))
}
