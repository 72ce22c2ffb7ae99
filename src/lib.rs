//! Core library entry for the `skiff` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod ports;
pub mod runner;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments, returning the process exit
/// code. For `skiff run` this is the child's own exit code.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<u8, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Help and version requests are not failures.
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return Ok(0);
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
