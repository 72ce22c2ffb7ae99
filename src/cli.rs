//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `skiff`.
#[derive(Debug, Parser)]
#[command(
    name = "skiff",
    version,
    about = "Command-line companion for the Skiff hosting platform"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a local command, streaming its output.
    Run {
        /// Show a progress indicator while the command runs (terminal only).
        #[arg(long)]
        progress: bool,
        /// Never attach the terminal.
        #[arg(long)]
        no_interaction: bool,
        /// One argument is interpreted as a shell line; several as a
        /// program and its arguments.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },
    /// Open a platform URL in the default browser.
    Open {
        /// URL to open; defaults to the dashboard.
        url: Option<String>,
    },
    /// Download the account's server aliases.
    Aliases {
        /// Where to write the manifest; defaults to `~/.skiff/aliases.yml`.
        #[arg(long)]
        output: Option<String>,
    },
}
