//! Error kinds surfaced by the local runner.

use std::time::Duration;

use thiserror::Error;

/// Failures the local runner can report.
///
/// A non-zero exit status from a process that started successfully is not
/// an error; it is returned as data in
/// [`CommandResult`](crate::runner::CommandResult).
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The subprocess could not be located or spawned.
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        /// The command line that was being started.
        command: String,
        /// The underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// I/O failed while reading from or waiting on a started process.
    #[error("i/o failure while running `{command}`: {source}")]
    ProcessIo {
        /// The command line that was running.
        command: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The process outlived the fixed timeout and was killed.
    #[error("`{command}` exceeded the {}s timeout and was terminated", limit.as_secs())]
    Timeout {
        /// The command line that timed out.
        command: String,
        /// The timeout that elapsed.
        limit: Duration,
    },

    /// No URL opener is known for the reported OS.
    #[error("don't know how to open URLs on `{os}`")]
    UnsupportedPlatform {
        /// The OS name that could not be matched.
        os: String,
    },

    /// A local file could not be read or written.
    #[error("cannot access `{path}`: {message}")]
    FileAccess {
        /// The path that failed, as given by the caller.
        path: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// No home directory could be determined from the environment.
    #[error("home directory could not be determined (HOME and HOMEPATH unset)")]
    HomeDirectoryNotFound,
}
