//! Environment probe port for ambient OS queries.

/// Answers questions about the ambient process environment.
///
/// Every environment variable read, OS identification, and terminal
/// attachment check goes through this trait so tests can simulate
/// arbitrary platforms without touching real process state.
pub trait SystemProbe: Send + Sync {
    /// Returns the value of an environment variable, if set.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the reported OS family identifier.
    ///
    /// The live adapter reports `std::env::consts::OS` values (`linux`,
    /// `macos`, `windows`); uname-style names such as `Darwin` or
    /// `Windows NT` are also understood by consumers.
    fn os_name(&self) -> String;

    /// Returns `true` when the host's standard input is a terminal.
    fn stdin_is_terminal(&self) -> bool;

    /// Returns `true` when the host's standard output is a terminal.
    fn stdout_is_terminal(&self) -> bool;
}
