//! Fixed adapters with preset values.
//!
//! These stand in for the live adapters when a test needs to simulate a
//! particular platform (a given OS name, environment variables, terminal
//! attachment, or a canned alias listing) without touching real process
//! state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;
use crate::ports::env::SystemProbe;
use crate::ports::fetch::{AliasFuture, AliasRequest, AliasSource, ServerAlias};
use crate::ports::filesystem::FileSystem;

/// Probe answering from preset values instead of the real environment.
pub struct FixedProbe {
    vars: HashMap<String, String>,
    os_name: String,
    stdin_is_terminal: bool,
    stdout_is_terminal: bool,
}

impl FixedProbe {
    /// Creates a probe for the given OS name with no variables set and
    /// no terminal attached.
    #[must_use]
    pub fn new(os_name: &str) -> Self {
        Self {
            vars: HashMap::new(),
            os_name: os_name.to_string(),
            stdin_is_terminal: false,
            stdout_is_terminal: false,
        }
    }

    /// Sets an environment variable.
    #[must_use]
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Sets terminal attachment for stdin and stdout.
    #[must_use]
    pub fn with_terminal(mut self, stdin: bool, stdout: bool) -> Self {
        self.stdin_is_terminal = stdin;
        self.stdout_is_terminal = stdout;
        self
    }
}

impl SystemProbe for FixedProbe {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn os_name(&self) -> String {
        self.os_name.clone()
    }

    fn stdin_is_terminal(&self) -> bool {
        self.stdin_is_terminal
    }

    fn stdout_is_terminal(&self) -> bool {
        self.stdout_is_terminal
    }
}

/// In-memory filesystem keyed by path.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().map_err(|e| e.to_string())?;
        files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("no such file: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut files = self.files.lock().map_err(|e| e.to_string())?;
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().map(|files| files.contains_key(path)).unwrap_or(false)
    }
}

/// Clock frozen at a preset instant.
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports the given instant.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Alias source serving a canned listing.
pub struct StaticAliasSource {
    aliases: Vec<ServerAlias>,
}

impl StaticAliasSource {
    /// Creates a source that returns the given aliases for any request.
    #[must_use]
    pub fn new(aliases: Vec<ServerAlias>) -> Self {
        Self { aliases }
    }
}

impl AliasSource for StaticAliasSource {
    fn fetch_aliases(&self, _request: &AliasRequest) -> AliasFuture<'_> {
        let aliases = self.aliases.clone();
        Box::pin(async move { Ok(aliases) })
    }
}
