//! Alias store — persistence for downloaded server aliases.
//!
//! The manifest is a small YAML document recording when the aliases were
//! fetched and what the platform reported. All I/O goes through the
//! `FileSystem` port so the store works with live and fixed adapters
//! alike.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::ports::fetch::ServerAlias;

/// On-disk manifest of downloaded server aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasManifest {
    /// When the aliases were fetched from the platform.
    pub fetched_at: DateTime<Utc>,
    /// The downloaded aliases.
    pub aliases: Vec<ServerAlias>,
}

/// Persistence layer for the alias manifest.
pub struct AliasStore<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
}

impl<'a> AliasStore<'a> {
    /// Creates a store for the manifest at the given path.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, path: &Path) -> Self {
        Self { ctx, path: path.to_path_buf() }
    }

    /// Saves the manifest as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self, manifest: &AliasManifest) -> Result<(), String> {
        let yaml = serde_yaml::to_string(manifest)
            .map_err(|e| format!("Failed to serialize alias manifest: {e}"))?;
        self.ctx
            .fs
            .write(&self.path, &yaml)
            .map_err(|e| format!("Failed to write {}: {e}", self.path.display()))
    }

    /// Loads the manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<AliasManifest, String> {
        let contents = self
            .ctx
            .fs
            .read_to_string(&self.path)
            .map_err(|e| format!("Failed to read {}: {e}", self.path.display()))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {e}", self.path.display()))
    }

    /// Returns `true` when a manifest exists at the store's path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.ctx.fs.exists(&self.path)
    }
}
