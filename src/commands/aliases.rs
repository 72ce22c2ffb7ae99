//! `skiff aliases` command.

use crate::context::ServiceContext;
use crate::ports::fetch::AliasRequest;
use crate::runner::LocalRunner;
use crate::store::{AliasManifest, AliasStore};

/// Default alias endpoint on the platform API.
pub const DEFAULT_API_URL: &str = "https://api.skiff.cloud/v1/server-aliases";

/// Default location of the on-disk manifest.
pub const DEFAULT_ALIAS_PATH: &str = "~/.skiff/aliases.yml";

/// Execute the `aliases` command.
///
/// Downloads the account's server aliases and writes the YAML manifest,
/// honoring `SKIFF_API_URL` and `--output` overrides.
///
/// # Errors
///
/// Returns an error string when `SKIFF_TOKEN` is unset, the download
/// fails, or the manifest cannot be written.
pub fn run(ctx: &ServiceContext, output: Option<&str>) -> Result<u8, String> {
    let token = ctx.probe.var("SKIFF_TOKEN").filter(|t| !t.is_empty()).ok_or_else(|| {
        "SKIFF_TOKEN is not set; create an API token in the dashboard and export it".to_string()
    })?;
    let endpoint = ctx
        .probe
        .var("SKIFF_API_URL")
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let request = AliasRequest { endpoint, token };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    let aliases = runtime
        .block_on(ctx.fetch.fetch_aliases(&request))
        .map_err(|e| format!("Failed to download server aliases: {e}"))?;

    let runner = LocalRunner::new(ctx);
    let path =
        runner.fix_filename(output.unwrap_or(DEFAULT_ALIAS_PATH)).map_err(|e| e.to_string())?;

    let manifest = AliasManifest { fetched_at: ctx.clock.now(), aliases };
    AliasStore::new(ctx, &path).save(&manifest)?;

    println!("Saved {} server aliases to {}", manifest.aliases.len(), path.display());
    Ok(0)
}
