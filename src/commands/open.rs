//! `skiff open` command.

use crate::context::ServiceContext;
use crate::runner::LocalRunner;

/// Dashboard URL opened when no explicit URL is given.
pub const DASHBOARD_URL: &str = "https://dashboard.skiff.cloud";

/// Execute the `open` command.
///
/// # Errors
///
/// Returns an error string when no URL opener is known for the current
/// platform or the opener cannot be started.
pub fn run(ctx: &ServiceContext, url: Option<&str>) -> Result<u8, String> {
    let url = url.unwrap_or(DASHBOARD_URL);
    let runner = LocalRunner::new(ctx);
    runner.open_url(url).map_err(|e| e.to_string())?;
    println!("Opening {url}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::{FixedClock, FixedProbe, MemoryFileSystem, StaticAliasSource};
    use chrono::TimeZone;

    fn ctx_for_os(os: &str) -> ServiceContext {
        ServiceContext {
            probe: Box::new(FixedProbe::new(os)),
            fs: Box::new(MemoryFileSystem::new()),
            clock: Box::new(FixedClock::new(
                chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            )),
            fetch: Box::new(StaticAliasSource::new(Vec::new())),
        }
    }

    #[test]
    fn unknown_platform_is_an_error() {
        let ctx = ctx_for_os("plan9");
        let result = run(&ctx, Some("https://dashboard.skiff.cloud"));
        assert!(result.unwrap_err().contains("plan9"));
    }
}
