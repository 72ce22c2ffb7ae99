//! Service context bundling all port trait objects.

use crate::ports::clock::Clock;
use crate::ports::env::SystemProbe;
use crate::ports::fetch::AliasSource;
use crate::ports::filesystem::FileSystem;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Commands and the
/// local runner borrow a context rather than reaching for the ambient OS
/// directly, so tests can substitute fixed adapters.
pub struct ServiceContext {
    /// Ambient environment queries (variables, OS name, terminal checks).
    pub probe: Box<dyn SystemProbe>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Alias download from the platform API.
    pub fetch: Box<dyn AliasSource>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::env::LiveSystemProbe;
        use crate::adapters::live::fetch::LiveAliasSource;
        use crate::adapters::live::filesystem::LiveFileSystem;

        Self {
            probe: Box::new(LiveSystemProbe),
            fs: Box::new(LiveFileSystem),
            clock: Box::new(LiveClock),
            fetch: Box::new(LiveAliasSource::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::{FixedClock, FixedProbe, MemoryFileSystem, StaticAliasSource};
    use chrono::TimeZone;
    use std::path::Path;

    #[test]
    fn live_context_answers_environment_queries() {
        let ctx = ServiceContext::live();
        assert!(!ctx.probe.os_name().is_empty());
    }

    #[test]
    fn fixed_context_substitutes_every_port() {
        let instant = chrono::Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let ctx = ServiceContext {
            probe: Box::new(FixedProbe::new("linux").with_var("HOME", "/home/t")),
            fs: Box::new(MemoryFileSystem::new()),
            clock: Box::new(FixedClock::new(instant)),
            fetch: Box::new(StaticAliasSource::new(Vec::new())),
        };

        assert_eq!(ctx.clock.now(), instant);
        ctx.fs.write(Path::new("/virtual/f"), "x").unwrap();
        assert_eq!(ctx.fs.read_to_string(Path::new("/virtual/f")).unwrap(), "x");
        assert_eq!(ctx.probe.var("HOME").as_deref(), Some("/home/t"));
    }
}
