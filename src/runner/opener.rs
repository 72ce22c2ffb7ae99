//! Platform detection and URL-opener selection.

use crate::error::RunnerError;

/// OS families the runner knows how to open URLs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux and friends (`xdg-open`).
    Linux,
    /// macOS (`open`).
    MacOs,
    /// Windows (`cmd /C start`).
    Windows,
}

/// Opener command lines keyed by platform.
///
/// The empty `start` title argument keeps URLs containing spaces from
/// being treated as a window title by `cmd`.
const OPENERS: &[(Platform, &[&str])] = &[
    (Platform::Linux, &["xdg-open"]),
    (Platform::MacOs, &["open"]),
    (Platform::Windows, &["cmd", "/C", "start", ""]),
];

impl Platform {
    /// Parses a reported OS family name.
    ///
    /// Accepts both `std::env::consts::OS` values (`linux`, `macos`,
    /// `windows`) and uname-style names (`Linux`, `Darwin`, `Windows NT`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linux" => Some(Self::Linux),
            "macos" | "darwin" => Some(Self::MacOs),
            "windows" | "windows nt" => Some(Self::Windows),
            _ => None,
        }
    }

    /// Returns the opener command line for this platform.
    #[must_use]
    pub fn opener(self) -> &'static [&'static str] {
        OPENERS
            .iter()
            .find_map(|(candidate, argv)| (*candidate == self).then_some(*argv))
            .unwrap_or(&[])
    }
}

/// Resolves the opener command line for a reported OS name.
///
/// # Errors
///
/// Returns [`RunnerError::UnsupportedPlatform`] when the name is not a
/// recognized OS family. No process is spawned in that case.
pub fn opener_for(os_name: &str) -> Result<&'static [&'static str], RunnerError> {
    Platform::from_name(os_name)
        .map(Platform::opener)
        .ok_or_else(|| RunnerError::UnsupportedPlatform { os: os_name.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_consts_os_names() {
        assert_eq!(Platform::from_name("linux"), Some(Platform::Linux));
        assert_eq!(Platform::from_name("macos"), Some(Platform::MacOs));
        assert_eq!(Platform::from_name("windows"), Some(Platform::Windows));
    }

    #[test]
    fn recognizes_uname_style_names() {
        assert_eq!(Platform::from_name("Linux"), Some(Platform::Linux));
        assert_eq!(Platform::from_name("Darwin"), Some(Platform::MacOs));
        assert_eq!(Platform::from_name("Windows NT"), Some(Platform::Windows));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(Platform::from_name("plan9"), None);
        assert_eq!(Platform::from_name(""), None);
    }

    #[test]
    fn every_platform_has_an_opener_entry() {
        for platform in [Platform::Linux, Platform::MacOs, Platform::Windows] {
            assert!(!platform.opener().is_empty());
        }
    }

    #[test]
    fn unknown_os_is_an_unsupported_platform_error() {
        let err = match opener_for("plan9") {
            Err(e) => e,
            Ok(_) => panic!("expected an error"),
        };
        assert!(matches!(err, RunnerError::UnsupportedPlatform { .. }));
    }
}
