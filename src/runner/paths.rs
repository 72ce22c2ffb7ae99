//! Home-directory detection and `~` path normalization.

use std::path::PathBuf;

use crate::error::RunnerError;
use crate::ports::env::SystemProbe;

/// Determines the user's home directory from the environment.
///
/// `HOME` wins when set. Without it, `HOMEPATH` is the fallback, except
/// under MinGW (`MSYSTEM` beginning with `MING`, any case), where
/// `HOMEPATH` points at the Windows profile rather than where shell tools
/// expect `~` to live.
///
/// # Errors
///
/// Returns [`RunnerError::HomeDirectoryNotFound`] when no usable source
/// is set.
pub fn home_directory(probe: &dyn SystemProbe) -> Result<String, RunnerError> {
    if let Some(home) = probe.var("HOME").filter(|v| !v.is_empty()) {
        return Ok(home);
    }
    if let Some(msystem) = probe.var("MSYSTEM") {
        let prefix: String = msystem.chars().take(4).collect();
        if prefix.eq_ignore_ascii_case("MING") {
            return Err(RunnerError::HomeDirectoryNotFound);
        }
    }
    if let Some(path) = probe.var("HOMEPATH").filter(|v| !v.is_empty()) {
        return Ok(path);
    }
    Err(RunnerError::HomeDirectoryNotFound)
}

/// Expands a leading `~` to the home directory and normalizes directory
/// separators for the host OS.
///
/// Duplicate separators around the `~` join are collapsed, so the result
/// does not depend on whether the home directory carries a trailing
/// separator.
///
/// # Errors
///
/// Returns [`RunnerError::HomeDirectoryNotFound`] when the path starts
/// with `~` and no home directory can be determined.
pub fn fix_filename(path: &str, probe: &dyn SystemProbe) -> Result<PathBuf, RunnerError> {
    let expanded = match path.strip_prefix('~') {
        Some(rest) => {
            let home = home_directory(probe)?;
            let home = home.trim_end_matches(['/', '\\']);
            let rest = rest.trim_start_matches(['/', '\\']);
            if rest.is_empty() {
                home.to_string()
            } else {
                format!("{home}/{rest}")
            }
        }
        None => path.to_string(),
    };

    let normalized: String = expanded
        .chars()
        .map(|c| if c == '/' || c == '\\' { std::path::MAIN_SEPARATOR } else { c })
        .collect();
    Ok(PathBuf::from(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::FixedProbe;
    use std::path::MAIN_SEPARATOR;

    #[test]
    fn home_prefers_home_variable() {
        let probe = FixedProbe::new("linux")
            .with_var("HOME", "/home/captain")
            .with_var("HOMEPATH", "\\Users\\captain");
        assert_eq!(home_directory(&probe).unwrap(), "/home/captain");
    }

    #[test]
    fn home_falls_back_to_homepath() {
        let probe = FixedProbe::new("windows").with_var("HOMEPATH", "\\Users\\captain");
        assert_eq!(home_directory(&probe).unwrap(), "\\Users\\captain");
    }

    #[test]
    fn mingw_suppresses_the_homepath_fallback() {
        let probe = FixedProbe::new("windows")
            .with_var("MSYSTEM", "MINGW64")
            .with_var("HOMEPATH", "\\Users\\captain");
        assert!(matches!(home_directory(&probe), Err(RunnerError::HomeDirectoryNotFound)));
    }

    #[test]
    fn msys_environment_still_allows_homepath() {
        let probe = FixedProbe::new("windows")
            .with_var("MSYSTEM", "MSYS")
            .with_var("HOMEPATH", "\\Users\\captain");
        assert_eq!(home_directory(&probe).unwrap(), "\\Users\\captain");
    }

    #[test]
    fn missing_home_is_an_explicit_error() {
        let probe = FixedProbe::new("linux");
        assert!(matches!(home_directory(&probe), Err(RunnerError::HomeDirectoryNotFound)));
    }

    #[test]
    fn empty_home_is_treated_as_unset() {
        let probe = FixedProbe::new("linux").with_var("HOME", "");
        assert!(matches!(home_directory(&probe), Err(RunnerError::HomeDirectoryNotFound)));
    }

    #[test]
    fn tilde_expands_to_home() {
        let probe = FixedProbe::new("linux").with_var("HOME", "/home/captain");
        let fixed = fix_filename("~/test.txt", &probe).unwrap();
        assert_eq!(
            fixed.to_string_lossy(),
            format!("{MAIN_SEPARATOR}home{MAIN_SEPARATOR}captain{MAIN_SEPARATOR}test.txt")
        );
    }

    #[test]
    fn trailing_separator_on_home_does_not_double_up() {
        let probe = FixedProbe::new("linux").with_var("HOME", "/home/captain/");
        let fixed = fix_filename("~/test.txt", &probe).unwrap();
        assert_eq!(
            fixed.to_string_lossy(),
            format!("{MAIN_SEPARATOR}home{MAIN_SEPARATOR}captain{MAIN_SEPARATOR}test.txt")
        );
    }

    #[test]
    fn bare_tilde_is_the_home_directory() {
        let probe = FixedProbe::new("linux").with_var("HOME", "/home/captain");
        let fixed = fix_filename("~", &probe).unwrap();
        assert_eq!(
            fixed.to_string_lossy(),
            format!("{MAIN_SEPARATOR}home{MAIN_SEPARATOR}captain")
        );
    }

    #[test]
    fn paths_without_tilde_only_get_separator_normalization() {
        let probe = FixedProbe::new("linux");
        let fixed = fix_filename("deploy\\hooks\\post.sh", &probe).unwrap();
        assert_eq!(
            fixed.to_string_lossy(),
            format!("deploy{MAIN_SEPARATOR}hooks{MAIN_SEPARATOR}post.sh")
        );
    }

    #[test]
    fn tilde_path_without_home_errors() {
        let probe = FixedProbe::new("linux");
        assert!(matches!(
            fix_filename("~/test.txt", &probe),
            Err(RunnerError::HomeDirectoryNotFound)
        ));
    }
}
