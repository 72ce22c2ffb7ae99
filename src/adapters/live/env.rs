//! Live environment probe backed by `std::env` and the real terminal.

use std::io::IsTerminal;

use crate::ports::env::SystemProbe;

/// Live probe that reads the actual process environment.
pub struct LiveSystemProbe;

impl SystemProbe for LiveSystemProbe {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn os_name(&self) -> String {
        std::env::consts::OS.to_string()
    }

    fn stdin_is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn stdout_is_terminal(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_a_known_os_name() {
        let probe = LiveSystemProbe;
        assert!(!probe.os_name().is_empty());
    }

    #[test]
    fn missing_variable_is_none() {
        let probe = LiveSystemProbe;
        assert!(probe.var("SKIFF_TEST_VAR_THAT_IS_NEVER_SET").is_none());
    }

    #[test]
    fn path_variable_is_present() {
        let probe = LiveSystemProbe;
        assert!(probe.var("PATH").is_some());
    }
}
