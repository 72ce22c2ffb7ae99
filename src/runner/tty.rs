//! TTY decision for interactive runs.

use crate::ports::env::SystemProbe;

/// How the runner attaches the terminal for one execution.
///
/// The decision is resolved once per call rather than carried around as a
/// nullable boolean, so call sites never see an undetermined state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtyMode {
    /// Attach the child to the caller's terminal.
    ForcedOn,
    /// Never attach a terminal; capture output instead.
    ForcedOff,
    /// Leave it to the runner's own detection (with stdout redirected this
    /// resolves to captured mode).
    Auto,
}

impl TtyMode {
    /// Resolves the TTY decision for one execution.
    ///
    /// A non-interactive caller never gets a terminal. An interactive
    /// caller gets one when stdout is actually a terminal; with stdout
    /// redirected the decision stays [`TtyMode::Auto`].
    #[must_use]
    pub fn resolve(interactive: bool, probe: &dyn SystemProbe) -> Self {
        if !interactive {
            Self::ForcedOff
        } else if probe.stdout_is_terminal() {
            Self::ForcedOn
        } else {
            Self::Auto
        }
    }

    /// Returns `true` when this decision attaches the caller's terminal.
    #[must_use]
    pub fn attaches_terminal(self) -> bool {
        matches!(self, Self::ForcedOn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::FixedProbe;

    #[test]
    fn non_interactive_caller_never_gets_a_tty() {
        let probe = FixedProbe::new("linux").with_terminal(true, true);
        let mode = TtyMode::resolve(false, &probe);
        assert_eq!(mode, TtyMode::ForcedOff);
        assert!(!mode.attaches_terminal());
    }

    #[test]
    fn interactive_caller_with_terminal_stdout_gets_a_tty() {
        let probe = FixedProbe::new("linux").with_terminal(true, true);
        let mode = TtyMode::resolve(true, &probe);
        assert_eq!(mode, TtyMode::ForcedOn);
        assert!(mode.attaches_terminal());
    }

    #[test]
    fn redirected_stdout_leaves_the_decision_to_the_runner() {
        let probe = FixedProbe::new("linux").with_terminal(true, false);
        let mode = TtyMode::resolve(true, &probe);
        assert_eq!(mode, TtyMode::Auto);
        assert!(!mode.attaches_terminal());
    }
}
