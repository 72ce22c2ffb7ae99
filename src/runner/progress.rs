//! Cyclical progress indicator for long-running subprocesses.

use std::io::Write;

/// Frames cycled while a child process runs.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A single-line liveness indicator.
///
/// Each tick rewrites the current line with the next frame; `clear`
/// erases it once the subprocess has finished.
pub(crate) struct Progress {
    index: usize,
}

impl Progress {
    pub(crate) fn new() -> Self {
        Self { index: 0 }
    }

    /// Draws the next frame onto `out`.
    pub(crate) fn tick(&mut self, out: &mut dyn Write) -> std::io::Result<()> {
        let frame = FRAMES[self.index % FRAMES.len()];
        self.index += 1;
        write!(out, "\r{frame} ")?;
        out.flush()
    }

    /// Erases the indicator line.
    pub(crate) fn clear(&self, out: &mut dyn Write) -> std::io::Result<()> {
        write!(out, "\r  \r")?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_cycle_in_order() {
        let mut progress = Progress::new();
        let mut out = Vec::new();
        for _ in 0..FRAMES.len() + 1 {
            progress.tick(&mut out).unwrap();
        }
        let drawn = String::from_utf8(out).unwrap();

        assert!(drawn.starts_with(&format!("\r{} ", FRAMES[0])));
        // Wraps around after the last frame.
        assert!(drawn.ends_with(&format!("\r{} ", FRAMES[0])));
    }

    #[test]
    fn clear_rewrites_the_line_with_blanks() {
        let progress = Progress::new();
        let mut out = Vec::new();
        progress.clear(&mut out).unwrap();
        assert_eq!(out, b"\r  \r");
    }
}
