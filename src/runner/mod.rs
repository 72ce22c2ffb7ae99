//! Local process execution.
//!
//! [`LocalRunner`] spawns a subprocess for a command line, optionally
//! attaches the caller's terminal and a progress indicator, waits for
//! completion, and reports captured output plus exit status. It also
//! carries the small local-system helpers the CLI needs: `~`-aware file
//! access, default-browser launch, and home-directory detection.

mod opener;
mod paths;
mod progress;
mod tty;

pub use opener::Platform;
pub use tty::TtyMode;

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::context::ServiceContext;
use crate::error::RunnerError;

/// Fixed upper bound on subprocess runtime.
pub const PROCESS_TIMEOUT: Duration = Duration::from_secs(600);

/// Interval between completion checks while waiting on a child.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Interval between progress indicator frames.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// The outcome of one command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Captured standard output (empty for terminal-attached runs).
    pub output: String,
    /// Exit code of the process; `-1` when terminated by a signal.
    pub exit_code: i32,
}

/// A command to execute, either as a shell line or an argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    /// A single line interpreted by the system shell.
    Shell(String),
    /// A program and its arguments, spawned directly.
    Argv(Vec<String>),
}

impl CommandLine {
    fn to_command(&self) -> Command {
        match self {
            Self::Shell(line) => {
                if cfg!(windows) {
                    let mut cmd = Command::new("cmd");
                    cmd.arg("/C").arg(line);
                    cmd
                } else {
                    let mut cmd = Command::new("sh");
                    cmd.arg("-c").arg(line);
                    cmd
                }
            }
            Self::Argv(argv) => {
                let mut cmd = Command::new(argv.first().map_or("", String::as_str));
                cmd.args(argv.iter().skip(1));
                cmd
            }
        }
    }

    fn display(&self) -> String {
        match self {
            Self::Shell(line) => line.clone(),
            Self::Argv(argv) => argv.join(" "),
        }
    }
}

impl From<&str> for CommandLine {
    fn from(line: &str) -> Self {
        Self::Shell(line.to_string())
    }
}

impl From<String> for CommandLine {
    fn from(line: String) -> Self {
        Self::Shell(line)
    }
}

impl From<Vec<String>> for CommandLine {
    fn from(argv: Vec<String>) -> Self {
        Self::Argv(argv)
    }
}

/// Executes commands on the local machine and reports their outcome.
///
/// Every operation is synchronous: it either returns promptly or blocks
/// the calling thread until the subprocess completes. The progress
/// indicator is a cooperative poll cycle on the same thread, not a
/// separate scheduling entity.
pub struct LocalRunner<'a> {
    ctx: &'a ServiceContext,
    interactive: bool,
}

impl<'a> LocalRunner<'a> {
    /// Creates a runner whose interactivity is derived from whether both
    /// standard streams are attached to a terminal.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        let interactive = ctx.probe.stdin_is_terminal() && ctx.probe.stdout_is_terminal();
        Self { ctx, interactive }
    }

    /// Creates a runner with an explicit interactivity flag (e.g. from a
    /// `--no-interaction` option).
    #[must_use]
    pub fn with_interactivity(ctx: &'a ServiceContext, interactive: bool) -> Self {
        Self { ctx, interactive }
    }

    /// Runs a command to completion, capturing its standard output.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Spawn`] when the executable cannot be located
    /// or started, [`RunnerError::Timeout`] when the fixed timeout elapses,
    /// and [`RunnerError::ProcessIo`] on read/wait failures. A non-zero
    /// exit status is not an error; it is reported in the result.
    pub fn run(&self, command: &CommandLine) -> Result<CommandResult, RunnerError> {
        self.run_captured(command, None)
    }

    /// Runs a command, streaming each output line to `on_line` as it
    /// arrives. The full output is still collected into the result.
    ///
    /// # Errors
    ///
    /// Same error conditions as [`LocalRunner::run`].
    pub fn run_with(
        &self,
        command: &CommandLine,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<CommandResult, RunnerError> {
        self.run_captured(command, Some(on_line))
    }

    /// Runs a command with terminal semantics resolved per call.
    ///
    /// When the resolved [`TtyMode`] attaches the terminal, the child
    /// inherits all three standard streams; with `allow_progress` the
    /// runner drives a cyclical progress display until completion.
    /// Otherwise the command runs in captured mode with the optional
    /// callback. Terminal-attached runs report an empty `output`.
    ///
    /// # Errors
    ///
    /// Same error conditions as [`LocalRunner::run`].
    pub fn run_interactive(
        &self,
        command: &CommandLine,
        on_line: Option<&mut dyn FnMut(&str)>,
        allow_progress: bool,
    ) -> Result<CommandResult, RunnerError> {
        match TtyMode::resolve(self.interactive, self.ctx.probe.as_ref()) {
            TtyMode::ForcedOn => self.run_attached(command, allow_progress),
            TtyMode::ForcedOff | TtyMode::Auto => self.run_captured(command, on_line),
        }
    }

    /// Opens a URL in the default browser of the detected platform.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::UnsupportedPlatform`] when no opener is known
    /// for the reported OS (nothing is spawned), or a spawn/run error from
    /// executing the opener.
    pub fn open_url(&self, url: &str) -> Result<(), RunnerError> {
        let os = self.ctx.probe.os_name();
        let opener = opener::opener_for(&os)?;
        let mut argv: Vec<String> = opener.iter().map(ToString::to_string).collect();
        argv.push(url.to_string());
        self.run(&CommandLine::Argv(argv))?;
        Ok(())
    }

    /// Reads a file, expanding `~` and normalizing separators first.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::FileAccess`] on I/O failure and
    /// [`RunnerError::HomeDirectoryNotFound`] when `~` cannot be expanded.
    pub fn read_file(&self, path: &str) -> Result<String, RunnerError> {
        let fixed = self.fix_filename(path)?;
        self.ctx.fs.read_to_string(&fixed).map_err(|e| RunnerError::FileAccess {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Writes a file, expanding `~` and normalizing separators first.
    ///
    /// # Errors
    ///
    /// Same error conditions as [`LocalRunner::read_file`].
    pub fn write_file(&self, path: &str, contents: &str) -> Result<(), RunnerError> {
        let fixed = self.fix_filename(path)?;
        self.ctx.fs.write(&fixed, contents).map_err(|e| RunnerError::FileAccess {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Determines the user's home directory from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::HomeDirectoryNotFound`] when no usable
    /// source is set.
    pub fn home_directory(&self) -> Result<String, RunnerError> {
        paths::home_directory(self.ctx.probe.as_ref())
    }

    /// Expands `~` and normalizes separators in a caller-supplied path.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::HomeDirectoryNotFound`] when the path starts
    /// with `~` and no home directory can be determined.
    pub fn fix_filename(&self, path: &str) -> Result<PathBuf, RunnerError> {
        paths::fix_filename(path, self.ctx.probe.as_ref())
    }

    fn run_captured(
        &self,
        command: &CommandLine,
        mut on_line: Option<&mut dyn FnMut(&str)>,
    ) -> Result<CommandResult, RunnerError> {
        let mut cmd = command.to_command();
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::inherit());
        // Piped input passes through; with a terminal on stdin the child
        // gets no input so it cannot block waiting for keystrokes.
        cmd.stdin(if self.ctx.probe.stdin_is_terminal() {
            Stdio::null()
        } else {
            Stdio::inherit()
        });

        let mut child = cmd
            .spawn()
            .map_err(|source| RunnerError::Spawn { command: command.display(), source })?;
        let deadline = Instant::now() + PROCESS_TIMEOUT;

        let mut output = String::new();
        if let Some(stdout) = child.stdout.take() {
            let mut reader = BufReader::new(stdout);
            let mut buf = Vec::new();
            loop {
                if Instant::now() >= deadline {
                    return Err(kill_timed_out(&mut child, command));
                }
                buf.clear();
                let n = reader.read_until(b'\n', &mut buf).map_err(|source| {
                    RunnerError::ProcessIo { command: command.display(), source }
                })?;
                if n == 0 {
                    break;
                }
                let chunk = String::from_utf8_lossy(&buf);
                if let Some(cb) = on_line.as_deref_mut() {
                    cb(chunk.trim_end_matches(['\r', '\n']));
                }
                output.push_str(&chunk);
            }
        }

        let exit_code = wait_with_deadline(&mut child, deadline, command)?;
        Ok(CommandResult { output, exit_code })
    }

    fn run_attached(
        &self,
        command: &CommandLine,
        show_progress: bool,
    ) -> Result<CommandResult, RunnerError> {
        let mut cmd = command.to_command();
        cmd.stdin(Stdio::inherit()).stdout(Stdio::inherit()).stderr(Stdio::inherit());

        let mut child = cmd
            .spawn()
            .map_err(|source| RunnerError::Spawn { command: command.display(), source })?;
        let deadline = Instant::now() + PROCESS_TIMEOUT;

        let exit_code = if show_progress {
            let mut indicator = progress::Progress::new();
            let mut stderr = std::io::stderr();
            let code = loop {
                match child.try_wait().map_err(|source| RunnerError::ProcessIo {
                    command: command.display(),
                    source,
                })? {
                    Some(status) => break exit_code_of(status),
                    None => {
                        if Instant::now() >= deadline {
                            let _ = indicator.clear(&mut stderr);
                            return Err(kill_timed_out(&mut child, command));
                        }
                        let _ = indicator.tick(&mut stderr);
                        std::thread::sleep(TICK_INTERVAL);
                    }
                }
            };
            let _ = indicator.clear(&mut stderr);
            code
        } else {
            wait_with_deadline(&mut child, deadline, command)?
        };

        Ok(CommandResult { output: String::new(), exit_code })
    }
}

fn wait_with_deadline(
    child: &mut Child,
    deadline: Instant,
    command: &CommandLine,
) -> Result<i32, RunnerError> {
    loop {
        match child
            .try_wait()
            .map_err(|source| RunnerError::ProcessIo { command: command.display(), source })?
        {
            Some(status) => return Ok(exit_code_of(status)),
            None => {
                if Instant::now() >= deadline {
                    return Err(kill_timed_out(child, command));
                }
                std::thread::sleep(POLL_INTERVAL);
            }
        }
    }
}

fn kill_timed_out(child: &mut Child, command: &CommandLine) -> RunnerError {
    let _ = child.kill();
    let _ = child.wait();
    RunnerError::Timeout { command: command.display(), limit: PROCESS_TIMEOUT }
}

fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
