//! External command execution.

use std::fmt;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{DepstrapError, Result};

/// A program and its arguments, run without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Create an invocation of `program` with `args`.
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Append more arguments.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Wrap this invocation in `sudo`.
    pub fn elevated(self) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: "sudo".to_string(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a finished command exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandStatus {
    /// Status of a command that exited with `code`.
    pub fn exited(code: i32, duration: Duration) -> Self {
        Self {
            exit_code: Some(code),
            duration,
        }
    }

    /// Whether the command exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs invocations to completion.
///
/// Implemented by [`SystemRunner`] for real processes and by
/// [`RecordingRunner`](super::RecordingRunner) in tests.
pub trait CommandRunner {
    /// Run `invocation` and wait for it to exit.
    ///
    /// A non-zero exit is reported through [`CommandStatus`], not as an error.
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus>;
}

/// Runs invocations as child processes sharing this process's stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus> {
        let start = Instant::now();

        tracing::debug!("Spawning: {}", invocation);

        let status = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| DepstrapError::CommandSpawn {
                command: invocation.to_string(),
                source,
            })?;

        let result = CommandStatus {
            exit_code: status.code(),
            duration: start.elapsed(),
        };

        tracing::debug!(
            "'{}' exited with {:?} after {:?}",
            invocation,
            result.exit_code,
            result.duration
        );

        Ok(result)
    }
}
