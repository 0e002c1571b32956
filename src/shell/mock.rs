//! Recording command runner for testing.
//!
//! `RecordingRunner` implements [`CommandRunner`] without spawning
//! anything. It captures every invocation and answers with scripted exit
//! codes.
//!
//! # Example
//!
//! ```
//! use depstrap::shell::{CommandRunner, Invocation, RecordingRunner};
//!
//! let runner = RecordingRunner::new();
//! runner.fail_with("apt-get update", 100);
//!
//! let status = runner.run(&Invocation::new("apt-get", ["update"])).unwrap();
//! assert_eq!(status.exit_code, Some(100));
//! assert_eq!(runner.commands(), vec!["apt-get update".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::Result;

use super::command::{CommandRunner, CommandStatus, Invocation};

/// Command runner that records invocations instead of running them.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
    exit_codes: RefCell<HashMap<String, i32>>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the command whose display form is `command` exit with `code`.
    pub fn fail_with(&self, command: &str, code: i32) {
        self.exit_codes
            .borrow_mut()
            .insert(command.to_string(), code);
    }

    /// Every invocation run so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Display form of every invocation run so far.
    pub fn commands(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|inv| inv.to_string())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus> {
        self.invocations.borrow_mut().push(invocation.clone());
        let code = self
            .exit_codes
            .borrow()
            .get(&invocation.to_string())
            .copied()
            .unwrap_or(0);
        Ok(CommandStatus::exited(code, Duration::ZERO))
    }
}
