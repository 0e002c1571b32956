//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::shell::{is_elevated, CommandRunner, SystemRunner};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    runner: &'a dyn CommandRunner,
    elevated: bool,
}

impl CommandDispatcher<'static> {
    /// Create a dispatcher that runs real processes.
    pub fn new() -> Self {
        Self {
            runner: &SystemRunner,
            elevated: is_elevated(),
        }
    }
}

impl Default for CommandDispatcher<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandDispatcher<'a> {
    /// Create a dispatcher with an explicit runner and privilege level.
    pub fn with_runner(runner: &'a dyn CommandRunner, elevated: bool) -> Self {
        Self { runner, elevated }
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, the top-level OS argument is installed.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(
                    args.clone(),
                    cli.install,
                    self.runner,
                    self.elevated,
                );
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::install::InstallCommand::new(
                    cli.target.clone(),
                    cli.install,
                    self.runner,
                    self.elevated,
                );
                cmd.execute(ui)
            }
        }
    }
}
