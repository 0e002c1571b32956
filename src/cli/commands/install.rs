//! Install command implementation.
//!
//! `depstrap install <OS>` (or just `depstrap <OS>`) installs the native
//! packages the build agent needs.

use crate::cli::args::{InstallArgs, InstallFlags};
use crate::error::Result;
use crate::installer::{self, InstallOptions, InstallOutcome};
use crate::platform::OsIdentifier;
use crate::shell::{is_ci, CommandRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    args: InstallArgs,
    flags: InstallFlags,
    runner: &'a dyn CommandRunner,
    elevated: bool,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    ///
    /// `elevated` says whether the process already runs as root; if not,
    /// package manager commands are wrapped in `sudo` unless `--no-sudo`.
    pub fn new(
        args: InstallArgs,
        flags: InstallFlags,
        runner: &'a dyn CommandRunner,
        elevated: bool,
    ) -> Self {
        Self {
            args,
            flags,
            runner,
            elevated,
        }
    }

    fn options(&self) -> InstallOptions {
        InstallOptions {
            refresh_index: self.flags.update,
            use_sudo: !self.elevated && !self.flags.no_sudo,
            dry_run: self.flags.dry_run,
        }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let os: OsIdentifier = self.args.token().parse()?;
        let options = self.options();
        let plan = installer::plan(os, &options);

        tracing::debug!("Installing for {} (ci: {}, {:?})", os, is_ci(), options);

        if options.refresh_index && plan.is_empty() {
            ui.warning(&format!(
                "--update has no effect for {}: nothing to install",
                os
            ));
        }

        if !options.dry_run && ui.output_mode().shows_commands() {
            for invocation in plan.invocations() {
                ui.show_command(&invocation.to_string());
            }
        }

        match installer::run_plan(plan, options.dry_run, self.runner)? {
            InstallOutcome::Installed { packages } => {
                ui.success(&format!(
                    "Installed {} packages for {}: {}",
                    packages.len(),
                    os,
                    packages
                ));
            }
            InstallOutcome::NothingToInstall => {
                ui.message(&format!("No native packages needed for {}", os));
            }
            InstallOutcome::DryRun { plan } => {
                ui.message(&format!("Running in dry-run mode for {}", os));
                if plan.is_empty() {
                    ui.message(&format!("No native packages needed for {}", os));
                }
                for invocation in plan.invocations() {
                    ui.show_command(&invocation.to_string());
                }
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DepstrapError;
    use crate::shell::RecordingRunner;
    use crate::ui::{MockUI, OutputMode};

    fn command<'a>(
        os: &str,
        flags: InstallFlags,
        runner: &'a RecordingRunner,
        elevated: bool,
    ) -> InstallCommand<'a> {
        let args = InstallArgs {
            os: Some(os.to_string()),
        };
        InstallCommand::new(args, flags, runner, elevated)
    }

    #[test]
    fn ubuntu_installs_and_reports_packages() {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let result = command("ubuntu-latest", InstallFlags::default(), &runner, true)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(
            runner.commands(),
            vec!["apt-get install -y libasound2-dev libfontconfig-dev"]
        );
        assert!(ui.has_success("libasound2-dev libfontconfig-dev"));
    }

    #[test]
    fn non_root_uses_sudo() {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        command("ubuntu-latest", InstallFlags::default(), &runner, false)
            .execute(&mut ui)
            .unwrap();
        assert_eq!(
            runner.commands(),
            vec!["sudo apt-get install -y libasound2-dev libfontconfig-dev"]
        );
    }

    #[test]
    fn no_sudo_flag_skips_sudo() {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let flags = InstallFlags {
            no_sudo: true,
            ..Default::default()
        };
        command("ubuntu-latest", flags, &runner, false)
            .execute(&mut ui)
            .unwrap();
        assert_eq!(
            runner.commands(),
            vec!["apt-get install -y libasound2-dev libfontconfig-dev"]
        );
    }

    #[test]
    fn macos_reports_no_op() {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let result = command("macos-latest", InstallFlags::default(), &runner, false)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(runner.invocations().is_empty());
        assert!(ui.has_message("No native packages needed for macos-latest"));
    }

    #[test]
    fn update_on_macos_warns() {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let flags = InstallFlags {
            update: true,
            ..Default::default()
        };
        command("macos-latest", flags, &runner, true)
            .execute(&mut ui)
            .unwrap();

        assert!(runner.invocations().is_empty());
        assert!(ui.has_warning("--update has no effect for macos-latest"));
    }

    #[test]
    fn update_on_ubuntu_does_not_warn() {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let flags = InstallFlags {
            update: true,
            ..Default::default()
        };
        command("ubuntu-latest", flags, &runner, true)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.warnings().is_empty());
        assert_eq!(runner.invocations().len(), 2);
    }

    #[test]
    fn verbose_shows_exactly_what_runs() {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let flags = InstallFlags {
            update: true,
            ..Default::default()
        };
        command("ubuntu-latest", flags, &runner, false)
            .execute(&mut ui)
            .unwrap();
        assert_eq!(ui.commands(), runner.commands().as_slice());
    }

    #[test]
    fn unknown_os_fails_with_token() {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let err = command("windows-latest", InstallFlags::default(), &runner, true)
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, DepstrapError::UnrecognizedOs { .. }));
        assert!(err.to_string().contains("windows-latest"));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn dry_run_shows_commands_without_running() {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();
        let flags = InstallFlags {
            dry_run: true,
            update: true,
            ..Default::default()
        };
        command("ubuntu-latest", flags, &runner, true)
            .execute(&mut ui)
            .unwrap();

        assert!(runner.invocations().is_empty());
        assert!(ui.has_message("dry-run mode"));
        assert_eq!(
            ui.commands(),
            &[
                "apt-get update",
                "apt-get install -y libasound2-dev libfontconfig-dev"
            ]
        );
    }

    #[test]
    fn verbose_shows_commands_before_running() {
        let runner = RecordingRunner::new();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        command("ubuntu-latest", InstallFlags::default(), &runner, true)
            .execute(&mut ui)
            .unwrap();
        assert_eq!(
            ui.commands(),
            &["apt-get install -y libasound2-dev libfontconfig-dev"]
        );
        assert_eq!(runner.invocations().len(), 1);
    }

    #[test]
    fn package_manager_failure_propagates() {
        let runner = RecordingRunner::new();
        runner.fail_with("apt-get install -y libasound2-dev libfontconfig-dev", 100);
        let mut ui = MockUI::new();
        let err = command("ubuntu-latest", InstallFlags::default(), &runner, true)
            .execute(&mut ui)
            .unwrap_err();
        assert_eq!(err.exit_code(), 100);
        assert!(ui.successes().is_empty());
    }
}
