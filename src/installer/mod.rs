//! Native dependency installation for a CI build agent.
//!
//! Installation is split in two so it can be previewed:
//! - [`plan`] resolves an [`OsIdentifier`] into the ordered commands to run
//! - [`execute`] runs a plan through a [`CommandRunner`]
//!
//! [`install`] does both, or only the first in dry-run mode.
//!
//! # Example
//!
//! ```
//! use depstrap::installer::{install, InstallOptions, InstallOutcome};
//! use depstrap::platform::OsIdentifier;
//! use depstrap::shell::RecordingRunner;
//!
//! let runner = RecordingRunner::new();
//! let options = InstallOptions { use_sudo: false, ..Default::default() };
//! let outcome = install(OsIdentifier::UbuntuLatest, &options, &runner).unwrap();
//!
//! assert!(matches!(outcome, InstallOutcome::Installed { .. }));
//! assert_eq!(
//!     runner.commands(),
//!     vec!["apt-get install -y libasound2-dev libfontconfig-dev".to_string()]
//! );
//! ```

pub mod plan;

pub use plan::{plan, InstallOptions, InstallPlan};

use crate::error::{DepstrapError, Result};
use crate::platform::{OsIdentifier, PackageSet};
use crate::shell::CommandRunner;

/// What an install run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The package manager installed `packages`.
    Installed { packages: PackageSet },
    /// The OS needs no native packages; nothing ran.
    NothingToInstall,
    /// Dry run; `plan` was resolved but not executed.
    DryRun { plan: InstallPlan },
}

/// Run every command in `plan`, in order.
///
/// Stops at the first command that exits unsuccessfully and reports its
/// exit code. Nothing is retried.
pub fn execute(plan: &InstallPlan, runner: &dyn CommandRunner) -> Result<()> {
    for invocation in plan.invocations() {
        tracing::info!("Running: {}", invocation);
        let status = runner.run(invocation)?;
        if !status.success() {
            return Err(DepstrapError::PackageManagerFailed {
                command: invocation.to_string(),
                code: status.exit_code,
            });
        }
    }
    Ok(())
}

/// Install the native packages `os` needs.
pub fn install(
    os: OsIdentifier,
    options: &InstallOptions,
    runner: &dyn CommandRunner,
) -> Result<InstallOutcome> {
    let plan = plan(os, options);
    tracing::debug!("Resolved plan for {}: {:?}", os, plan);
    run_plan(plan, options.dry_run, runner)
}

/// Carry out an already resolved plan.
///
/// In dry-run mode the plan is handed back untouched.
pub fn run_plan(
    plan: InstallPlan,
    dry_run: bool,
    runner: &dyn CommandRunner,
) -> Result<InstallOutcome> {
    if dry_run {
        return Ok(InstallOutcome::DryRun { plan });
    }

    if plan.is_empty() {
        return Ok(InstallOutcome::NothingToInstall);
    }

    execute(&plan, runner)?;
    Ok(InstallOutcome::Installed {
        packages: plan.packages(),
    })
}

/// Parse `token` and install the packages it needs.
pub fn install_for_token(
    token: &str,
    options: &InstallOptions,
    runner: &dyn CommandRunner,
) -> Result<InstallOutcome> {
    let os: OsIdentifier = token.parse()?;
    install(os, options, runner)
}
