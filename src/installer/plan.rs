//! Install plan resolution.

use crate::platform::{OsIdentifier, PackageSet};
use crate::shell::Invocation;

/// Knobs that change how packages are installed, not which.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Refresh the package index before installing.
    pub refresh_index: bool,
    /// Wrap package manager commands in `sudo`.
    pub use_sudo: bool,
    /// Resolve the plan without running it.
    pub dry_run: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            refresh_index: false,
            use_sudo: true,
            dry_run: false,
        }
    }
}

/// The ordered commands that install an OS's package set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    os: OsIdentifier,
    invocations: Vec<Invocation>,
}

impl InstallPlan {
    pub fn os(&self) -> OsIdentifier {
        self.os
    }

    pub fn packages(&self) -> PackageSet {
        self.os.package_set()
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// True when nothing needs to run.
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }
}

/// Resolve the commands that install `os`'s package set.
///
/// An OS with an empty package set gets an empty plan, even with
/// `refresh_index`.
pub fn plan(os: OsIdentifier, options: &InstallOptions) -> InstallPlan {
    let packages = os.package_set();
    let mut invocations = Vec::new();

    if let Some(manager) = os.package_manager().filter(|_| !packages.is_empty()) {
        if options.refresh_index {
            invocations.push(manager.refresh_invocation());
        }
        invocations.push(manager.install_invocation(&packages));
    }

    if options.use_sudo {
        invocations = invocations.into_iter().map(Invocation::elevated).collect();
    }

    InstallPlan { os, invocations }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ubuntu_plan_is_single_install() {
        let plan = plan(
            OsIdentifier::UbuntuLatest,
            &InstallOptions {
                use_sudo: false,
                ..Default::default()
            },
        );
        assert_eq!(plan.os(), OsIdentifier::UbuntuLatest);
        assert_eq!(plan.invocations().len(), 1);
        assert_eq!(
            plan.invocations()[0].to_string(),
            "apt-get install -y libasound2-dev libfontconfig-dev"
        );
    }

    #[test]
    fn default_options_use_sudo() {
        let plan = plan(OsIdentifier::UbuntuLatest, &InstallOptions::default());
        assert!(plan.invocations().iter().all(|i| i.program() == "sudo"));
    }

    #[test]
    fn sudo_wraps_every_invocation() {
        let plan = plan(
            OsIdentifier::UbuntuLatest,
            &InstallOptions {
                refresh_index: true,
                use_sudo: true,
                dry_run: false,
            },
        );
        let commands: Vec<String> = plan.invocations().iter().map(|i| i.to_string()).collect();
        assert_eq!(
            commands,
            vec![
                "sudo apt-get update",
                "sudo apt-get install -y libasound2-dev libfontconfig-dev"
            ]
        );
    }

    #[test]
    fn macos_plan_is_empty() {
        let plan = plan(
            OsIdentifier::MacosLatest,
            &InstallOptions {
                refresh_index: true,
                ..Default::default()
            },
        );
        assert!(plan.is_empty());
        assert!(plan.packages().is_empty());
    }
}
