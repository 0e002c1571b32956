//! List command implementation.
//!
//! `depstrap list` shows every recognized OS identifier and its packages.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::platform::{OsIdentifier, PackageManagerKind, PackageSet};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// One row of `list` output.
#[derive(Debug, Serialize)]
pub struct ListEntry {
    pub os: OsIdentifier,
    pub package_manager: Option<PackageManagerKind>,
    pub packages: PackageSet,
}

impl From<OsIdentifier> for ListEntry {
    fn from(os: OsIdentifier) -> Self {
        Self {
            os,
            package_manager: os.package_manager(),
            packages: os.package_set(),
        }
    }
}

/// Every recognized identifier as a list entry.
pub fn entries() -> Vec<ListEntry> {
    OsIdentifier::all().iter().copied().map(ListEntry::from).collect()
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = entries();

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| anyhow::anyhow!("Failed to serialize OS list: {}", e))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        for entry in &entries {
            let manager = entry
                .package_manager
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string());
            ui.message(&format!(
                "{:<16} {:<8} {}",
                entry.os.as_str(),
                manager,
                entry.packages
            ));
        }

        Ok(CommandResult::success())
    }
}
