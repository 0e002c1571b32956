//! depstrap - Install native build dependencies for a CI agent.
//!
//! A CI job matrix calls `depstrap <OS>` once per agent. Ubuntu agents get
//! the ALSA and fontconfig development headers through `apt-get`; macOS
//! agents need nothing; any other identifier fails the job.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Install planning and execution
//! - [`platform`] - Recognized OS identifiers and their package sets
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use depstrap::installer::{plan, InstallOptions};
//! use depstrap::platform::OsIdentifier;
//!
//! let os: OsIdentifier = "ubuntu-latest".parse().unwrap();
//! let plan = plan(os, &InstallOptions { use_sudo: false, ..Default::default() });
//! assert_eq!(
//!     plan.invocations()[0].to_string(),
//!     "apt-get install -y libasound2-dev libfontconfig-dev"
//! );
//!
//! assert!("windows-latest".parse::<OsIdentifier>().is_err());
//! ```

pub mod cli;
pub mod error;
pub mod installer;
pub mod platform;
pub mod shell;
pub mod ui;

pub use error::{DepstrapError, Result};
