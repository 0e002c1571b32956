//! Recognized build agents and the native packages each one needs.
//!
//! - [`OsIdentifier`] - the closed set of CI operating-system tokens
//! - [`PackageSet`] - the ordered packages installed for an identifier
//! - [`PackageManagerKind`] - the system package manager used to install them

pub mod identifier;
pub mod package_set;

pub use identifier::OsIdentifier;
pub use package_set::{PackageManagerKind, PackageSet};
