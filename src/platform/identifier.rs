//! OS identifier parsing.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DepstrapError;

use super::package_set::{PackageManagerKind, PackageSet, MACOS_PACKAGES, UBUNTU_PACKAGES};

/// A build-agent operating system, as named in a CI job matrix.
///
/// Parsing is exact: `Ubuntu-Latest` and `ubuntu-latest ` are not
/// `ubuntu-latest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OsIdentifier {
    #[serde(rename = "ubuntu-latest")]
    UbuntuLatest,
    #[serde(rename = "macos-latest")]
    MacosLatest,
}

impl OsIdentifier {
    /// Every recognized identifier, in listing order.
    pub fn all() -> &'static [OsIdentifier] {
        &[OsIdentifier::UbuntuLatest, OsIdentifier::MacosLatest]
    }

    /// Names of every recognized identifier.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|os| os.as_str()).collect()
    }

    /// The token this identifier is spelled as.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UbuntuLatest => "ubuntu-latest",
            Self::MacosLatest => "macos-latest",
        }
    }

    /// Native packages the agent needs.
    pub fn package_set(&self) -> PackageSet {
        match self {
            Self::UbuntuLatest => PackageSet::new(UBUNTU_PACKAGES),
            Self::MacosLatest => PackageSet::new(MACOS_PACKAGES),
        }
    }

    /// Package manager used to install [`package_set`](Self::package_set).
    ///
    /// `None` when the agent ships everything already.
    pub fn package_manager(&self) -> Option<PackageManagerKind> {
        match self {
            Self::UbuntuLatest => Some(PackageManagerKind::Apt),
            Self::MacosLatest => None,
        }
    }
}

impl FromStr for OsIdentifier {
    type Err = DepstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|os| os.as_str() == s)
            .ok_or_else(|| DepstrapError::UnrecognizedOs {
                token: s.to_string(),
            })
    }
}

impl fmt::Display for OsIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
