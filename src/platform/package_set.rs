//! Package sets and package manager invocations.

use std::fmt;

use serde::Serialize;

use crate::shell::Invocation;

/// ALSA headers for audio output and fontconfig headers for text rendering.
pub(crate) const UBUNTU_PACKAGES: &[&str] = &["libasound2-dev", "libfontconfig-dev"];

/// macOS agents already ship CoreAudio and CoreText.
pub(crate) const MACOS_PACKAGES: &[&str] = &[];

/// An ordered, fixed list of native package names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageSet {
    packages: &'static [&'static str],
}

impl PackageSet {
    pub(crate) const fn new(packages: &'static [&'static str]) -> Self {
        Self { packages }
    }

    /// Package names in install order.
    pub fn packages(&self) -> &'static [&'static str] {
        self.packages
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }
}

impl fmt::Display for PackageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.packages.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&self.packages.join(" "))
        }
    }
}

/// System package managers depstrap knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageManagerKind {
    /// Debian/Ubuntu `apt-get`.
    Apt,
}

impl PackageManagerKind {
    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            Self::Apt => "apt-get",
        }
    }

    /// Invocation that refreshes the package index.
    pub fn refresh_invocation(&self) -> Invocation {
        match self {
            Self::Apt => Invocation::new(self.program(), ["update"]),
        }
    }

    /// Non-interactive invocation that installs `packages` in one call.
    pub fn install_invocation(&self, packages: &PackageSet) -> Invocation {
        match self {
            Self::Apt => Invocation::new(self.program(), ["install", "-y"])
                .with_args(packages.packages().iter().copied()),
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
