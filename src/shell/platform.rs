//! Host environment probes.

/// Environment variables set by common CI providers.
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    ci_markers_present(|name| std::env::var_os(name).is_some())
}

fn ci_markers_present(is_set: impl Fn(&str) -> bool) -> bool {
    CI_MARKERS.iter().any(|&name| is_set(name))
}

/// Check if running as root.
///
/// Package installs are wrapped in `sudo` when this is false.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}
