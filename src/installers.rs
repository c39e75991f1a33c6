use std::process::Command;

/// Tools the installers shell out to. Probed before any pass runs.
pub const PACKAGE_MANAGER: &str = "brew";
pub const EDITOR_CLI: &str = "code";

/// Installs one Homebrew package. A spawn error counts as a failure for
/// that package, same as a nonzero exit.
pub fn brew_install(package: &str) -> bool {
    Command::new(PACKAGE_MANAGER)
        .args(["install", package])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Installs one VS Code extension. `--force` overwrites an existing install,
/// so re-running against the same list is safe.
pub fn code_install_extension(id: &str) -> bool {
    Command::new(EDITOR_CLI)
        .args(["--install-extension", id, "--force"])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
