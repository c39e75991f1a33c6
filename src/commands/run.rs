use std::path::Path;

use anyhow::{Result, bail};
use devsetup::{installers, preflight};

pub fn run(apps_file: &Path, extensions_file: &Path, strict: bool) -> Result<()> {
    // Both tools are probed before any install so one run reports every
    // missing dependency.
    preflight::require_tools(&[installers::PACKAGE_MANAGER, installers::EDITOR_CLI])?;

    let apps = super::install_pass("apps", apps_file, installers::brew_install)?;
    println!();
    let extensions =
        super::install_pass("extensions", extensions_file, installers::code_install_extension)?;

    let failed = apps.failed.len() + extensions.failed.len();
    println!();
    println!(
        "Setup complete: {} attempted, {} installed, {failed} failed",
        apps.attempted + extensions.attempted,
        apps.succeeded + extensions.succeeded
    );

    if failed > 0 {
        let all_failed: Vec<String> =
            apps.failed.iter().chain(&extensions.failed).cloned().collect();
        super::report_failures(&all_failed);

        if strict {
            bail!("{failed} items failed to install");
        }
    }

    Ok(())
}
