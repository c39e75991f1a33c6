use std::path::Path;

use anyhow::Result;
use devsetup::{installers, preflight};

pub fn run(file: &Path) -> Result<()> {
    preflight::require_tools(&[installers::PACKAGE_MANAGER])?;

    let result = super::install_pass("apps", file, installers::brew_install)?;
    super::report_failures(&result.failed);

    Ok(())
}
