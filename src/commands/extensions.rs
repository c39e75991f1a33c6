use std::path::Path;

use anyhow::Result;
use devsetup::{installers, preflight};

pub fn run(file: &Path) -> Result<()> {
    preflight::require_tools(&[installers::EDITOR_CLI])?;

    let result = super::install_pass("extensions", file, installers::code_install_extension)?;
    super::report_failures(&result.failed);

    Ok(())
}
