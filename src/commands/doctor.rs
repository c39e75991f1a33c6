use anyhow::{Result, bail};
use devsetup::{installers, preflight};

pub fn run() -> Result<()> {
    let mut missing = 0;

    for tool in [installers::PACKAGE_MANAGER, installers::EDITOR_CLI] {
        if preflight::tool_available(tool) {
            println!("{tool}: ok");
        } else {
            println!("{tool}: NOT FOUND");
            missing += 1;
        }
    }

    if missing > 0 {
        bail!("{missing} required tool(s) missing — install them and re-run");
    }

    println!("All required tools present.");
    Ok(())
}
