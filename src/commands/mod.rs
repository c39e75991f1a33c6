pub mod apps;
pub mod doctor;
pub mod extensions;
pub mod run;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use devsetup::batch::{self, InstallResult};

/// Runs one list-file pass, streaming a line per attempt so progress is
/// visible while the external tool works.
fn install_pass(
    label: &str,
    path: &Path,
    mut install: impl FnMut(&str) -> bool,
) -> Result<InstallResult> {
    println!("Installing {label} from {}...", path.display());

    let result = batch::run(path, |item| {
        print!("  {item} ... ");
        let _ = io::stdout().flush();
        let ok = install(item);
        println!("{}", if ok { "ok" } else { "FAILED" });
        ok
    })?;

    if result.attempted == 0 {
        println!("  nothing to install");
    } else {
        println!(
            "{label}: {} attempted, {} installed, {} failed",
            result.attempted,
            result.succeeded,
            result.failed.len()
        );
    }

    Ok(result)
}

/// Enumerates every failed identifier so the user can retry by hand.
fn report_failures(failed: &[String]) {
    if failed.is_empty() {
        return;
    }
    println!("Retry these manually:");
    for item in failed {
        println!("  {item}");
    }
}
