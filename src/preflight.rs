use std::process::{Command, Stdio};

use anyhow::{Result, bail};

/// Presence probe: can the tool be found on PATH and executed. No version
/// negotiation, output discarded.
pub fn tool_available(tool: &str) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Probes every tool before failing, so a single run reports all missing
/// dependencies instead of stopping at the first one.
pub fn require_tools(tools: &[&str]) -> Result<()> {
    let missing: Vec<&str> = tools.iter().copied().filter(|t| !tool_available(t)).collect();

    if !missing.is_empty() {
        bail!(
            "required tools not found on PATH: {} — install them and re-run",
            missing.join(", ")
        );
    }

    Ok(())
}
