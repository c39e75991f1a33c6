use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    /// A missing list file is a configuration error, not a per-item failure.
    #[error("list file not found: {0}")]
    MissingFile(String),
    #[error("failed to read list file: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of one pass over a list file. `attempted` always equals
/// `succeeded + failed.len()`.
#[derive(Debug, Default)]
pub struct InstallResult {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: Vec<String>,
}

impl InstallResult {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Installs every item in the list file at `path`, one `install` call per
/// item, in file order.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. Duplicates
/// are installed once per occurrence. A failed item is recorded and the pass
/// continues — only a missing or unreadable file aborts.
///
/// `install` is the shell-out boundary: it reports per-item progress itself,
/// so attempts are visible as they happen rather than only in the summary.
pub fn run(path: &Path, mut install: impl FnMut(&str) -> bool) -> Result<InstallResult, BatchError> {
    if !path.exists() {
        return Err(BatchError::MissingFile(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let mut result = InstallResult::default();

    for line in content.lines() {
        let item = line.trim();
        if item.is_empty() || item.starts_with('#') {
            continue;
        }

        result.attempted += 1;
        if install(item) {
            result.succeeded += 1;
        } else {
            result.failed.push(item.to_string());
        }
    }

    Ok(result)
}
