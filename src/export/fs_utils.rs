use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// What to do when the timesheet for the month already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Replace the file silently.
    Force,
    /// Ask on the terminal.
    Ask,
    /// Fail with `AppError::OutputRefused`.
    #[default]
    Refuse,
}

/// Check whether the output file may be created or replaced.
pub(crate) fn ensure_writable(path: &Path, mode: OverwriteMode) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    match mode {
        OverwriteMode::Force => {
            log::debug!("overwriting {}", path.display());
            Ok(())
        }
        OverwriteMode::Refuse => Err(AppError::OutputRefused(format!(
            "'{}' already exists (use --force to replace it)",
            path.display()
        ))),
        OverwriteMode::Ask => confirm_overwrite(path),
    }
}

fn confirm_overwrite(path: &Path) -> AppResult<()> {
    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::OutputRefused(format!(
            "existing file '{}' not overwritten",
            path.display()
        )))
    }
}
