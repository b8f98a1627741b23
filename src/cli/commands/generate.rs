use crate::cli::commands::{report_issues, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{self, RunRequest};
use crate::errors::AppResult;
use crate::export::OverwriteMode;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `generate` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        base_dir,
        month,
        force,
        sort,
    } = cmd
    {
        let month = resolve_month(month.as_deref())?;
        let mut req = RunRequest::new(expand_tilde(base_dir), month);
        req.overwrite = if *force {
            OverwriteMode::Force
        } else {
            OverwriteMode::Ask
        };
        req.sort = *sort;

        info(format!(
            "Using monthly folder: {}",
            req.base_dir.join(month.to_string()).display()
        ));

        let report = pipeline::run(&req, cfg)?;

        report_issues(&report.issues, &cfg.roster_file);
        success(format!(
            "TimeSheet has been generated: {} ({} entries from row {})",
            report.output_path.display(),
            report.entries_written,
            report.first_row
        ));
    }
    Ok(())
}
