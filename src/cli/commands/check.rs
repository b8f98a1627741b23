use crate::cli::commands::{report_issues, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{self, RunRequest};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

/// Handle the `check` subcommand: read and join everything, write nothing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { base_dir, month } = cmd {
        let month = resolve_month(month.as_deref())?;
        let req = RunRequest::new(expand_tilde(base_dir), month);

        let prepared = pipeline::prepare(&req, cfg)?;
        let agg = &prepared.aggregation;

        header(format!("Worklogs {}", month));
        info(format!(
            "{} employee(s) in {}",
            prepared.employees, cfg.roster_file
        ));

        let mut table = Table::new(["File", "Rows", "Entries", "Issues", "Status"]);
        for f in &agg.files {
            table.add_row(vec![
                f.file_name.clone(),
                f.rows.to_string(),
                f.entries.to_string(),
                f.issues.to_string(),
                if f.skipped { "skipped" } else { "ok" }.to_string(),
            ]);
        }
        print!("{}", table.render());
        println!();

        report_issues(&agg.issues, &cfg.roster_file);
        success(format!(
            "{} entries ready for {} (sheet '{}', from row {})",
            agg.entries.len(),
            prepared.output_path(month, cfg).display(),
            prepared.template.target_name(),
            prepared.first_row
        ));
    }
    Ok(())
}
