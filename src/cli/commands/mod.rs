pub mod check;
pub mod config;
pub mod generate;

use crate::errors::AppResult;
use crate::models::Issue;
use crate::ui::messages::{detail, info, warning};
use crate::utils::YearMonth;
use std::collections::BTreeSet;

/// Month given on the command line, or the current one.
pub(crate) fn resolve_month(month: Option<&str>) -> AppResult<YearMonth> {
    match month {
        Some(m) => m.parse(),
        None => Ok(YearMonth::current()),
    }
}

/// Print the non-fatal issues of a run, grouped by severity.
pub(crate) fn report_issues(issues: &[Issue], roster_file: &str) {
    let (errors, notes): (Vec<&Issue>, Vec<&Issue>) = issues.iter().partition(|i| i.is_error());

    for note in &notes {
        info(note);
    }

    if errors.is_empty() {
        return;
    }

    warning(format!(
        "{} problem(s) found; the affected rows were not transferred:",
        errors.len()
    ));
    for issue in &errors {
        detail(issue);
    }

    let unresolved: BTreeSet<&str> = errors
        .iter()
        .filter_map(|i| match i {
            Issue::UnresolvedReference { resource_no, .. } => Some(resource_no.as_str()),
            _ => None,
        })
        .collect();
    if !unresolved.is_empty() {
        warning(format!(
            "For some Resource No. entries no Personal Number was found in {}: {}",
            roster_file,
            unresolved.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }
}
