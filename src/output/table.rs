//! End-of-batch summary table

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::batch::BatchReport;

/// One organization in the summary table
#[derive(Debug, Tabled)]
struct OutcomeRow {
    #[tabled(rename = "ORGANIZATION")]
    org: String,
    #[tabled(rename = "RESULT")]
    result: String,
}

/// Format a batch report as a table, one row per organization
pub fn format_report(report: &BatchReport) -> String {
    if report.results.is_empty() {
        return "No organizations to process.".to_string();
    }

    let rows: Vec<OutcomeRow> = report
        .results
        .iter()
        .map(|r| OutcomeRow {
            org: r.org.clone(),
            result: match &r.members {
                Some(members) => format!("{} ({} members)", r.outcome, members.len()),
                None => r.outcome.to_string(),
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
