//! Report rendering for aggregated scores.
//!
//! This module turns a [`ScoreReport`](crate::models::ScoreReport) into
//! a human-readable text block or a JSON document.

use crate::models::ScoreReport;
use anyhow::Result;

/// Generate the complete text report.
pub fn generate_text_report(report: &ScoreReport) -> String {
    let mut output = String::new();

    output.push_str(&generate_summary_section(report));
    output.push_str(&generate_breakdown_section(report));

    output
}

/// Generate the summary section.
fn generate_summary_section(report: &ScoreReport) -> String {
    let mut section = String::new();

    section.push_str("Organization Threat Report\n");
    section.push_str(&format!(
        "Generated: {}\n",
        report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "Departments: {} | Users scored: {}\n",
        report.metadata.departments, report.metadata.users
    ));
    section.push_str(&format!(
        "Aggregate score: {:.2} ({} {})\n",
        report.aggregate,
        report.level.emoji(),
        report.level
    ));
    section.push('\n');

    section
}

/// Generate the per-department breakdown section.
fn generate_breakdown_section(report: &ScoreReport) -> String {
    let mut section = String::new();

    section.push_str("Breakdown by department:\n");

    for row in &report.breakdown {
        section.push_str(&format!(
            "  #{} - {} users, mean {:.2}, importance {:.1}, contributes {:.2}\n",
            row.index + 1,
            row.users,
            row.mean,
            row.importance,
            row.contribution
        ));
    }

    section
}

/// Generate the report as pretty-printed JSON.
pub fn generate_json_report(report: &ScoreReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
