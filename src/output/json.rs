//! JSON output formatter.

use crate::report::{CollectionReport, ValidationReport};

#[derive(serde::Serialize)]
struct CollectionOutput<'a> {
    collection: &'a std::path::Path,
    passed: bool,
    summary: Summary,
    skills: &'a [ValidationReport],
}

#[derive(serde::Serialize)]
struct Summary {
    total: usize,
    valid: usize,
    invalid: usize,
}

/// Formats a single report as pretty-printed JSON.
pub fn format(report: &ValidationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report).map(|s| s + "\n")
}

/// Formats a collection as a JSON document with a summary object and one
/// entry per skill.
pub fn format_collection(report: &CollectionReport) -> Result<String, serde_json::Error> {
    let (valid, invalid) = report.counts();
    let output = CollectionOutput {
        collection: &report.collection,
        passed: report.passed,
        summary: Summary {
            total: report.reports.len(),
            valid,
            invalid,
        },
        skills: &report.reports,
    };
    serde_json::to_string_pretty(&output).map(|s| s + "\n")
}
