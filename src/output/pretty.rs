//! Human-readable text formatter.
//!
//! The single-skill layout is a header naming the path followed by one
//! `VALID: <message>` or `INVALID: <message>` line. Colour codes are added
//! by [colored] and can be disabled globally with
//! `colored::control::set_override(false)`.

use crate::report::{CollectionReport, ValidationReport};
use colored::Colorize;

pub fn format(report: &ValidationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Validating skill: {}\n\n",
        report.skill_path.display()
    ));

    let status = if report.valid {
        "VALID".green().bold().to_string()
    } else {
        "INVALID".red().bold().to_string()
    };
    out.push_str(&format!("{status}: {}\n", report.message));
    out
}

/// Renders one line per skill followed by a totals line.
pub fn format_collection(report: &CollectionReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Validating skills in: {}\n\n",
        report.collection.display()
    ));

    for r in &report.reports {
        // Pad before colouring so escape codes don't skew the column width.
        let status = if r.valid {
            format!("{:<7}", "VALID").green().bold().to_string()
        } else {
            format!("{:<7}", "INVALID").red().bold().to_string()
        };
        out.push_str(&format!(
            "  {status}  {name:<24} {message}\n",
            name = r.label(),
            message = r.message,
        ));
    }

    let (valid, invalid) = report.counts();
    out.push_str(&format!(
        "\nTotal: {}, {}\n",
        format!("{valid} valid").green(),
        if invalid > 0 {
            format!("{invalid} invalid").red().bold().to_string()
        } else {
            format!("{invalid} invalid")
        },
    ));
    out
}
