//! Output formatting for validation reports.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//! | [`Sarif`](OutputFormat::Sarif)   | [`sarif`]  | CI/CD integration       |

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::report::{CollectionReport, ValidationReport};

/// Supported output formats.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `VALID:` / `INVALID:` lines for humans.
    #[default]
    Pretty,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

/// Formats a single-skill report.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_validate::output::{format_report, OutputFormat};
/// use skill_validate::report::ValidationReport;
///
/// let report = ValidationReport::run(Path::new("./my-skill"));
/// print!("{}", format_report(&report, OutputFormat::Pretty)?);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn format_report(
    report: &ValidationReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format(report)),
        OutputFormat::Json => json::format(report),
        OutputFormat::Sarif => sarif::format(std::slice::from_ref(report)),
    }
}

/// Formats the reports of a whole collection.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
pub fn format_collection(
    report: &CollectionReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_collection(report)),
        OutputFormat::Json => json::format_collection(report),
        OutputFormat::Sarif => sarif::format(&report.reports),
    }
}
