//! Serializable validation reports.
//!
//! [`ValidationReport`] wraps the outcome of one skill directory for the
//! renderers in [`output`](crate::output); [`CollectionReport`] groups the
//! reports of a `--all` run.

use crate::error::{ErrorKind, ValidationError};
use crate::validator::{self, ValidSkill};
use std::path::{Path, PathBuf};

/// Result of validating one skill directory, in a serializable form.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationReport {
    /// Path as given by the caller.
    pub skill_path: PathBuf,
    /// Resolved skill directory, when validation got far enough to know it.
    pub skill_dir: Option<PathBuf>,
    /// Validated skill name; `None` when validation failed.
    pub skill: Option<String>,
    pub valid: bool,
    pub message: String,
    pub kind: Option<ErrorKind>,
    pub rule_id: Option<String>,
    pub remediation: Option<String>,
    pub timestamp: String,
}

impl ValidationReport {
    /// Builds a report from the outcome of
    /// [`validate_skill`](crate::validator::validate_skill).
    pub fn new(skill_path: &Path, result: &Result<ValidSkill, ValidationError>) -> Self {
        let timestamp = chrono::Utc::now().to_rfc3339();
        match result {
            Ok(skill) => ValidationReport {
                skill_path: skill_path.to_path_buf(),
                skill_dir: Some(skill.dir.clone()),
                skill: Some(skill.name.clone()),
                valid: true,
                message: skill.message(),
                kind: None,
                rule_id: None,
                remediation: None,
                timestamp,
            },
            Err(e) => {
                let skill_dir = match e {
                    ValidationError::NotFound(p)
                    | ValidationError::NotADirectory(p)
                    | ValidationError::ManifestNotFound(p) => Some(p.clone()),
                    _ => None,
                };
                ValidationReport {
                    skill_path: skill_path.to_path_buf(),
                    skill_dir,
                    skill: None,
                    valid: false,
                    message: e.to_string(),
                    kind: Some(e.kind()),
                    rule_id: Some(e.rule_id().to_string()),
                    remediation: validator::find_rule(e.rule_id())
                        .map(|r| r.remediation.to_string()),
                    timestamp,
                }
            }
        }
    }

    /// Validates `path` and wraps the outcome in a report.
    pub fn run(path: &Path) -> Self {
        Self::new(path, &validator::validate_skill(path))
    }

    /// Display label for the skill: the validated name, else the last path
    /// component as given.
    pub fn label(&self) -> String {
        if let Some(ref name) = self.skill {
            return name.clone();
        }
        self.skill_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.skill_path.display().to_string())
    }
}

/// Results of validating every skill in a collection directory.
#[derive(Debug, serde::Serialize)]
pub struct CollectionReport {
    pub collection: PathBuf,
    pub reports: Vec<ValidationReport>,
    pub passed: bool,
}

impl CollectionReport {
    pub fn from_reports(collection: &Path, reports: Vec<ValidationReport>) -> Self {
        let passed = reports.iter().all(|r| r.valid);
        CollectionReport {
            collection: collection.to_path_buf(),
            reports,
            passed,
        }
    }

    /// Returns `(valid, invalid)` counts.
    pub fn counts(&self) -> (usize, usize) {
        self.reports
            .iter()
            .fold((0, 0), |(ok, bad), r| if r.valid { (ok + 1, bad) } else { (ok, bad + 1) })
    }
}
