//! Validation of a directory holding many skills.
//!
//! [`find_skill_dirs`] lists the immediate child directories that contain a
//! `SKILL.md`, and [`validate_collection`] validates each of them in parallel
//! via [rayon]. Every skill goes through the same
//! [`validate_skill`](crate::validator::validate_skill) routine as a single
//! run; there is no shared state between them.

use crate::config::CollectionConfig;
use crate::report::{CollectionReport, ValidationReport};
use crate::validator::MANIFEST_FILE;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns immediate child directories of `path` that contain a `SKILL.md`
/// file, sorted by directory name.
///
/// Hidden and excluded directory names are skipped according to `config`.
/// Unreadable entries are ignored.
pub fn find_skill_dirs(path: &Path, config: &CollectionConfig) -> Vec<PathBuf> {
    let dirs: Vec<PathBuf> = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !config.is_skipped(&e.file_name().to_string_lossy()))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .filter(|p| p.join(MANIFEST_FILE).exists())
        .collect();

    tracing::debug!(
        collection = %path.display(),
        found = dirs.len(),
        "discovered skill directories"
    );
    dirs
}

/// Validates every skill found by [`find_skill_dirs`].
///
/// Reports keep the discovery order regardless of which validation finishes
/// first.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_validate::{collection, config::CollectionConfig};
///
/// let report = collection::validate_collection(Path::new("./skills"), &CollectionConfig::default());
/// std::process::exit(if report.passed { 0 } else { 1 });
/// ```
pub fn validate_collection(path: &Path, config: &CollectionConfig) -> CollectionReport {
    let dirs = find_skill_dirs(path, config);
    let reports: Vec<ValidationReport> = dirs
        .par_iter()
        .map(|dir| ValidationReport::run(dir))
        .collect();
    CollectionReport::from_reports(path, reports)
}
