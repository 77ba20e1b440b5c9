use std::path::Path;

use skill_validate::collection::{find_skill_dirs, validate_collection};
use skill_validate::config::CollectionConfig;

fn write_skill(root: &Path, dir_name: &str, name: &str) {
    let dir = root.join(dir_name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("SKILL.md"),
        format!("---\nname: {name}\ndescription: Does a thing.\n---\n"),
    )
    .unwrap();
}

#[test]
fn finds_only_children_with_manifest_sorted() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "zeta-skill", "zeta-skill");
    write_skill(tmp.path(), "alpha-skill", "alpha-skill");
    std::fs::create_dir(tmp.path().join("no-manifest")).unwrap();
    std::fs::write(tmp.path().join("SKILL.md"), "stray file").unwrap();

    let dirs = find_skill_dirs(tmp.path(), &CollectionConfig::default());
    let names: Vec<_> = dirs
        .iter()
        .map(|d| d.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["alpha-skill", "zeta-skill"]);
}

#[test]
fn does_not_descend_into_grandchildren() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(&tmp.path().join("group"), "nested-skill", "nested-skill");

    assert!(find_skill_dirs(tmp.path(), &CollectionConfig::default()).is_empty());
}

#[test]
fn hidden_directories_skipped_by_default() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), ".hidden-skill", "hidden-skill");
    write_skill(tmp.path(), "visible", "visible");

    let default = find_skill_dirs(tmp.path(), &CollectionConfig::default());
    assert_eq!(default.len(), 1);

    let config = CollectionConfig {
        include_hidden: true,
        exclude: vec![],
    };
    assert_eq!(find_skill_dirs(tmp.path(), &config).len(), 2);
}

#[test]
fn excluded_directories_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "drafts", "drafts");
    write_skill(tmp.path(), "keeper", "keeper");

    let config = CollectionConfig {
        include_hidden: false,
        exclude: vec!["drafts".to_string()],
    };
    let dirs = find_skill_dirs(tmp.path(), &config);
    assert_eq!(dirs.len(), 1);
    assert!(dirs[0].ends_with("keeper"));
}

#[test]
fn collection_passes_when_every_skill_valid() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "one", "one");
    write_skill(tmp.path(), "two", "two");

    let report = validate_collection(tmp.path(), &CollectionConfig::default());
    assert!(report.passed);
    assert_eq!(report.counts(), (2, 0));
}

#[test]
fn collection_fails_when_any_skill_invalid() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "good", "good");
    write_skill(tmp.path(), "bad", "not-bad");

    let report = validate_collection(tmp.path(), &CollectionConfig::default());
    assert!(!report.passed);
    assert_eq!(report.counts(), (1, 1));

    // Discovery order is preserved: "bad" sorts before "good".
    assert!(!report.reports[0].valid);
    assert_eq!(report.reports[0].rule_id.as_deref(), Some("skill/name-mismatch"));
    assert_eq!(report.reports[1].skill.as_deref(), Some("good"));
}

#[test]
fn empty_collection_passes_vacuously() {
    let tmp = tempfile::tempdir().unwrap();
    let report = validate_collection(tmp.path(), &CollectionConfig::default());
    assert!(report.reports.is_empty());
    assert!(report.passed);
}
