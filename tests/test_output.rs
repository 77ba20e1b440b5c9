use std::path::Path;

use skill_validate::config::CollectionConfig;
use skill_validate::output::{self, OutputFormat};
use skill_validate::report::ValidationReport;

fn write_skill(root: &Path, dir_name: &str, content: &str) -> std::path::PathBuf {
    let dir = root.join(dir_name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("SKILL.md"), content).unwrap();
    dir
}

fn valid_report(tmp: &Path) -> ValidationReport {
    let dir = write_skill(
        tmp,
        "my-skill",
        "---\nname: my-skill\ndescription: Does a thing.\n---\nbody\n",
    );
    ValidationReport::run(&dir)
}

fn invalid_report(tmp: &Path) -> ValidationReport {
    let dir = write_skill(
        tmp,
        "my-skill",
        "---\nname: my-skill\ndescription: Does a thing.\nauthor: Jane\n---\n",
    );
    ValidationReport::run(&dir)
}

fn no_color() {
    colored::control::set_override(false);
}

#[test]
fn pretty_valid_output() {
    no_color();
    let tmp = tempfile::tempdir().unwrap();
    let report = valid_report(tmp.path());
    let text = output::format_report(&report, OutputFormat::Pretty).unwrap();

    let expected = format!(
        "Validating skill: {}\n\nVALID: Skill 'my-skill' is valid\n",
        report.skill_path.display()
    );
    assert_eq!(text, expected);
}

#[test]
fn pretty_invalid_output() {
    no_color();
    let tmp = tempfile::tempdir().unwrap();
    let report = invalid_report(tmp.path());
    let text = output::format_report(&report, OutputFormat::Pretty).unwrap();

    assert!(text.contains("INVALID: Unknown property in frontmatter: 'author'"));
}

#[test]
fn json_valid_report_fields() {
    let tmp = tempfile::tempdir().unwrap();
    let report = valid_report(tmp.path());
    let json = output::format_report(&report, OutputFormat::Json).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");
    assert_eq!(parsed["valid"], true);
    assert_eq!(parsed["skill"], "my-skill");
    assert_eq!(parsed["message"], "Skill 'my-skill' is valid");
    assert!(parsed["rule_id"].is_null());
    assert!(parsed["timestamp"].is_string());
}

#[test]
fn json_invalid_report_carries_rule_and_remediation() {
    let tmp = tempfile::tempdir().unwrap();
    let report = invalid_report(tmp.path());
    let json = output::format_report(&report, OutputFormat::Json).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["valid"], false);
    assert_eq!(parsed["kind"], "content");
    assert_eq!(parsed["rule_id"], "skill/unknown-property");
    assert!(parsed["remediation"].is_string());
    assert!(parsed["skill"].is_null());
}

#[test]
fn sarif_lists_failure_as_result() {
    let tmp = tempfile::tempdir().unwrap();
    let report = invalid_report(tmp.path());
    let sarif = output::format_report(&report, OutputFormat::Sarif).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&sarif).expect("SARIF JSON should be valid");
    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "skill-validate");
    let results = parsed["runs"][0]["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["ruleId"], "skill/unknown-property");
    assert_eq!(results[0]["level"], "error");
    let uri = results[0]["locations"][0]["physicalLocation"]["artifactLocation"]["uri"]
        .as_str()
        .unwrap();
    assert!(uri.ends_with("my-skill/SKILL.md"), "{uri}");
}

#[test]
fn sarif_valid_skill_has_no_results() {
    let tmp = tempfile::tempdir().unwrap();
    let report = valid_report(tmp.path());
    let sarif = output::format_report(&report, OutputFormat::Sarif).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&sarif).unwrap();
    assert!(parsed["runs"][0]["results"].as_array().unwrap().is_empty());
    assert!(!parsed["runs"][0]["tool"]["driver"]["rules"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[test]
fn collection_pretty_and_json() {
    no_color();
    let tmp = tempfile::tempdir().unwrap();
    write_skill(
        tmp.path(),
        "good-skill",
        "---\nname: good-skill\ndescription: Fine.\n---\n",
    );
    write_skill(
        tmp.path(),
        "bad-skill",
        "---\nname: Bad-Skill\ndescription: Not fine.\n---\n",
    );
    let report =
        skill_validate::collection::validate_collection(tmp.path(), &CollectionConfig::default());

    let pretty = output::format_collection(&report, OutputFormat::Pretty).unwrap();
    assert!(pretty.contains("good-skill"));
    assert!(pretty.contains("INVALID"));
    assert!(pretty.contains("Total: 1 valid, 1 invalid"));

    let json = output::format_collection(&report, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["passed"], false);
    assert_eq!(parsed["summary"]["total"], 2);
    assert_eq!(parsed["summary"]["invalid"], 1);
    assert_eq!(parsed["skills"].as_array().unwrap().len(), 2);
}
