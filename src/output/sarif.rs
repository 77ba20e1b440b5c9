//! SARIF 2.1.0 formatter.
//!
//! Every rule of the catalogue is listed on the tool driver; each invalid
//! skill becomes one error-level result pointing at its `SKILL.md` (or at
//! the skill path itself when the directory is missing).

use crate::report::ValidationReport;
use crate::validator::{self, MANIFEST_FILE};
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::HashMap;

pub fn format(reports: &[ValidationReport]) -> Result<String, serde_json::Error> {
    let catalogue = validator::rules();

    let rule_index: HashMap<&str, i64> = catalogue
        .iter()
        .enumerate()
        .map(|(i, r)| (r.id, i as i64))
        .collect();

    let rules: Vec<ReportingDescriptor> = catalogue
        .iter()
        .map(|r| {
            let mut rule = ReportingDescriptor::builder().id(r.id.to_string()).build();
            rule.short_description = Some(
                MultiformatMessageString::builder()
                    .text(r.message.to_string())
                    .build(),
            );
            rule.help = Some(
                MultiformatMessageString::builder()
                    .text(r.remediation.to_string())
                    .build(),
            );
            rule
        })
        .collect();

    let results: Vec<SarifResult> = reports
        .iter()
        .filter(|r| !r.valid)
        .map(|r| {
            let mut result = SarifResult::builder()
                .message(Message::builder().text(r.message.clone()).build())
                .build();

            result.rule_id = r.rule_id.clone();
            result.level = Some(ResultLevel::Error);
            result.rule_index = r
                .rule_id
                .as_deref()
                .and_then(|id| rule_index.get(id).copied());

            let target = match r.rule_id.as_deref() {
                Some("skill/not-found") | Some("skill/not-a-directory") => r.skill_path.clone(),
                _ => r.skill_path.join(MANIFEST_FILE),
            };
            let uri = target.to_string_lossy().replace('\\', "/");

            let mut location = Location::builder().build();
            let mut physical = PhysicalLocation::builder().build();
            physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
            location.physical_location = Some(physical);
            result.locations = Some(vec![location]);

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("skill-validate")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).map(|s| s + "\n")
}
