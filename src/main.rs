mod cli;

use clap::Parser;
use cli::Cli;
use skill_validate::collection;
use skill_validate::config::Config;
use skill_validate::logging;
use skill_validate::output::{self, OutputFormat};
use skill_validate::report::ValidationReport;
use skill_validate::validator::MANIFEST_FILE;
use std::io::IsTerminal;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(logging::level_for(cli.verbose)) {
        eprintln!("Warning: {e}");
    }

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let Some(path) = cli.path else {
        print_usage();
        std::process::exit(1);
    };

    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });
    let format = cli.format.unwrap_or(config.output.format);

    let (rendered, passed) = if cli.all {
        if !path.is_dir() {
            eprintln!("Error: not a directory: {}", path.display());
            std::process::exit(2);
        }
        let report = collection::validate_collection(&path, &config.collection);
        if report.reports.is_empty() {
            eprintln!(
                "Error: no skill directories found in '{}' (no subdirectory contains a {MANIFEST_FILE})",
                path.display()
            );
            std::process::exit(2);
        }
        (output::format_collection(&report, format), report.passed)
    } else {
        let report = ValidationReport::run(&path);
        if !report.valid && matches!(format, OutputFormat::Pretty) {
            hint_collection(&path, &config);
        }
        (output::format_report(&report, format), report.valid)
    };

    let rendered = rendered.unwrap_or_else(|e| {
        eprintln!("Error: failed to render report: {e}");
        std::process::exit(2);
    });

    if let Some(out_path) = cli.output {
        std::fs::write(&out_path, &rendered).unwrap_or_else(|e| {
            eprintln!("Error writing output: {e}");
            std::process::exit(2);
        });
        eprintln!("Output written to {}", out_path.display());
    } else {
        print!("{rendered}");
    }

    std::process::exit(if passed { 0 } else { 1 });
}

fn print_usage() {
    println!("Usage: skill-validate <skill-directory>");
    println!("\nExample:");
    println!("  skill-validate .claude/skills/my-skill");
}

/// Points at `--all` when a directory without `SKILL.md` holds skills of its own.
fn hint_collection(path: &Path, config: &Config) {
    if !path.is_dir() || path.join(MANIFEST_FILE).exists() {
        return;
    }
    let children = collection::find_skill_dirs(path, &config.collection);
    if children.is_empty() {
        return;
    }
    eprintln!(
        "Hint: '{}' looks like a skills collection directory, not a single skill.",
        path.display()
    );
    eprintln!("To validate all skills at once:");
    eprintln!("  skill-validate --all {}", path.display());
}
