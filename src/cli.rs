use clap::{ArgAction, Parser};
use skill_validate::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skill-validate",
    version,
    about = "Quick structural validation for AI agent skills"
)]
pub struct Cli {
    /// Path to the skill directory (or a collection of skills with --all)
    pub path: Option<PathBuf>,

    /// Validate every skill directory inside PATH
    #[arg(long)]
    pub all: bool,

    /// Output format [default: pretty, or the config file's output.format]
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase diagnostic logging on stderr (-v debug, -vv trace)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}
