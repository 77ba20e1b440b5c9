//! Failure taxonomy for skill validation.
//!
//! Every check performed by [`validate_skill`](crate::validator::validate_skill)
//! has exactly one [`ValidationError`] variant. The variant's `Display` text is
//! the message shown to the user after `INVALID:`, and each variant belongs to
//! one [`ErrorKind`] and carries a stable rule identifier.

use std::fmt;
use std::path::PathBuf;

use crate::validator::ALLOWED_PROPERTIES;

/// Broad category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Missing or wrong-type path, missing manifest.
    Input,
    /// Missing or malformed frontmatter delimiters.
    Format,
    /// Required fields, disallowed fields, or value constraints.
    Content,
    /// The manifest exists but could not be read.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Input => write!(f, "input"),
            ErrorKind::Format => write!(f, "format"),
            ErrorKind::Content => write!(f, "content"),
            ErrorKind::Io => write!(f, "io"),
        }
    }
}

/// The first rule a skill directory failed.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Skill directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("SKILL.md not found in {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Error reading SKILL.md: {0}")]
    Read(#[source] std::io::Error),

    #[error("SKILL.md must start with YAML frontmatter (---)")]
    MissingFrontmatter,

    #[error("SKILL.md must have closing --- for YAML frontmatter")]
    UnclosedFrontmatter,

    #[error("SKILL.md frontmatter must include 'name' field")]
    MissingName,

    #[error("SKILL.md frontmatter must include 'description' field")]
    MissingDescription,

    #[error("Skill name must be 64 characters or less (got {0})")]
    NameTooLong(usize),

    #[error(
        "Skill name must be hyphen-case (lowercase letters, digits, hyphens only, no leading/trailing/consecutive hyphens)"
    )]
    InvalidNameFormat,

    #[error("Description must be 1024 characters or less (got {0})")]
    DescriptionTooLong(usize),

    #[error("Description must not contain angle brackets")]
    AngleBrackets,

    #[error("Unknown property in frontmatter: '{0}'. Allowed: {{{allowed}}}", allowed = allowed_list())]
    UnknownProperty(String),

    #[error("Skill name '{name}' must match directory name '{dir_name}'")]
    NameMismatch { name: String, dir_name: String },
}

impl ValidationError {
    /// Returns the category this failure belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::NotFound(_)
            | ValidationError::NotADirectory(_)
            | ValidationError::ManifestNotFound(_) => ErrorKind::Input,
            ValidationError::Read(_) => ErrorKind::Io,
            ValidationError::MissingFrontmatter | ValidationError::UnclosedFrontmatter => {
                ErrorKind::Format
            }
            ValidationError::MissingName
            | ValidationError::MissingDescription
            | ValidationError::NameTooLong(_)
            | ValidationError::InvalidNameFormat
            | ValidationError::DescriptionTooLong(_)
            | ValidationError::AngleBrackets
            | ValidationError::UnknownProperty(_)
            | ValidationError::NameMismatch { .. } => ErrorKind::Content,
        }
    }

    /// Returns the stable rule identifier (e.g. `"skill/name-too-long"`).
    ///
    /// Matches an entry of [`rules`](crate::validator::rules).
    pub fn rule_id(&self) -> &'static str {
        match self {
            ValidationError::NotFound(_) => "skill/not-found",
            ValidationError::NotADirectory(_) => "skill/not-a-directory",
            ValidationError::ManifestNotFound(_) => "skill/missing-skill-md",
            ValidationError::Read(_) => "skill/unreadable-skill-md",
            ValidationError::MissingFrontmatter => "skill/missing-frontmatter",
            ValidationError::UnclosedFrontmatter => "skill/unclosed-frontmatter",
            ValidationError::MissingName => "skill/missing-name",
            ValidationError::MissingDescription => "skill/missing-description",
            ValidationError::NameTooLong(_) => "skill/name-too-long",
            ValidationError::InvalidNameFormat => "skill/invalid-name-format",
            ValidationError::DescriptionTooLong(_) => "skill/description-too-long",
            ValidationError::AngleBrackets => "skill/angle-brackets",
            ValidationError::UnknownProperty(_) => "skill/unknown-property",
            ValidationError::NameMismatch { .. } => "skill/name-mismatch",
        }
    }
}

fn allowed_list() -> String {
    let mut keys: Vec<String> = ALLOWED_PROPERTIES.iter().map(|k| format!("'{k}'")).collect();
    keys.sort();
    keys.join(", ")
}
