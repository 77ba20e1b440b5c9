//! Skill directory validation.
//!
//! [`validate_skill`] runs a fixed sequence of checks against a skill
//! directory and stops at the first failure:
//!
//! | # | Rule | Failure |
//! |---|------|---------|
//! | 1 | `skill/not-found` | path does not exist |
//! | 2 | `skill/not-a-directory` | path is not a directory |
//! | 3 | `skill/missing-skill-md` | no `SKILL.md` in the directory |
//! | 4 | `skill/unreadable-skill-md` | `SKILL.md` could not be read |
//! | 5 | `skill/missing-frontmatter` | content does not start with `---` |
//! | 6 | `skill/unclosed-frontmatter` | no closing `---` |
//! | 7 | `skill/missing-name` | no `name` key |
//! | 8 | `skill/missing-description` | no `description` key |
//! | 9 | `skill/name-too-long` | name longer than 64 characters |
//! | 10 | `skill/invalid-name-format` | name is not hyphen-case |
//! | 11 | `skill/description-too-long` | description longer than 1024 characters |
//! | 12 | `skill/angle-brackets` | description contains `<` or `>` |
//! | 13 | `skill/unknown-property` | key outside the allowed set |
//! | 14 | `skill/name-mismatch` | name differs from the directory name |
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use crate::error::{ErrorKind, ValidationError};
use crate::frontmatter::{self, Frontmatter};
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// Manifest file name expected at the root of every skill directory.
pub const MANIFEST_FILE: &str = "SKILL.md";

/// Frontmatter keys a manifest may declare.
pub const ALLOWED_PROPERTIES: &[&str] =
    &["name", "description", "license", "allowed-tools", "metadata"];

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Lowercase alphanumeric segments joined by single hyphens.
static RE_HYPHEN_CASE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// A skill directory that passed every check.
#[derive(Debug, Clone)]
pub struct ValidSkill {
    /// Declared (and directory) name.
    pub name: String,
    /// Canonical path of the skill directory.
    pub dir: PathBuf,
    /// All frontmatter properties.
    pub properties: Frontmatter,
}

impl ValidSkill {
    /// Success message, e.g. `Skill 'my-skill' is valid`.
    pub fn message(&self) -> String {
        format!("Skill '{}' is valid", self.name)
    }
}

/// Pass/fail outcome with a single human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl From<&Result<ValidSkill, ValidationError>> for Verdict {
    fn from(result: &Result<ValidSkill, ValidationError>) -> Self {
        match result {
            Ok(skill) => Verdict {
                valid: true,
                message: skill.message(),
            },
            Err(e) => Verdict {
                valid: false,
                message: e.to_string(),
            },
        }
    }
}

/// Validates a skill directory and returns a [`Verdict`].
///
/// Thin wrapper over [`validate_skill`] for callers that only need the
/// `(valid, message)` pair.
///
/// # Examples
///
/// ```rust,no_run
/// use skill_validate::validator::validate;
///
/// let verdict = validate("./my-skill");
/// println!("{}: {}", if verdict.valid { "VALID" } else { "INVALID" }, verdict.message);
/// ```
pub fn validate(path: impl AsRef<Path>) -> Verdict {
    Verdict::from(&validate_skill(path))
}

/// Validates a skill directory.
///
/// Relative paths and `.`/`..` segments are resolved first, so the directory
/// name compared against the declared `name` is always the real one.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule that fails. See the
/// [module-level documentation](self) for the order in which rules run.
pub fn validate_skill(path: impl AsRef<Path>) -> Result<ValidSkill, ValidationError> {
    let skill_dir = resolve(path.as_ref());
    tracing::debug!(path = %skill_dir.display(), "validating skill directory");

    if !skill_dir.exists() {
        return Err(ValidationError::NotFound(skill_dir));
    }
    if !skill_dir.is_dir() {
        return Err(ValidationError::NotADirectory(skill_dir));
    }

    let manifest = skill_dir.join(MANIFEST_FILE);
    if !manifest.exists() {
        return Err(ValidationError::ManifestNotFound(skill_dir));
    }

    let content = std::fs::read_to_string(&manifest).map_err(ValidationError::Read)?;
    let content = frontmatter::normalize_newlines(&content);
    tracing::trace!(bytes = content.len(), "read {}", manifest.display());

    let properties = Frontmatter::parse(frontmatter::extract(&content)?);
    tracing::trace!(keys = properties.len(), "parsed frontmatter");

    let name = properties
        .get("name")
        .ok_or(ValidationError::MissingName)?;
    let description = properties
        .get("description")
        .ok_or(ValidationError::MissingDescription)?;

    validate_name(name)?;
    validate_description(description)?;

    if let Some(key) = properties
        .keys()
        .find(|k| !ALLOWED_PROPERTIES.contains(k))
    {
        return Err(ValidationError::UnknownProperty(key.to_string()));
    }

    let dir_name = skill_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = name.to_string();
    if name != dir_name {
        return Err(ValidationError::NameMismatch { name, dir_name });
    }

    Ok(ValidSkill {
        name,
        dir: skill_dir,
        properties,
    })
}

/// Checks the length and hyphen-case shape of a skill name.
///
/// # Examples
///
/// ```
/// use skill_validate::validator::validate_name;
///
/// assert!(validate_name("pdf-editor").is_ok());
/// assert!(validate_name("pdf--editor").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong(len));
    }
    if !RE_HYPHEN_CASE.is_match(name) {
        return Err(ValidationError::InvalidNameFormat);
    }
    Ok(())
}

/// Checks the length and character set of a skill description.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::DescriptionTooLong(len));
    }
    if description.contains(['<', '>']) {
        return Err(ValidationError::AngleBrackets);
    }
    Ok(())
}

/// Canonicalizes `path`, falling back to a lexically cleaned absolute path
/// when it does not exist (so "not found" messages still show a full path).
fn resolve(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        normalize_lexically(&absolute)
    })
}

/// Drops `.` segments and folds `..` into the preceding segment without
/// touching the filesystem. `..` at the root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Rule catalogue
// ---------------------------------------------------------------------------

/// Metadata for a single validation rule.
pub struct RuleInfo {
    /// Unique rule identifier (e.g., `"skill/name-too-long"`).
    pub id: &'static str,
    pub kind: ErrorKind,
    /// Short description of what the rule checks.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Returns the [`RuleInfo`] catalogue, in the order the rules are checked.
pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "skill/not-found",
            kind: ErrorKind::Input,
            message: "Skill directory does not exist",
            remediation: "Check the path points at an existing skill directory",
        },
        RuleInfo {
            id: "skill/not-a-directory",
            kind: ErrorKind::Input,
            message: "Skill path is not a directory",
            remediation: "Pass the directory containing SKILL.md, not a file",
        },
        RuleInfo {
            id: "skill/missing-skill-md",
            kind: ErrorKind::Input,
            message: "SKILL.md not found in skill directory",
            remediation: "Create a SKILL.md file in the skill root with name and description frontmatter",
        },
        RuleInfo {
            id: "skill/unreadable-skill-md",
            kind: ErrorKind::Io,
            message: "SKILL.md could not be read",
            remediation: "Make SKILL.md a readable UTF-8 text file",
        },
        RuleInfo {
            id: "skill/missing-frontmatter",
            kind: ErrorKind::Format,
            message: "SKILL.md does not start with YAML frontmatter",
            remediation: "Start SKILL.md with a line containing only ---",
        },
        RuleInfo {
            id: "skill/unclosed-frontmatter",
            kind: ErrorKind::Format,
            message: "SKILL.md frontmatter has no closing ---",
            remediation: "Close the frontmatter block with a line containing only ---",
        },
        RuleInfo {
            id: "skill/missing-name",
            kind: ErrorKind::Content,
            message: "Frontmatter has no 'name' field",
            remediation: "Add 'name: <skill-directory-name>' to the frontmatter",
        },
        RuleInfo {
            id: "skill/missing-description",
            kind: ErrorKind::Content,
            message: "Frontmatter has no 'description' field",
            remediation: "Add a 'description:' line saying what the skill does and when to use it",
        },
        RuleInfo {
            id: "skill/name-too-long",
            kind: ErrorKind::Content,
            message: "Skill name exceeds 64 characters",
            remediation: "Shorten the skill name (and its directory) to 64 characters or fewer",
        },
        RuleInfo {
            id: "skill/invalid-name-format",
            kind: ErrorKind::Content,
            message: "Skill name is not hyphen-case",
            remediation: "Use lowercase letters and digits separated by single hyphens (e.g. 'pdf-editor')",
        },
        RuleInfo {
            id: "skill/description-too-long",
            kind: ErrorKind::Content,
            message: "Description exceeds 1024 characters",
            remediation: "Shorten the description to 1024 characters or fewer",
        },
        RuleInfo {
            id: "skill/angle-brackets",
            kind: ErrorKind::Content,
            message: "Description contains angle brackets",
            remediation: "Remove '<' and '>' from the description",
        },
        RuleInfo {
            id: "skill/unknown-property",
            kind: ErrorKind::Content,
            message: "Frontmatter declares a property outside the allowed set",
            remediation: "Keep only name, description, license, allowed-tools and metadata",
        },
        RuleInfo {
            id: "skill/name-mismatch",
            kind: ErrorKind::Content,
            message: "Skill name does not match its directory name",
            remediation: "Rename the directory or the 'name' field so they are identical",
        },
    ]
}

/// Looks up a rule by id.
pub fn find_rule(id: &str) -> Option<RuleInfo> {
    rules().into_iter().find(|r| r.id == id)
}
