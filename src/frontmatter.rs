//! `SKILL.md` frontmatter extraction and parsing.
//!
//! The frontmatter is everything between the first and second occurrence of
//! the literal `---`. The manifest is split on that sequence into at most
//! three pieces, so a `---` appearing mid-line (e.g. `a---b`) also counts as
//! a delimiter.
//!
//! # Parsing
//!
//! A deliberately small line-oriented parser is used instead of a YAML crate.
//! Only top-level `key: value` lines are recognized:
//!
//! - blank lines and lines starting with `#` are ignored,
//! - lines without a colon are ignored,
//! - the key is everything before the first colon, the value everything
//!   after it (both trimmed),
//! - a repeated key overwrites the earlier value but keeps its position.
//!
//! Nested structures are not supported; an indented `  - item` line under a
//! key is simply skipped unless it contains a colon, in which case it becomes
//! a key of its own.

use crate::error::ValidationError;

/// The three-hyphen frontmatter delimiter.
pub const DELIMITER: &str = "---";

/// Returns the trimmed frontmatter text of a manifest.
///
/// # Errors
///
/// - [`ValidationError::MissingFrontmatter`] when `content` does not start
///   with `---`.
/// - [`ValidationError::UnclosedFrontmatter`] when there is no second `---`.
///
/// # Examples
///
/// ```
/// use skill_validate::frontmatter::extract;
///
/// let fm = extract("---\nname: demo\n---\nbody").unwrap();
/// assert_eq!(fm, "name: demo");
/// ```
pub fn extract(content: &str) -> Result<&str, ValidationError> {
    if !content.starts_with(DELIMITER) {
        return Err(ValidationError::MissingFrontmatter);
    }

    let mut parts = content.splitn(3, DELIMITER);
    // The first piece is the empty string before the opening delimiter.
    let _ = parts.next();
    match (parts.next(), parts.next()) {
        (Some(frontmatter), Some(_body)) => Ok(frontmatter.trim()),
        _ => Err(ValidationError::UnclosedFrontmatter),
    }
}

/// Converts `\r\n` and bare `\r` line endings to `\n`.
///
/// # Examples
///
/// ```
/// use skill_validate::frontmatter::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
/// ```
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Flat `key → value` mapping parsed from a frontmatter block.
///
/// Keys keep the position of their first occurrence, so iteration follows
/// the order in which keys were first written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<(String, String)>,
}

impl Frontmatter {
    /// Parses frontmatter text into a flat property mapping.
    ///
    /// Never fails: lines that are not `key: value` pairs are skipped.
    pub fn parse(text: &str) -> Self {
        let mut fm = Frontmatter::default();
        for raw in text.split('\n') {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once(':') {
                fm.insert(key.trim(), value.trim());
            }
        }
        fm
    }

    fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if `key` was declared.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no `key: value` line was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
