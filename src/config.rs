//! Optional configuration for the command-line front end.
//!
//! Nothing is read unless `--config <file>` is passed; without it every field
//! takes its default. The validation rules themselves are fixed and cannot be
//! configured here.
//!
//! ```toml
//! [output]
//! format = "json"
//!
//! [collection]
//! include_hidden = false
//! exclude = ["drafts", "archive"]
//! ```

use crate::output::OutputFormat;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub collection: CollectionConfig,
}

/// Report rendering defaults.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    pub format: OutputFormat,
}

/// Skill discovery settings for `--all`.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectionConfig {
    /// Also consider child directories whose name starts with `.`.
    pub include_hidden: bool,
    /// Child directory names to skip.
    pub exclude: Vec<String>,
}

impl CollectionConfig {
    /// Returns `true` if a child directory called `name` should be skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use skill_validate::config::CollectionConfig;
    ///
    /// let cfg = CollectionConfig { include_hidden: false, exclude: vec!["drafts".into()] };
    /// assert!(cfg.is_skipped(".git"));
    /// assert!(cfg.is_skipped("drafts"));
    /// assert!(!cfg.is_skipped("pdf-editor"));
    /// ```
    pub fn is_skipped(&self, name: &str) -> bool {
        (!self.include_hidden && name.starts_with('.')) || self.exclude.iter().any(|e| e == name)
    }
}

impl Config {
    /// Loads configuration from a TOML file, or returns the defaults when
    /// `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the file is missing, unreadable, or not
    /// valid configuration TOML.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        if !path.exists() {
            return Err(format!("Config file not found: {}", path.display()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
        tracing::debug!(config = %path.display(), "loaded configuration");
        Ok(config)
    }
}
