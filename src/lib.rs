//! # skill-validate
//!
//! Quick structural validation for AI agent skills.
//!
//! A skill is a directory containing a `SKILL.md` manifest whose YAML-style
//! frontmatter declares at least a `name` and a `description`. The name must
//! be hyphen-case and identical to the directory name. Validation is a pure,
//! read-only pass that stops at the first failed rule.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use skill_validate::validator::validate;
//!
//! let verdict = validate("./my-skill");
//! if verdict.valid {
//!     println!("VALID: {}", verdict.message);
//! } else {
//!     println!("INVALID: {}", verdict.message);
//! }
//! ```
//!
//! ## Modules
//!
//! 1. **[`frontmatter`]**: delimiter split and the flat `key: value` parser.
//! 2. **[`validator`]**: the ordered rule checks and rule catalogue.
//! 3. **[`error`]**: [`error::ValidationError`], one variant per rule.
//! 4. **[`report`]**: serializable per-skill and per-collection reports.
//! 5. **[`collection`]**: discover and validate many skills in parallel.
//! 6. **[`output`]**: render reports as pretty text, JSON, or [SARIF].
//! 7. **[`config`]**: optional TOML settings for the command-line tool.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod collection;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod logging;
pub mod output;
pub mod report;
pub mod validator;
