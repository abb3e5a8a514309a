//! Project-level defaults read from `initra.toml`.
//!
//! ```toml
//! [defaults]
//! language = "ts"          # ts | js
//! package_manager = "npm"  # npm | yarn
//!
//! [paths]
//! components = "src/components"
//! pages = "src/pages"
//! ```
//!
//! Resolution order (highest priority first): command-line flag,
//! `initra.toml`, detection from the project files, built-in default.

use std::path::Path;

use crate::commands::init::PackageManager;
use crate::commands::project::detect_language;
use crate::commands::templates::Language;
use crate::error::{InitraError, Result};

pub const CONFIG_FILE: &str = "initra.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitraConfig {
    pub language: Option<Language>,
    pub package_manager: Option<PackageManager>,
    pub components_dir: Option<String>,
    pub pages_dir: Option<String>,
}

impl InitraConfig {
    /// Load `initra.toml` from `dir`. A missing file yields the empty config.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| InitraError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let doc = content
            .parse::<toml_edit::DocumentMut>()
            .map_err(|e| InitraError::Config(e.to_string()))?;

        let get_str = |table: &str, key: &str| -> Result<Option<String>> {
            match doc.get(table).and_then(|t| t.get(key)) {
                None => Ok(None),
                Some(item) => item
                    .as_str()
                    .map(|s| Some(s.to_string()))
                    .ok_or_else(|| InitraError::Config(format!("{table}.{key} must be a string"))),
            }
        };

        let language = get_str("defaults", "language")?
            .map(|v| match v.to_ascii_lowercase().as_str() {
                "ts" | "typescript" => Ok(Language::TypeScript),
                "js" | "javascript" => Ok(Language::JavaScript),
                _ => Err(InitraError::Config(format!(
                    "defaults.language must be \"ts\" or \"js\", got \"{v}\""
                ))),
            })
            .transpose()?;

        let package_manager = get_str("defaults", "package_manager")?
            .map(|v| match v.to_ascii_lowercase().as_str() {
                "npm" => Ok(PackageManager::Npm),
                "yarn" => Ok(PackageManager::Yarn),
                _ => Err(InitraError::Config(format!(
                    "defaults.package_manager must be \"npm\" or \"yarn\", got \"{v}\""
                ))),
            })
            .transpose()?;

        Ok(InitraConfig {
            language,
            package_manager,
            components_dir: get_str("paths", "components")?,
            pages_dir: get_str("paths", "pages")?,
        })
    }

    /// Pick the output language for a generator invoked with `--ts` / `--js`.
    pub fn resolve_language(&self, ts: bool, js: bool, dir: &Path) -> Language {
        if js {
            Language::JavaScript
        } else if ts {
            Language::TypeScript
        } else {
            self.language
                .or_else(|| detect_language(dir))
                .unwrap_or_default()
        }
    }
}
