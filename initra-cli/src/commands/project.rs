use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::templates::Language;
use crate::error::InitraError;

/// Project flavour, used both for `initra init` templates and for picking
/// generator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framework {
    #[default]
    React,
    Next,
    Node,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::React, Framework::Node, Framework::Next];

    pub fn as_str(self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Next => "next",
            Framework::Node => "node",
        }
    }

    /// GitHub `owner/repo` of the starter template.
    pub fn starter_repository(self) -> &'static str {
        match self {
            Framework::React => "blessedrajp/react-template",
            Framework::Node => "blessedrajp/nodeJs-template",
            Framework::Next => "blessedrajp/next-template",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = InitraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react" => Ok(Framework::React),
            "next" | "nextjs" => Ok(Framework::Next),
            "node" | "express" => Ok(Framework::Node),
            other => Err(InitraError::InvalidOption(format!(
                "Unknown template '{other}'. Available: react, node, next"
            ))),
        }
    }
}

/// Detect the framework of the project rooted at `dir` from its `package.json`.
///
/// `next` wins over `react`, which wins over `express`. A missing or
/// unreadable manifest means React.
pub fn detect_framework(dir: &Path) -> Framework {
    let manifest = dir.join("package.json");
    let content = match std::fs::read_to_string(&manifest) {
        Ok(content) => content,
        Err(_) => {
            tracing::debug!(path = %manifest.display(), "no package.json, assuming react");
            return Framework::React;
        }
    };
    let pkg: serde_json::Value = match serde_json::from_str(&content) {
        Ok(pkg) => pkg,
        Err(e) => {
            tracing::warn!(path = %manifest.display(), error = %e, "malformed package.json, assuming react");
            return Framework::React;
        }
    };

    let has_dep = |dep: &str| {
        ["dependencies", "devDependencies"]
            .iter()
            .any(|section| pkg.get(section).and_then(|s| s.get(dep)).is_some())
    };

    let framework = if has_dep("next") {
        Framework::Next
    } else if has_dep("react") {
        Framework::React
    } else if has_dep("express") {
        Framework::Node
    } else {
        Framework::React
    };
    tracing::debug!(%framework, "detected framework from package.json");
    framework
}

/// Language implied by the compiler config files in `dir`, if any.
pub fn detect_language(dir: &Path) -> Option<Language> {
    if ["tsconfig.json", "tsconfig.app.json"]
        .iter()
        .any(|f| dir.join(f).exists())
    {
        Some(Language::TypeScript)
    } else if dir.join("jsconfig.json").exists() {
        Some(Language::JavaScript)
    } else {
        None
    }
}
