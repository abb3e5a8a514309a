use regex::Regex;
use std::sync::LazyLock;

use crate::error::{InitraError, Result};

static VALID_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").expect("valid name pattern"));

// Lowercase letter or digit followed by an uppercase letter starts a new word.
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid boundary pattern"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_\s]+").expect("valid separator pattern"));

const RESERVED_WORDS: &[&str] = &[
    "abstract", "arguments", "await", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "debugger", "default", "delete", "do", "double", "else",
    "enum", "eval", "export", "extends", "false", "final", "finally", "float", "for",
    "function", "goto", "if", "implements", "import", "in", "instanceof", "int", "interface",
    "let", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "typeof", "var", "void", "volatile", "while", "with", "yield",
];

/// Check that `name` can be used as a file and identifier stem.
///
/// A valid name starts with a letter, contains only letters, digits,
/// hyphens and underscores, and is not a reserved JavaScript word
/// (compared case-insensitively).
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| InitraError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid("name cannot start with a number"));
    }
    if !VALID_NAME.is_match(name) {
        return Err(invalid(
            "use only letters, numbers, hyphens and underscores, starting with a letter",
        ));
    }
    if RESERVED_WORDS.contains(&name.to_lowercase().as_str()) {
        return Err(invalid("reserved word"));
    }
    Ok(())
}

/// Split a name into words on separators and lower-to-upper transitions.
fn words(name: &str) -> Vec<String> {
    let spaced = CASE_BOUNDARY.replace_all(name, "$1 $2");
    SEPARATORS
        .split(&spaced)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// `user-profile` → `UserProfile`. The tail of every word keeps its case.
pub fn to_pascal_case(name: &str) -> String {
    words(name).iter().map(|w| capitalize(w)).collect()
}

/// `user-profile` → `userProfile`.
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// `UserProfile` → `user-profile`.
pub fn to_kebab_case(name: &str) -> String {
    words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// `UserProfile` → `user_profile`.
pub fn to_snake_case(name: &str) -> String {
    words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Compute a plural form (simple English rules).
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();
    if ["s", "sh", "ch", "x", "z"].iter().any(|end| lower.ends_with(end)) {
        format!("{word}es")
    } else if lower.ends_with('y')
        && !["ay", "ey", "oy", "uy"].iter().any(|end| lower.ends_with(end))
    {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{word}s")
    }
}

/// Every casing variant of a name, computed once per command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariants {
    pub original: String,
    pub pascal: String,
    pub camel: String,
    pub kebab: String,
    pub snake: String,
    pub lower: String,
    pub upper: String,
}

impl NameVariants {
    pub fn new(name: &str) -> Self {
        NameVariants {
            original: name.to_string(),
            pascal: to_pascal_case(name),
            camel: to_camel_case(name),
            kebab: to_kebab_case(name),
            snake: to_snake_case(name),
            lower: name.to_lowercase(),
            upper: name.to_uppercase(),
        }
    }

    /// Placeholder table for [`super::templates::render`].
    pub fn vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("PascalName", self.pascal.clone()),
            ("camelName", self.camel.clone()),
            ("kebabName", self.kebab.clone()),
            ("lowerName", self.lower.clone()),
            ("UPPER_NAME", self.upper.clone()),
            ("pluralName", pluralize(&self.kebab)),
        ]
    }
}
