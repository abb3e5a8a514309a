use colored::Colorize;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::files;
use super::naming::{validate_name, NameVariants};
use super::templates::component::{self as tpl, ComponentKind, ComponentTemplate, Prop};
use super::templates::Language;
use crate::error::{InitraError, Result};

pub const DEFAULT_DIR: &str = "src/components";

static JS_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier pattern"));

#[derive(Debug, Clone, Default)]
pub struct ComponentOptions {
    /// Base directory; the component lands in `<path>/<Pascal>/`.
    pub path: Option<PathBuf>,
    /// Comma separated props, each `name` or `name:type`.
    pub props: Option<String>,
    pub language: Language,
    pub css: bool,
    pub test: bool,
    pub story: bool,
    pub layout: bool,
    pub server: bool,
    pub client: bool,
}

/// Parse `title, count:number,,onClick` into typed props. The type
/// defaults to `string`; names must be JavaScript identifiers.
pub fn parse_props(raw: &str) -> Result<Vec<Prop>> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|entry| {
            let (name, ty) = match entry.split_once(':') {
                Some((name, ty)) => (name.trim(), ty.trim()),
                None => (entry, ""),
            };
            if !JS_IDENTIFIER.is_match(name) {
                return Err(InitraError::InvalidOption(format!(
                    "Invalid prop '{entry}': '{name}' is not a valid identifier"
                )));
            }
            Ok(Prop::new(name, if ty.is_empty() { "string" } else { ty }))
        })
        .collect()
}

fn kind(opts: &ComponentOptions) -> Result<ComponentKind> {
    match (opts.server, opts.client) {
        (true, true) => Err(InitraError::InvalidOption(
            "--server and --client cannot be used together".to_string(),
        )),
        (true, false) => Ok(ComponentKind::Server),
        (false, true) => Ok(ComponentKind::Client),
        (false, false) => Ok(ComponentKind::Plain),
    }
}

/// `initra generate component <name>`
///
/// Returns the component directory.
pub fn run(name: &str, opts: &ComponentOptions) -> Result<PathBuf> {
    validate_name(name)?;
    let kind = kind(opts)?;
    let variants = NameVariants::new(name);
    let props = match opts.props.as_deref() {
        Some(raw) => parse_props(raw)?,
        None => Vec::new(),
    };

    let base = opts
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));
    let dir = base.join(&variants.pascal);
    let markup = opts.language.markup_ext();
    let main_file = dir.join(format!("{}.{markup}", variants.pascal));

    let template = ComponentTemplate {
        name: &variants,
        props: &props,
        layout: opts.layout,
        kind,
        language: opts.language,
        css: opts.css,
    };
    tracing::debug!(name, ?kind, props = props.len(), dir = %dir.display(), "generating component");

    let mut planned = vec![(main_file, tpl::source(&template))];
    if opts.css {
        let path = dir.join(format!("{}.scss", variants.pascal));
        planned.push((path, tpl::stylesheet(&variants, opts.layout)));
    }
    if opts.test {
        let path = dir.join(format!("{}.test.{markup}", variants.pascal));
        planned.push((path, tpl::test(&template)));
    }
    if opts.story {
        let path = dir.join(format!("{}.stories.{markup}", variants.pascal));
        planned.push((path, tpl::story(&template)));
    }
    let index = dir.join(format!("index.{}", opts.language.script_ext()));
    planned.push((index, tpl::index(&variants)));
    files::create_all(&planned)?;

    println!(
        "\n{} Component {} generated in {}",
        "✓".green().bold(),
        variants.pascal.bold(),
        dir.display().to_string().cyan()
    );
    Ok(dir)
}
