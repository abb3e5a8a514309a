use colored::Colorize;
use std::path::{Path, PathBuf};

use super::files;
use super::naming::{validate_name, NameVariants};
use super::project::{detect_framework, Framework};
use super::templates::route::{self as tpl, HttpMethod};
use super::templates::Language;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    pub api: bool,
    pub method: HttpMethod,
    pub language: Language,
    /// Extra segments between the route root and the name, e.g. `admin/users`.
    pub path: Option<String>,
}

impl RouteOptions {
    fn segments(&self) -> Vec<&str> {
        self.path
            .as_deref()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Parse `--method`. Page routes have no method, so the value is only
/// checked for API routes and otherwise ignored with a warning.
pub fn resolve_method(api: bool, raw: &str) -> Result<HttpMethod> {
    if api {
        return raw.parse();
    }
    if !raw.eq_ignore_ascii_case("GET") {
        tracing::warn!(method = raw, "--method is ignored without --api");
    }
    Ok(HttpMethod::default())
}

/// Files written for a route: the main file plus an optional CSS module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFiles {
    pub main: PathBuf,
    pub stylesheet: Option<PathBuf>,
    pub url: String,
}

pub fn plan(name: &str, opts: &RouteOptions, framework: Framework) -> RouteFiles {
    let segments = opts.segments();
    let nested = |root: &str| {
        let mut dir = PathBuf::from(root);
        for s in &segments {
            dir.push(s);
        }
        dir
    };
    let mut url_parts: Vec<&str> = Vec::new();
    if opts.api {
        url_parts.push("api");
    }
    url_parts.extend(segments.iter().copied());
    url_parts.push(name);
    let url = format!("/{}", url_parts.join("/"));

    let script = opts.language.script_ext();
    let markup = opts.language.markup_ext();
    let css = format!("{name}.module.css");

    match (framework, opts.api) {
        (Framework::Next, true) => RouteFiles {
            main: nested("src/app/api").join(name).join(format!("route.{script}")),
            stylesheet: None,
            url,
        },
        (Framework::Next, false) => {
            let dir = nested("src/app").join(name);
            RouteFiles {
                main: dir.join(format!("page.{markup}")),
                stylesheet: Some(dir.join(css)),
                url,
            }
        }
        (_, true) => RouteFiles {
            main: nested("src/routes").join(format!("{name}.{script}")),
            stylesheet: None,
            url,
        },
        (_, false) => {
            let dir = nested("src/pages");
            RouteFiles {
                main: dir.join(format!("{name}.{markup}")),
                stylesheet: Some(dir.join(css)),
                url,
            }
        }
    }
}

/// `initra generate route <name>`
pub fn run(name: &str, opts: &RouteOptions) -> Result<RouteFiles> {
    validate_name(name)?;
    let framework = detect_framework(Path::new("."));
    let variants = NameVariants::new(name);
    let files_plan = plan(name, opts, framework);
    tracing::debug!(name, %framework, api = opts.api, method = %opts.method, "generating route");

    let source = if opts.api {
        tpl::api_route(&variants, opts.method, opts.language, framework)
    } else {
        tpl::page_route(&variants, opts.language, framework)
    };
    let mut planned = vec![(files_plan.main.clone(), source)];
    if let Some(css) = &files_plan.stylesheet {
        planned.push((css.clone(), tpl::page_css()));
    }
    files::create_all(&planned)?;

    let kind = if opts.api {
        format!("{} API route", opts.method)
    } else {
        "Page route".to_string()
    };
    println!(
        "\n{} {kind} generated for {framework}",
        "✓".green().bold()
    );
    println!("  URL: {}", files_plan.url.cyan());
    Ok(files_plan)
}
