use colored::Colorize;
use std::path::{Path, PathBuf};

use super::files;
use super::naming::{validate_name, NameVariants};
use super::templates::{self, Language};
use crate::error::{InitraError, Result};

/// Express artifact produced by the backend generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Controller,
    Service,
    Model,
    Dto,
    Route,
    Middleware,
}

impl BackendKind {
    /// Order used by `generate api`.
    pub const API: [BackendKind; 5] = [
        BackendKind::Controller,
        BackendKind::Service,
        BackendKind::Model,
        BackendKind::Dto,
        BackendKind::Route,
    ];

    /// Suffix in the file name: `<kebab>.<suffix>.<ext>`.
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Controller => "controller",
            BackendKind::Service => "service",
            BackendKind::Model => "model",
            BackendKind::Dto => "dto",
            BackendKind::Route => "route",
            BackendKind::Middleware => "middleware",
        }
    }

    /// Directory under `src/`.
    pub fn dir(self) -> &'static str {
        match self {
            BackendKind::Controller => "controllers",
            BackendKind::Service => "services",
            BackendKind::Model => "models",
            BackendKind::Dto => "dto",
            BackendKind::Route => "routes",
            BackendKind::Middleware => "middleware",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MiddlewareKind {
    #[default]
    Default,
    /// JSON Web Token verification.
    Jwt,
}

/// `src/<dir>/<kebab>.<kind>.<ext>`
pub fn file_path(kind: BackendKind, name: &NameVariants, language: Language) -> PathBuf {
    Path::new("src").join(kind.dir()).join(format!(
        "{}.{}.{}",
        name.kebab,
        kind.as_str(),
        language.script_ext()
    ))
}

/// Render and write one backend file.
///
/// Returns `Ok(false)` without touching the disk when the target exists.
fn write_artifact(
    kind: BackendKind,
    name: &NameVariants,
    language: Language,
    middleware: MiddlewareKind,
) -> Result<bool> {
    let path = file_path(kind, name, language);
    if path.exists() {
        tracing::warn!(path = %path.display(), "backend file exists, skipping");
        println!(
            "{} {} already exists, skipped",
            "⚠".yellow(),
            path.display().to_string().yellow()
        );
        return Ok(false);
    }

    let source = templates::render(
        templates::backend::template(kind, language, middleware),
        &name.vars(),
    );
    files::write_new(&path, &source)?;
    println!(
        "{} Created {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(true)
}

fn header(what: &str, name: &str, language: Language) {
    println!(
        "\n{} Generating {what} for \"{name}\" ({})...\n",
        "🚀".cyan(),
        language.script_ext().to_uppercase()
    );
}

fn print_route_registration(name: &NameVariants, language: Language) {
    let import = match language {
        Language::TypeScript => format!("./routes/{}.route", name.kebab),
        Language::JavaScript => format!("./routes/{}.route.js", name.kebab),
    };
    println!(
        "\n{}",
        "Don't forget to register the route in your main app file:".yellow()
    );
    println!("   import {}Router from '{import}';", name.camel);
    println!("   app.use('/api/{}', {}Router);", name.kebab, name.camel);
}

/// `initra generate controller|service|model|dto|route|middleware <name>`
///
/// Returns whether the file was created.
pub fn generate(
    kind: BackendKind,
    name: &str,
    language: Language,
    middleware: MiddlewareKind,
) -> Result<bool> {
    validate_name(name)?;
    if middleware == MiddlewareKind::Jwt && kind != BackendKind::Middleware {
        return Err(InitraError::InvalidOption(
            "--jwt only applies to middleware".to_string(),
        ));
    }
    let variants = NameVariants::new(name);

    header(kind.as_str(), name, language);
    let created = write_artifact(kind, &variants, language, middleware)?;
    if created {
        println!(
            "\n{} {} \"{name}\" generated successfully!",
            "✓".green().bold(),
            kind.as_str()
        );
        if kind == BackendKind::Route {
            print_route_registration(&variants, language);
        }
    }
    Ok(created)
}

/// `initra generate api <name>`: controller, service, model, dto and route.
///
/// Returns how many of the five files were created.
pub fn api(name: &str, language: Language) -> Result<usize> {
    validate_name(name)?;
    let variants = NameVariants::new(name);

    header("full API", name, language);
    let mut created = 0;
    for kind in BackendKind::API {
        if write_artifact(kind, &variants, language, MiddlewareKind::Default)? {
            created += 1;
        }
    }

    if created == BackendKind::API.len() {
        let ext = language.script_ext();
        println!(
            "\n{}",
            format!("Generated API structure for \"{name}\":").magenta().bold()
        );
        for (i, kind) in BackendKind::API.iter().enumerate() {
            let branch = if i + 1 == BackendKind::API.len() { "└──" } else { "├──" };
            let line = format!(
                "{branch} {}/{}.{}.{ext}",
                kind.dir(),
                variants.kebab,
                kind.as_str()
            );
            println!("{}", line.dimmed());
        }
        println!("\n{} API \"{name}\" generated successfully!", "✓".green().bold());
        print_route_registration(&variants, language);
    } else {
        tracing::warn!(created, "api generation skipped existing files");
    }
    Ok(created)
}
