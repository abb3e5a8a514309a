use colored::Colorize;
use std::path::{Path, PathBuf};

use super::files;
use super::naming::{validate_name, NameVariants};
use super::project::detect_framework;
use super::templates::service as tpl;
use super::templates::Language;
use crate::error::{InitraError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceSide {
    #[default]
    Client,
    Server,
}

impl ServiceSide {
    /// Directory under `src/` used when `--path` is absent.
    pub fn default_dir(self) -> &'static str {
        match self {
            ServiceSide::Client => "services",
            ServiceSide::Server => "lib",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    pub side: ServiceSide,
    pub language: Language,
    /// Directory under `src/`.
    pub path: Option<String>,
}

pub fn service_path(name: &NameVariants, opts: &ServiceOptions) -> PathBuf {
    let dir = opts
        .path
        .as_deref()
        .map(|p| p.trim_matches('/'))
        .unwrap_or(opts.side.default_dir());
    Path::new("src")
        .join(dir)
        .join(format!("{}.service.{}", name.kebab, opts.language.script_ext()))
}

/// `initra generate service <name>`
pub fn run(name: &str, opts: &ServiceOptions) -> Result<PathBuf> {
    validate_name(name)?;
    let variants = NameVariants::new(name);
    let framework = detect_framework(Path::new("."));
    let path = service_path(&variants, opts);
    if path.exists() {
        return Err(InitraError::AlreadyExists(path));
    }
    tracing::debug!(name, side = ?opts.side, %framework, "generating service");

    let source = match opts.side {
        ServiceSide::Client => tpl::client(&variants, opts.language, framework),
        ServiceSide::Server => tpl::server(&variants, opts.language, framework),
    };
    files::create(&path, &source)?;

    println!(
        "\n{} {}Service generated for {framework}",
        "✓".green().bold(),
        variants.pascal.bold()
    );
    println!(
        "  import {{ {}Service }} from '{}';",
        variants.camel,
        import_hint(&path)
    );
    Ok(path)
}

/// `src/services/user.service.ts` -> `@/services/user.service`
fn import_hint(path: &Path) -> String {
    let rel = path.strip_prefix("src").unwrap_or(path);
    let rel = rel.with_extension("");
    format!("@/{}", rel.display())
}
