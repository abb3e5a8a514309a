use colored::Colorize;
use std::path::PathBuf;

use super::files;
use super::naming::{validate_name, NameVariants};
use super::templates::page as tpl;
use super::templates::Language;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageTarget {
    #[default]
    React,
    /// Next.js app router segment.
    Next,
}

#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub target: PageTarget,
    pub path: Option<PathBuf>,
    pub language: Language,
    pub css: bool,
    pub test: bool,
}

/// Drop a trailing `page` (any case) and the separator before it,
/// so `UserPage` and `user-page` both become `User`/`user`.
pub fn strip_page_suffix(name: &str) -> &str {
    let split = name.len().saturating_sub(4);
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(suffix)) if suffix.eq_ignore_ascii_case("page") => {
            let stem = stem.trim_end_matches(['-', '_']);
            if stem.is_empty() {
                name
            } else {
                stem
            }
        }
        _ => name,
    }
}

/// `initra generate page <name>`
///
/// Returns the path of the page component.
pub fn run(name: &str, opts: &PageOptions) -> Result<PathBuf> {
    validate_name(name)?;
    let variants = NameVariants::new(strip_page_suffix(name));
    let markup = opts.language.markup_ext();
    tracing::debug!(name, stem = %variants.original, target = ?opts.target, "generating page");

    match opts.target {
        PageTarget::React => {
            let dir = opts.path.clone().unwrap_or_else(|| PathBuf::from("src/pages"));
            let page = dir.join(format!("{}Page.{markup}", variants.pascal));
            let mut planned = vec![(
                page.clone(),
                tpl::react_page(&variants, opts.language, opts.css),
            )];
            if opts.css {
                let path = dir.join(format!("{}Page.scss", variants.pascal));
                planned.push((path, tpl::stylesheet(&variants)));
            }
            if opts.test {
                let path = dir.join(format!("{}Page.test.{markup}", variants.pascal));
                planned.push((path, tpl::test(&variants, false)));
            }
            files::create_all(&planned)?;
            println!(
                "\n{} Page {}Page generated in {}",
                "✓".green().bold(),
                variants.pascal.bold(),
                dir.display().to_string().cyan()
            );
            Ok(page)
        }
        PageTarget::Next => {
            let dir = opts
                .path
                .clone()
                .unwrap_or_else(|| PathBuf::from("app"))
                .join(&variants.kebab);
            let page = dir.join(format!("page.{markup}"));
            let mut planned = vec![
                (page.clone(), tpl::next_page(&variants, opts.language, opts.css)),
                (dir.join(format!("loading.{markup}")), tpl::next_loading()),
                (dir.join(format!("error.{markup}")), tpl::next_error(opts.language)),
            ];
            if opts.css {
                let path = dir.join(format!("{}.scss", variants.kebab));
                planned.push((path, tpl::stylesheet(&variants)));
            }
            if opts.test {
                let path = dir.join(format!("page.test.{markup}"));
                planned.push((path, tpl::test(&variants, true)));
            }
            files::create_all(&planned)?;
            println!(
                "\n{} Page {} generated in {}",
                "✓".green().bold(),
                variants.pascal.bold(),
                dir.display().to_string().cyan()
            );
            println!("  Route: {}", format!("/{}", variants.kebab).cyan());
            Ok(page)
        }
    }
}
