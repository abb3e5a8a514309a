//! Command implementations for the `initra` CLI.
//!
//! Each generator follows the same pipeline: validate the name, compute
//! casing variants and target paths, render a template, write the files
//! and print a status line.

/// Express backend generators: `initra generate controller|model|dto|middleware|api`.
///
/// Writes `src/<kind dir>/<kebab>.<kind>.<ts|js>`. Existing files are
/// skipped with a warning instead of failing the command.
pub mod backend;

/// React component generator: `initra generate component <name>`.
pub mod component;

/// File writing helpers shared by the generators.
pub mod files;

/// Project scaffolding: `initra init`.
///
/// Clones a starter repository, patches its README, installs dependencies
/// and optionally creates the first git commit.
pub mod init;

/// Name validation and casing conversions.
pub mod naming;

/// Page generator for React and the Next.js app router.
pub mod page;

/// Framework and language detection for the current project.
pub mod project;

/// Route generator: API handlers or page routes, depending on `--api`.
pub mod route;

/// Client and server data service generator.
pub mod service;

/// Template rendering and the source templates themselves.
pub mod templates;
