//! # initra-cli
//!
//! Command-line tool for scaffolding React, Next.js and Express projects.
//!
//! This crate provides the `initra` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `initra init` | Create a project from a starter template |
//! | `initra generate component <name>` | React component with optional styles, test, story |
//! | `initra generate page <name>` | React page or Next.js app router page |
//! | `initra generate route <name>` | API handler or page route |
//! | `initra generate service <name>` | Client or server data service |
//! | `initra generate controller\|model\|dto\|middleware <name>` | Express backend file |
//! | `initra generate api <name>` | Controller, service, model, dto and route at once |
//!
//! ## Architecture
//!
//! - [`commands`]: one module per command plus shared helpers
//! - [`config`]: `initra.toml` project defaults
//! - [`error`]: the crate-wide [`InitraError`](error::InitraError)

pub mod commands;
pub mod config;
pub mod error;
