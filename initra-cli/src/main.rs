use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use initra_cli::commands::backend::{self, BackendKind, MiddlewareKind};
use initra_cli::commands::component::{self, ComponentOptions};
use initra_cli::commands::init::{self, InitOptions, PackageManager, SystemRunner};
use initra_cli::commands::page::{self, PageOptions, PageTarget};
use initra_cli::commands::route::{self, RouteOptions};
use initra_cli::commands::service::{self, ServiceOptions, ServiceSide};
use initra_cli::config::InitraConfig;
use initra_cli::error::{InitraError, Result};

#[derive(Parser)]
#[command(name = "initra", version, about = "initra: scaffold React, Next.js and Express projects")]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project from a starter template
    Init {
        /// Starter template: react, node or next
        #[arg(short, long)]
        template: Option<String>,
        /// Project directory name
        #[arg(short, long)]
        name: Option<String>,
        /// Install dependencies with yarn instead of npm
        #[arg(long)]
        yarn: bool,
        /// Initialize a git repository with a first commit
        #[arg(long)]
        git: bool,
        /// Do not install dependencies
        #[arg(long)]
        skip_install: bool,
    },
    /// Generate source files
    #[command(alias = "g")]
    Generate {
        #[command(subcommand)]
        kind: GenerateKind,
    },
}

#[derive(Args, Clone, Copy)]
struct LangArgs {
    /// Emit TypeScript
    #[arg(long, conflicts_with = "js")]
    ts: bool,
    /// Emit JavaScript
    #[arg(long)]
    js: bool,
}

#[derive(Subcommand)]
enum GenerateKind {
    /// React component
    #[command(alias = "c")]
    Component {
        name: String,
        /// Base directory (default: src/components)
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Comma separated props, each name or name:type
        #[arg(long)]
        props: Option<String>,
        #[command(flatten)]
        lang: LangArgs,
        /// Add a SCSS stylesheet
        #[arg(long)]
        css: bool,
        /// Add a Testing Library test
        #[arg(long)]
        test: bool,
        /// Add a Storybook story
        #[arg(long)]
        story: bool,
        /// Layout component with header, main and footer
        #[arg(long)]
        layout: bool,
        /// Next.js server component
        #[arg(long, conflicts_with = "client")]
        server: bool,
        /// Add the 'use client' directive
        #[arg(long)]
        client: bool,
    },
    /// React page or Next.js app router page
    #[command(alias = "p")]
    Page {
        name: String,
        /// Next.js app router page
        #[arg(long, conflicts_with = "react")]
        next: bool,
        /// React page (default)
        #[arg(long)]
        react: bool,
        #[command(flatten)]
        lang: LangArgs,
        #[arg(long)]
        css: bool,
        #[arg(long)]
        test: bool,
        /// Base directory (default: src/pages, or app for Next.js)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// API handler or page route
    #[command(alias = "r")]
    Route {
        name: String,
        /// Generate an API handler instead of a page
        #[arg(long)]
        api: bool,
        /// HTTP method of the API handler
        #[arg(short, long, default_value = "GET")]
        method: String,
        #[command(flatten)]
        lang: LangArgs,
        /// Nested path segments, e.g. admin/users
        #[arg(short, long)]
        path: Option<String>,
        /// Generate an Express router instead
        #[arg(long)]
        backend: bool,
    },
    /// Data service
    #[command(alias = "s")]
    Service {
        name: String,
        /// Browser-side fetch service (default)
        #[arg(long, conflicts_with = "server")]
        client: bool,
        /// Server-side data service
        #[arg(long)]
        server: bool,
        #[command(flatten)]
        lang: LangArgs,
        /// Directory under src/
        #[arg(short, long)]
        path: Option<String>,
        /// Generate an Express service instead
        #[arg(long)]
        backend: bool,
    },
    /// Express controller
    Controller {
        name: String,
        #[command(flatten)]
        lang: LangArgs,
    },
    /// Mongoose model
    Model {
        name: String,
        #[command(flatten)]
        lang: LangArgs,
    },
    /// Request DTO with validation
    Dto {
        name: String,
        #[command(flatten)]
        lang: LangArgs,
    },
    /// Express middleware
    Middleware {
        name: String,
        /// JWT authentication middleware
        #[arg(long)]
        jwt: bool,
        #[command(flatten)]
        lang: LangArgs,
    },
    /// Controller, service, model, dto and route for one resource
    Api {
        name: String,
        #[command(flatten)]
        lang: LangArgs,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("INITRA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn generate(kind: GenerateKind) -> Result<()> {
    let cwd = Path::new(".");
    let config = InitraConfig::load(cwd)?;
    let language = |lang: LangArgs| config.resolve_language(lang.ts, lang.js, cwd);

    match kind {
        GenerateKind::Component {
            name,
            path,
            props,
            lang,
            css,
            test,
            story,
            layout,
            server,
            client,
        } => {
            let opts = ComponentOptions {
                path: path.or_else(|| config.components_dir.clone().map(PathBuf::from)),
                props,
                language: language(lang),
                css,
                test,
                story,
                layout,
                server,
                client,
            };
            component::run(&name, &opts).map(drop)
        }
        GenerateKind::Page {
            name,
            next,
            react: _,
            lang,
            css,
            test,
            path,
        } => {
            let target = if next { PageTarget::Next } else { PageTarget::React };
            // The configured pages directory only applies to React pages.
            let path = match target {
                PageTarget::React => {
                    path.or_else(|| config.pages_dir.clone().map(PathBuf::from))
                }
                PageTarget::Next => path,
            };
            let opts = PageOptions {
                target,
                path,
                language: language(lang),
                css,
                test,
            };
            page::run(&name, &opts).map(drop)
        }
        GenerateKind::Route {
            name,
            api,
            method,
            lang,
            path,
            backend: true,
        } => {
            if api || path.is_some() || !method.eq_ignore_ascii_case("GET") {
                tracing::warn!("--api, --method and --path are ignored with --backend");
            }
            backend::generate(BackendKind::Route, &name, language(lang), MiddlewareKind::Default)
                .map(drop)
        }
        GenerateKind::Route {
            name,
            api,
            method,
            lang,
            path,
            backend: false,
        } => {
            let opts = RouteOptions {
                api,
                method: route::resolve_method(api, &method)?,
                language: language(lang),
                path,
            };
            route::run(&name, &opts).map(drop)
        }
        GenerateKind::Service {
            name,
            lang,
            backend: true,
            ..
        } => backend::generate(BackendKind::Service, &name, language(lang), MiddlewareKind::Default)
            .map(drop),
        GenerateKind::Service {
            name,
            client: _,
            server,
            lang,
            path,
            backend: false,
        } => {
            let opts = ServiceOptions {
                side: if server { ServiceSide::Server } else { ServiceSide::Client },
                language: language(lang),
                path,
            };
            service::run(&name, &opts).map(drop)
        }
        GenerateKind::Controller { name, lang } => {
            backend::generate(BackendKind::Controller, &name, language(lang), MiddlewareKind::Default)
                .map(drop)
        }
        GenerateKind::Model { name, lang } => {
            backend::generate(BackendKind::Model, &name, language(lang), MiddlewareKind::Default)
                .map(drop)
        }
        GenerateKind::Dto { name, lang } => {
            backend::generate(BackendKind::Dto, &name, language(lang), MiddlewareKind::Default)
                .map(drop)
        }
        GenerateKind::Middleware { name, jwt, lang } => {
            let kind = if jwt { MiddlewareKind::Jwt } else { MiddlewareKind::Default };
            backend::generate(BackendKind::Middleware, &name, language(lang), kind).map(drop)
        }
        GenerateKind::Api { name, lang } => backend::api(&name, language(lang)).map(drop),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init {
            template,
            name,
            yarn,
            git,
            skip_install,
        } => {
            let cwd = std::env::current_dir().map_err(|e| InitraError::io(".", e))?;
            let config = InitraConfig::load(&cwd)?;
            let package_manager = if yarn {
                PackageManager::Yarn
            } else {
                config.package_manager.unwrap_or_default()
            };
            let opts = InitOptions {
                template,
                name,
                package_manager,
                git,
                skip_install,
            };
            init::run(opts, &cwd, &SystemRunner).map(drop)
        }
        Commands::Generate { kind } => generate(kind),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
