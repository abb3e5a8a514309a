use colored::Colorize;
use dialoguer::{Input, Select};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::naming::validate_name;
use super::project::Framework;
use crate::error::{InitraError, Result};

pub const README_PLACEHOLDER: &str = "__PROJECT_NAME__";
pub const COMMIT_MESSAGE: &str = "Initial commit from initra CLI";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Command that starts the dev server in the new project.
    pub fn dev_command(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run dev",
            PackageManager::Yarn => "yarn dev",
        }
    }
}

/// Spawns the external programs `initra init` depends on.
pub trait ProcessRunner {
    /// Run `program` in `cwd` with captured output. Failure carries stderr.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;

    /// Run `program` in `cwd` attached to the terminal.
    fn run_inherited(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// [`ProcessRunner`] backed by [`std::process::Command`].
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        tracing::debug!(program, ?args, cwd = %cwd.display(), "spawning");
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| InitraError::Process {
                program: program.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InitraError::Process {
                program: program.to_string(),
                message: format!("{} {}", output.status, stderr.trim()),
            });
        }
        Ok(())
    }

    fn run_inherited(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        tracing::debug!(program, ?args, cwd = %cwd.display(), "spawning with inherited stdio");
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| InitraError::Process {
                program: program.to_string(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(InitraError::Process {
                program: program.to_string(),
                message: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Raw flags for `initra init`. Missing values are prompted for.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub template: Option<String>,
    pub name: Option<String>,
    pub package_manager: PackageManager,
    pub git: bool,
    pub skip_install: bool,
}

fn resolve_template(template: Option<&str>) -> Result<Framework> {
    if let Some(raw) = template {
        match raw.parse::<Framework>() {
            Ok(framework) => return Ok(framework),
            Err(e) => tracing::warn!(template = raw, error = %e, "ignoring unknown template"),
        }
    }
    let choices: Vec<&str> = Framework::ALL.iter().map(|f| f.as_str()).collect();
    let idx = Select::new()
        .with_prompt("Choose a template")
        .items(&choices[..])
        .default(0)
        .interact()?;
    Ok(Framework::ALL[idx])
}

fn resolve_name(name: Option<String>) -> Result<String> {
    match name {
        Some(name) => Ok(name),
        None => Ok(Input::<String>::new()
            .with_prompt("Project name")
            .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
                if input.trim().is_empty() {
                    Err("Project name is required.")
                } else {
                    Ok(())
                }
            })
            .interact_text()?
            .trim()
            .to_string()),
    }
}

/// `git clone --depth 1` the starter into `dest`, then drop its history.
pub fn clone_starter(runner: &dyn ProcessRunner, framework: Framework, dest: &Path) -> Result<()> {
    let url = format!("https://github.com/{}.git", framework.starter_repository());
    let parent = dest.parent().unwrap_or_else(|| Path::new("."));
    let dest_str = dest.to_string_lossy();
    runner
        .run("git", &["clone", "--depth", "1", url.as_str(), &*dest_str], parent)
        .map_err(|e| InitraError::Clone(e.to_string()))?;

    let git_dir = dest.join(".git");
    if git_dir.exists() {
        fs::remove_dir_all(&git_dir).map_err(|e| InitraError::io(&git_dir, e))?;
    }
    Ok(())
}

/// Replace every README placeholder with the project name.
///
/// Returns `false` when the project has no `README.md`.
pub fn patch_readme(dir: &Path, name: &str) -> Result<bool> {
    let readme = dir.join("README.md");
    if !readme.exists() {
        return Ok(false);
    }
    let content = fs::read_to_string(&readme).map_err(|e| InitraError::io(&readme, e))?;
    fs::write(&readme, content.replace(README_PLACEHOLDER, name))
        .map_err(|e| InitraError::io(&readme, e))?;
    Ok(true)
}

/// `initra init`
///
/// Creates `<cwd>/<name>` from the starter repository and returns its path.
pub fn run(opts: InitOptions, cwd: &Path, runner: &dyn ProcessRunner) -> Result<PathBuf> {
    let framework = resolve_template(opts.template.as_deref())?;
    let name = resolve_name(opts.name)?;
    validate_name(&name)?;

    let dir = cwd.join(&name);
    if dir.exists() {
        return Err(InitraError::AlreadyExists(dir));
    }

    println!(
        "\n{} Downloading {} template into \"{}\"...\n",
        "🚀".blue(),
        framework.as_str().bold(),
        name
    );
    clone_starter(runner, framework, &dir)?;
    println!("{} Template downloaded", "✓".green());

    if patch_readme(&dir, &name)? {
        tracing::debug!("patched README.md");
    }

    let pm = opts.package_manager;
    if opts.skip_install {
        println!("{} Skipping dependency installation", "-".dimmed());
    } else {
        println!(
            "\n{} Installing dependencies using {}...\n",
            "📦".yellow(),
            pm.program()
        );
        runner.run_inherited(pm.program(), &["install"], &dir)?;
    }

    if opts.git {
        println!("\n{} Initializing git...", "🔧".blue());
        runner.run("git", &["init"], &dir)?;
        runner.run("git", &["add", "."], &dir)?;
        runner.run("git", &["commit", "-m", COMMIT_MESSAGE], &dir)?;
        println!("{} Git repository initialized", "✓".green());
    }

    println!("\n{}", "Setup complete. Next steps:".green().bold());
    println!("  {}", format!("cd {name}").cyan());
    if opts.skip_install {
        println!("  {}", format!("{} install", pm.program()).cyan());
    }
    println!("  {}\n", pm.dev_command().cyan());
    Ok(dir)
}
