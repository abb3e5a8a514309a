use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InitraError, Result};

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| InitraError::io(dir, e))?;
        tracing::debug!(path = %dir.display(), "created directory");
    }
    Ok(())
}

/// Write a new file, creating parent directories. Never overwrites.
pub fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Err(InitraError::AlreadyExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| InitraError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Write a new file and print the usual `✓ Created <path>` line.
pub fn create(path: &Path, content: &str) -> Result<()> {
    write_new(path, content)?;
    println!(
        "{} Created {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}

/// Write a group of files that belong together. Fails before touching the
/// disk if any of them already exists.
pub fn create_all(files: &[(PathBuf, String)]) -> Result<()> {
    if let Some((path, _)) = files.iter().find(|(path, _)| path.exists()) {
        return Err(InitraError::AlreadyExists(path.clone()));
    }
    for (path, content) in files {
        create(path, content)?;
    }
    Ok(())
}
