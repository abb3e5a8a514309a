use std::path::PathBuf;

/// Error type shared by every `initra` command.
#[derive(Debug, thiserror::Error)]
pub enum InitraError {
    /// The name failed validation. The message says which rule was broken.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A flag or option value is not acceptable.
    #[error("{0}")]
    InvalidOption(String),

    /// The target file or directory is already there.
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// Filesystem error, tagged with the path that caused it.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external program could not be started or exited unsuccessfully.
    #[error("`{program}` failed: {message}")]
    Process { program: String, message: String },

    /// The starter repository could not be downloaded.
    #[error("Download failed: {0}")]
    Clone(String),

    /// `initra.toml` could not be read or holds an unsupported value.
    #[error("Config error: {0}")]
    Config(String),

    /// Interactive prompt was aborted or the terminal is unavailable.
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

impl InitraError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InitraError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, InitraError>;
