/// Domain-specific error types for js-toggle using thiserror
///
/// Every failure carries enough context to be reported on its own. Callers
/// inspect [`ToggleError::kind`] to decide whether a failure is printed and
/// swallowed or propagated as a hard error.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for toggle operations
#[derive(Error, Debug)]
pub enum ToggleError {
    #[error("No such file or directory: {path}")]
    TargetNotFound { path: PathBuf },

    #[error("Cannot access path cache {path}: {source}")]
    CacheUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported file extension: '.{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to read settings path from prompt: {0}")]
    Prompt(#[source] io::Error),
}

/// Coarse classification used by the CLI to pick a reporting strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Cache or target file missing or unreachable; printed, not fatal
    MissingFile,
    /// Settings file extension not recognized; printed highlighted, not fatal
    UnsupportedFormat,
    /// Anything else; propagated
    Other,
}

impl ToggleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TargetNotFound { .. } | Self::CacheUnavailable { .. } => ErrorKind::MissingFile,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            _ => ErrorKind::Other,
        }
    }

    /// Map an I/O error raised while reading `path`, promoting "not found"
    pub(crate) fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::TargetNotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}

pub type ToggleResult<T> = Result<T, ToggleError>;
