//! The path cache: a one-line file remembering where the settings file lives

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::errors::{ToggleError, ToggleResult};

/// Cache file, relative to the working directory
pub const DEFAULT_CACHE_FILE: &str = ".vscode/settingsPath.txt";

/// Shown once when the cache is empty or absent
pub const PROMPT: &str = "path to your vscode settings file: ";

enum CacheState {
    Absent,
    Empty,
    Cached(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCache {
    path: PathBuf,
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_FILE)
    }
}

impl PathCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// First line of the cache, or `None` when the file is absent or empty
    pub fn read(&self) -> ToggleResult<Option<PathBuf>> {
        match self.state()? {
            CacheState::Cached(target) => Ok(Some(target)),
            CacheState::Absent | CacheState::Empty => Ok(None),
        }
    }

    fn state(&self) -> ToggleResult<CacheState> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CacheState::Absent),
            Err(source) => return Err(self.unavailable(source)),
        };

        let first = content.lines().next().unwrap_or_default();
        if first.is_empty() {
            Ok(CacheState::Empty)
        } else {
            Ok(CacheState::Cached(PathBuf::from(first)))
        }
    }

    /// Overwrite the cache with `target`, exactly as given
    pub fn store(&self, target: &str) -> ToggleResult<()> {
        fs::write(&self.path, target).map_err(|source| self.unavailable(source))
    }

    /// Delete the cache so the next run prompts again. Returns whether a
    /// cache file existed.
    pub fn clear(&self) -> ToggleResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(self.unavailable(source)),
        }
    }

    /// Resolve the target path, prompting on stdin if the cache is empty
    pub fn resolve(&self) -> ToggleResult<PathBuf> {
        let stdin = io::stdin();
        self.resolve_with(stdin.lock(), io::stdout())
    }

    /// Resolve the target path using the given prompt streams
    pub fn resolve_with<R, W>(&self, mut input: R, mut output: W) -> ToggleResult<PathBuf>
    where
        R: BufRead,
        W: Write,
    {
        match self.state()? {
            CacheState::Cached(target) => {
                debug!("settings path {} from {}", target.display(), self.path.display());
                return Ok(target);
            }
            CacheState::Absent => {
                writeln!(output, "{} not found. creating it", self.path.display())
                    .map_err(ToggleError::Prompt)?;
                self.create()?;
            }
            CacheState::Empty => {}
        }

        write!(output, "{PROMPT}").map_err(ToggleError::Prompt)?;
        output.flush().map_err(ToggleError::Prompt)?;

        let mut answer = String::new();
        let read = input.read_line(&mut answer).map_err(ToggleError::Prompt)?;
        let answer = answer.trim_end_matches(['\n', '\r']);
        if read == 0 || answer.is_empty() {
            return Err(ToggleError::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no settings path entered",
            )));
        }

        self.store(answer)?;
        info!("cached settings path in {}", self.path.display());
        Ok(PathBuf::from(answer))
    }

    fn create(&self) -> ToggleResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.unavailable(source))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map(drop)
            .map_err(|source| self.unavailable(source))
    }

    fn unavailable(&self, source: io::Error) -> ToggleError {
        ToggleError::CacheUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}
