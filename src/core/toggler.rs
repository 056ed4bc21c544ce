//! The toggle pipeline: cache lookup, load, flip, persist

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::cache::PathCache;
use super::errors::ToggleResult;
use super::loader::{load_config, persist_config, LoadMode};
use super::types::{SettingsFormat, ToggleOutcome, ToggleRule};

/// What a toggle or status run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleReport {
    pub target: PathBuf,
    pub format: SettingsFormat,
    pub outcome: ToggleOutcome,
}

/// Runs toggles against the settings file the cache points at
///
/// Built once by the caller from the tool configuration; nothing here reads
/// global state.
#[derive(Debug, Clone)]
pub struct Toggler {
    cache: PathCache,
    rule: ToggleRule,
    mode: LoadMode,
    target: Option<PathBuf>,
}

impl Toggler {
    pub fn new(cache: PathCache, rule: ToggleRule) -> Self {
        Self {
            cache,
            rule,
            mode: LoadMode::Auto,
            target: None,
        }
    }

    pub fn with_mode(mut self, mode: LoadMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use `target` instead of the cached path; the cache is left alone
    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    pub fn rule(&self) -> &ToggleRule {
        &self.rule
    }

    /// Flip the flag, prompting on stdin if the cache is empty
    pub fn run(&self) -> ToggleResult<ToggleReport> {
        let stdin = io::stdin();
        self.run_with(stdin.lock(), io::stdout())
    }

    pub fn run_with<R, W>(&self, input: R, output: W) -> ToggleResult<ToggleReport>
    where
        R: BufRead,
        W: Write,
    {
        let target = self.resolve_target(input, output)?;
        self.toggle_at(&target)
    }

    /// Report the current state, prompting on stdin if the cache is empty
    pub fn status(&self) -> ToggleResult<ToggleReport> {
        let stdin = io::stdin();
        self.status_with(stdin.lock(), io::stdout())
    }

    pub fn status_with<R, W>(&self, input: R, output: W) -> ToggleResult<ToggleReport>
    where
        R: BufRead,
        W: Write,
    {
        let target = self.resolve_target(input, output)?;
        let handler = load_config(&target, &self.rule, self.mode)?;
        Ok(ToggleReport {
            format: handler.format(),
            outcome: handler.current(),
            target,
        })
    }

    /// Load `target`, flip the flag, and write it back unless nothing changed
    pub fn toggle_at(&self, target: &Path) -> ToggleResult<ToggleReport> {
        let mut handler = load_config(target, &self.rule, self.mode)?;
        let outcome = handler.toggle();

        if outcome.changed() {
            persist_config(target, handler.as_ref())?;
            info!("{} in {}", outcome.message(&self.rule), target.display());
        } else {
            debug!("no marker in {}, leaving it untouched", target.display());
        }

        Ok(ToggleReport {
            target: target.to_path_buf(),
            format: handler.format(),
            outcome,
        })
    }

    fn resolve_target<R, W>(&self, input: R, output: W) -> ToggleResult<PathBuf>
    where
        R: BufRead,
        W: Write,
    {
        match &self.target {
            Some(target) => Ok(target.clone()),
            None => self.cache.resolve_with(input, output),
        }
    }
}
