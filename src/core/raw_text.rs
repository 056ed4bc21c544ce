//! Line-oriented handler for settings files that are not plain JSON
//!
//! VS Code accepts comments and trailing commas in `settings.json`, which a
//! strict JSON parser rejects. In that case the marker line
//! `"**/*.js": true` is toggled by commenting it in or out.

use tracing::debug;

use super::errors::ToggleResult;
use super::traits::ConfigHandler;
use super::types::{SettingsFormat, ToggleOutcome, ToggleRule};

const COMMENT_PREFIX: &str = "//";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerState {
    Active,
    Commented,
}

/// Settings text kept as lines, each with its original terminator
#[derive(Debug, Clone)]
pub struct RawTextSettings {
    lines: Vec<String>,
    rule: ToggleRule,
}

impl RawTextSettings {
    pub fn parse(text: &str, rule: ToggleRule) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(String::from).collect(),
            rule,
        }
    }

    fn find_marker(&self) -> Option<(usize, MarkerState)> {
        let marker = self.rule.marker();
        self.lines
            .iter()
            .enumerate()
            .find_map(|(idx, line)| classify(line, &marker).map(|state| (idx, state)))
    }
}

impl ConfigHandler for RawTextSettings {
    fn format(&self) -> SettingsFormat {
        SettingsFormat::RawText
    }

    fn current(&self) -> ToggleOutcome {
        match self.find_marker() {
            Some((_, MarkerState::Active)) => ToggleOutcome::Hiding,
            Some((_, MarkerState::Commented)) => ToggleOutcome::Showing,
            None => ToggleOutcome::Missing,
        }
    }

    fn toggle(&mut self) -> ToggleOutcome {
        let Some((idx, state)) = self.find_marker() else {
            return ToggleOutcome::Missing;
        };
        debug!("toggling marker on line {}", idx + 1);

        let line = &self.lines[idx];
        let indent_len = line.len() - line.trim_start().len();
        let (indent, body) = line.split_at(indent_len);

        let (rewritten, outcome) = match state {
            MarkerState::Active => (
                format!("{indent}{COMMENT_PREFIX} {body}"),
                ToggleOutcome::Showing,
            ),
            MarkerState::Commented => {
                let uncommented = body[COMMENT_PREFIX.len()..]
                    .trim_start_matches(|c: char| c == ' ' || c == '\t');
                (format!("{indent}{uncommented}"), ToggleOutcome::Hiding)
            }
        };

        self.lines[idx] = rewritten;
        outcome
    }

    fn render(&self) -> ToggleResult<String> {
        Ok(self.lines.concat())
    }
}

fn classify(line: &str, marker: &str) -> Option<MarkerState> {
    let trimmed = line.trim();
    match trimmed.strip_prefix(COMMENT_PREFIX) {
        Some(rest) if strip_comma(rest.trim_start()) == marker => Some(MarkerState::Commented),
        Some(_) => None,
        None if strip_comma(trimmed) == marker => Some(MarkerState::Active),
        None => None,
    }
}

fn strip_comma(s: &str) -> &str {
    s.strip_suffix(',').unwrap_or(s).trim_end()
}
