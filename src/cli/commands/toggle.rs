use anyhow::Result;
use colored::*;
use std::io::{self, BufRead, Write};

use super::{report_toggle_error, Command};
use crate::core::{ToggleOutcome, Toggler};

pub struct ToggleCommand {
    toggler: Toggler,
}

impl ToggleCommand {
    pub fn new(toggler: Toggler) -> Self {
        Self { toggler }
    }

    /// Run against explicit prompt streams; status lines go to `out`
    pub fn run<R, W>(&self, input: R, out: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        match self.toggler.run_with(input, &mut *out) {
            Ok(report) => {
                let message = report.outcome.message(self.toggler.rule());
                match report.outcome {
                    ToggleOutcome::Missing => writeln!(out, "{}", message.yellow())?,
                    _ => writeln!(out, "{message}")?,
                }
                Ok(())
            }
            Err(err) => report_toggle_error(err, out),
        }
    }
}

impl Command for ToggleCommand {
    fn execute(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), &mut stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PathCache, ToggleRule};
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_prints_status_line() {
        let dir = TempDir::new().unwrap();
        let settings = dir.path().join("settings.json");
        fs::write(&settings, "{}").unwrap();
        let command = ToggleCommand::new(
            Toggler::new(PathCache::default(), ToggleRule::default()).with_target(&settings),
        );

        let mut out = Vec::new();
        command.run(Cursor::new(""), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hiding .js files\n");

        let mut out = Vec::new();
        command.run(Cursor::new(""), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "showing .js files\n");
    }

    #[test]
    fn test_missing_target_printed_not_fatal() {
        let dir = TempDir::new().unwrap();
        let settings = dir.path().join("settings.json");
        let command = ToggleCommand::new(
            Toggler::new(PathCache::default(), ToggleRule::default()).with_target(&settings),
        );

        let mut out = Vec::new();
        command.run(Cursor::new(""), &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("No such file or directory"));
    }
}
