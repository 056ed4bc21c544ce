use anyhow::Result;
use std::io::{self, BufRead, Write};

use super::{report_toggle_error, Command};
use crate::core::{ToggleOutcome, Toggler};

pub struct StatusCommand {
    toggler: Toggler,
}

impl StatusCommand {
    pub fn new(toggler: Toggler) -> Self {
        Self { toggler }
    }

    pub fn run<R, W>(&self, input: R, out: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let report = match self.toggler.status_with(input, &mut *out) {
            Ok(report) => report,
            Err(err) => return report_toggle_error(err, out),
        };

        let label = self.toggler.rule().label();
        let state = match report.outcome {
            ToggleOutcome::Hiding => format!("{label} files are hidden"),
            ToggleOutcome::Showing => format!("{label} files are shown"),
            ToggleOutcome::Missing => format!("no {label} exclude line found"),
        };
        writeln!(
            out,
            "{} ({} file: {})",
            state,
            report.format,
            report.target.display()
        )?;
        Ok(())
    }
}

impl Command for StatusCommand {
    fn execute(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), &mut stdout.lock())
    }
}
