use anyhow::Result;
use std::io::{self, Write};

use super::{report_toggle_error, Command};
use crate::core::PathCache;

pub struct ResetCommand {
    cache: PathCache,
}

impl ResetCommand {
    pub fn new(cache: PathCache) -> Self {
        Self { cache }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.cache.clear() {
            Ok(true) => writeln!(
                out,
                "forgot settings path cached in {}",
                self.cache.path().display()
            )?,
            Ok(false) => writeln!(
                out,
                "no cached settings path at {}",
                self.cache.path().display()
            )?,
            Err(err) => return report_toggle_error(err, out),
        }
        Ok(())
    }
}

impl Command for ResetCommand {
    fn execute(&self) -> Result<()> {
        self.run(&mut io::stdout().lock())
    }
}
