use anyhow::Result;
use js_toggle::cli;

fn main() -> Result<()> {
    cli::run_cli()
}
