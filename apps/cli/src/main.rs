mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init()?;
    Ok(cli.run())
}
