mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::Cli::parse();
    let differs = cli::run(&cli)?;
    if differs && cli.exit_code {
        std::process::exit(1);
    }

    Ok(())
}
