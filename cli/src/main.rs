mod cli;
mod commands;
mod report;

use cli::{Cli, Commands};
use commands::{batch, interactive};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    match &cli.command {
        Commands::Interactive => interactive::run(&cli),
        Commands::Match(args) => batch::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
