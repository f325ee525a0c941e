//! Command dispatch logic for talentrank
use std::time::Instant;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands;
use talentrank_core::config::AppConfig;
use talentrank_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // `config init` must work even when the existing file is invalid
    if let Some(Commands::Config {
        command: ConfigCommands::Init { force },
    }) = &cli.command
    {
        return commands::config::init(cli, *force);
    }

    let config = AppConfig::resolve(cli.config.as_deref())?;

    tracing::debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Jobs) => commands::jobs::list(cli, &config),

        Some(Commands::Show { job }) => commands::jobs::show(cli, &config, job),

        Some(Commands::Rank(args)) => commands::rank::execute(cli, &config, args),

        Some(Commands::Score(args)) => commands::score::execute(cli, &config, args),

        Some(Commands::Check) => commands::check::execute(cli, &config),

        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => commands::config::show(cli, &config),
            ConfigCommands::Init { force } => commands::config::init(cli, *force),
        },
    }
}

fn handle_no_command() -> Result<()> {
    println!("talentrank {}", env!("CARGO_PKG_VERSION"));
    println!("Run `talentrank --help` for usage information.");
    Ok(())
}
