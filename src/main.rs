mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use lyricsync::cli::{Cli, Commands, ConfigCommands};
use lyricsync::logging::{self, LogTarget};
use lyricsync::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let verbose = cli.log_level();

    match cli.command {
        Commands::Completions { shell } => commands::completions::handle(shell),
        Commands::Config(command) => {
            logging::init(verbose.unwrap_or("warn"), LogTarget::Stderr)?;
            match command {
                ConfigCommands::Show => commands::config::handle_show(),
                ConfigCommands::Path => commands::config::handle_path(),
                ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
            }
        }
        command => {
            let config = Config::load()?;
            let level = verbose.unwrap_or(config.logging.level.as_str());

            // The player owns the terminal, so it only logs to a file.
            let target = match (&command, config.logging.file.as_deref()) {
                (Commands::Play(_), Some(path)) => LogTarget::File(path),
                (Commands::Play(_), None) => LogTarget::Off,
                _ => LogTarget::Stderr,
            };
            logging::init(level, target)?;

            match &command {
                Commands::Play(args) => commands::play::handle(args, &config),
                Commands::Resolve(args) => commands::resolve::handle(args),
                Commands::Lines(args) => commands::lines::handle(args, &config),
                Commands::Check(args) => commands::check::handle(args),
                Commands::Completions { .. } | Commands::Config(_) => Ok(()),
            }
        }
    }
}
